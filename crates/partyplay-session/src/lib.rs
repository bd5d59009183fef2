//! Partyplay — Session & Progress bounded context.
//!
//! Responsible for turning a party catalog into the ordered activity
//! sequence a crew plays through, tracking the crew's position in it and
//! persisting that position between visits.

pub mod application;
pub mod domain;
