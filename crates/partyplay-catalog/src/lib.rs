//! Partyplay — Party Catalog bounded context.
//!
//! Responsible for the locale-specific party data (phases, activities,
//! crews, guests, printables), locale negotiation, catalog loading and
//! the read-only views built from a loaded catalog.

pub mod application;
pub mod domain;
