//! Domain model for the Session & Progress context.

pub mod crew;
pub mod cursor;
pub mod events;
pub mod progress_key;
pub mod sequence;
