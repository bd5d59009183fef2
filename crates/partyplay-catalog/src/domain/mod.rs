//! Domain model for the Party Catalog context.

pub mod activity;
pub mod catalog;
pub mod locale;
pub mod party;
