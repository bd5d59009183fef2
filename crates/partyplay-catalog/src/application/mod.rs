//! Application services for the Party Catalog context.

pub mod loader;
pub mod query_handlers;
