//! Application services for the Session & Progress context.

pub mod navigation;
pub mod play;
pub mod progress_store;
pub mod query_handlers;
