//! Key-value stores for player progress.
//!
//! `FileStore` keeps every key in one JSON document inside a profile
//! directory, standing in for per-browser storage. `MemoryStore` forgets
//! everything when the process exits.

pub mod file_store;
pub mod memory_store;
pub mod schema;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
