//! Shared test doubles and fixtures for the partyplay party engine.

mod clock;
mod fixtures;
mod loader;
mod store;

pub use clock::{FixedClock, fixed_now};
pub use fixtures::{activity, catalog_with_phases, finale, phase, scenario_catalog};
pub use loader::{FailingCatalogLoader, GatedCatalogLoader, StaticCatalogLoader};
pub use store::{FailingStore, RecordingStore, StoreOp};
