pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DataSnapshot, FixtureEntry, FixtureModel};
pub use repositories::{MySqlSnapshotStore, SnapshotStore};
pub use services::{DataTransferService, TransferSummary};
