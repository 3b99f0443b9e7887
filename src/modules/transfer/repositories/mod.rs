pub mod snapshot_store;

pub use snapshot_store::{MySqlSnapshotStore, SnapshotStore};
