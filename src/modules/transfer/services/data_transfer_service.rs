use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::core::Result;
use crate::modules::transfer::models::{DataSnapshot, FixtureEntry};
use crate::modules::transfer::repositories::SnapshotStore;

/// Record counts moved by one export or import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransferSummary {
    pub employees: usize,
    pub cars: usize,
    pub sales: usize,
}

impl From<&DataSnapshot> for TransferSummary {
    fn from(snapshot: &DataSnapshot) -> Self {
        Self {
            employees: snapshot.employees.len(),
            cars: snapshot.cars.len(),
            sales: snapshot.sales.len(),
        }
    }
}

/// Dumps and restores all dealership records as a JSON file
pub struct DataTransferService {
    store: Arc<dyn SnapshotStore>,
}

impl DataTransferService {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Serialize the current store contents
    pub async fn export_json(&self) -> Result<String> {
        let snapshot = self.store.load().await?;
        let entries = snapshot.to_fixture()?;
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Write every record to `path`, replacing the file
    pub async fn export_to(&self, path: impl AsRef<Path>) -> Result<TransferSummary> {
        let path = path.as_ref();
        let snapshot = self.store.load().await?;
        let json = serde_json::to_string_pretty(&snapshot.to_fixture()?)?;

        tokio::fs::write(path, json).await?;

        let summary = TransferSummary::from(&snapshot);
        info!(
            path = %path.display(),
            employees = summary.employees,
            cars = summary.cars,
            sales = summary.sales,
            "Data exported"
        );
        Ok(summary)
    }

    /// Restore the records in `json`; nothing is written if any record fails
    pub async fn import_json(&self, json: &str) -> Result<TransferSummary> {
        let entries: Vec<FixtureEntry> = serde_json::from_str(json)?;
        let snapshot = DataSnapshot::from_fixture(entries)?;

        self.store.restore(&snapshot).await?;
        Ok(TransferSummary::from(&snapshot))
    }

    /// Read a dump from `path` and restore it
    pub async fn import_from(&self, path: impl AsRef<Path>) -> Result<TransferSummary> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let summary = self.import_json(&json).await?;

        info!(
            path = %path.display(),
            employees = summary.employees,
            cars = summary.cars,
            sales = summary.sales,
            "Data imported"
        );
        Ok(summary)
    }
}
