use async_trait::async_trait;

use crate::core::error::AppResult;

/// Base repository trait for CRUD operations
/// Every entity repository implements this trait for consistency
#[async_trait]
pub trait Repository<T, New, ID>: Send + Sync {
    /// Insert a new record and return it with its generated ID
    async fn create(&self, input: &New) -> AppResult<T>;

    /// Find record by ID
    async fn find_by_id(&self, id: ID) -> AppResult<Option<T>>;

    /// Replace the editable fields of an existing record
    ///
    /// Returns `None` when no record has the given ID.
    async fn update(&self, id: ID, input: &New) -> AppResult<Option<T>>;

    /// Delete a record by ID
    ///
    /// Returns `false` when no record has the given ID. Records still
    /// referenced by other records are refused with `AppError::Conflict`.
    async fn delete(&self, id: ID) -> AppResult<bool>;

    /// List all records ordered by ID
    async fn list(&self) -> AppResult<Vec<T>>;
}
