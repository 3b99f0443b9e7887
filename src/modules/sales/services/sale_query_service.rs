use std::sync::Arc;

use tracing::debug;

use crate::core::Result;
use crate::modules::sales::models::{SaleFilter, SaleView};
use crate::modules::sales::repositories::SaleRepository;

/// Builds filtered, eagerly-joined views over sales.
///
/// Read-only: nothing here writes to the store. A missing employee id or a
/// date with no sales yields an empty view, not an error.
pub struct SaleQueryService {
    sale_repo: Arc<dyn SaleRepository>,
}

impl SaleQueryService {
    pub fn new(sale_repo: Arc<dyn SaleRepository>) -> Self {
        Self { sale_repo }
    }

    pub async fn filter_sales(&self, filter: &SaleFilter) -> Result<SaleView> {
        let view = self.sale_repo.filter(filter).await?;

        debug!(
            exact_date = ?filter.exact_date,
            start_date = ?filter.start_date,
            end_date = ?filter.end_date,
            employee_id = ?filter.employee_id,
            matched = view.len(),
            "Sales filtered"
        );

        Ok(view)
    }

    /// Every sale, newest first
    pub async fn all_sales(&self) -> Result<SaleView> {
        self.filter_sales(&SaleFilter::default()).await
    }
}
