use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::sales::models::{SaleFilter, SaleView};

/// Employee with the most sales in a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSalesperson {
    pub full_name: String,
    pub sale_count: i64,
}

impl TopSalesperson {
    pub fn new(full_name: String, sale_count: i64) -> Self {
        Self {
            full_name,
            sale_count,
        }
    }
}

/// Sales report over one filtered view
#[derive(Debug, Clone)]
pub struct SalesReport {
    /// Constraints the view was built from
    pub filter: SaleFilter,
    /// Sum of profits, always at two decimal places
    pub total_profit: Decimal,
    /// `"{manufacturer} {model}"` with the most units sold
    pub best_selling_car: Option<String>,
    pub top_salesperson: Option<TopSalesperson>,
    pub sales: SaleView,
}

impl SalesReport {
    /// Check if the report covers no sales at all
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
