use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{to_money, zero_money, Result};
use crate::modules::reports::models::{SalesReport, TopSalesperson};
use crate::modules::sales::models::{SaleFilter, SaleView};
use crate::modules::sales::services::SaleQueryService;

/// Computes report metrics over a sale view.
///
/// The metric functions are pure and independent: each reads the same view
/// and none of them touches the store.
pub struct ReportService {
    query_service: Arc<SaleQueryService>,
}

impl ReportService {
    pub fn new(query_service: Arc<SaleQueryService>) -> Self {
        Self { query_service }
    }

    /// Filter sales and compute every metric over the resulting view
    pub async fn generate_sales_report(&self, filter: SaleFilter) -> Result<SalesReport> {
        let sales = self.query_service.filter_sales(&filter).await?;

        let report = SalesReport {
            total_profit: Self::total_profit(&sales),
            best_selling_car: Self::best_selling_car_name(&sales),
            top_salesperson: Self::top_salesperson(&sales),
            filter,
            sales,
        };

        if report.is_empty() {
            warn!(filter = ?report.filter, "Empty sales report generated");
        } else {
            info!(
                sale_count = report.sales.len(),
                total_profit = %report.total_profit,
                "Sales report generated"
            );
        }

        Ok(report)
    }

    /// Sum of (actual_sale_price - cost_price); `0.00` for an empty view
    pub fn total_profit(sales: &SaleView) -> Decimal {
        let total = sales
            .iter()
            .map(|sale| sale.profit())
            .fold(zero_money(), |acc, profit| acc + profit);

        to_money(total)
    }

    /// `"{manufacturer} {model}"` of the most-sold pair.
    ///
    /// Ties go to the lexicographically smallest (manufacturer, model).
    pub fn best_selling_car_name(sales: &SaleView) -> Option<String> {
        let counts = count_by(sales, |sale| {
            (sale.car.manufacturer.clone(), sale.car.model.clone())
        });

        most_frequent(counts).map(|((manufacturer, model), _)| format!("{} {}", manufacturer, model))
    }

    /// Employee full name with the most sales, and that count.
    ///
    /// Ties go to the lexicographically smallest name.
    pub fn top_salesperson(sales: &SaleView) -> Option<TopSalesperson> {
        let counts = count_by(sales, |sale| sale.employee.full_name.clone());

        most_frequent(counts).map(|(full_name, sale_count)| TopSalesperson::new(full_name, sale_count))
    }
}

fn count_by<K, F>(sales: &SaleView, key: F) -> BTreeMap<K, i64>
where
    K: Ord,
    F: Fn(&crate::modules::sales::models::SaleRecord) -> K,
{
    let mut counts = BTreeMap::new();
    for sale in sales {
        *counts.entry(key(sale)).or_insert(0) += 1;
    }
    counts
}

/// Highest count wins; keys iterate in ascending order so the first of equal
/// counts is kept.
fn most_frequent<K: Ord>(counts: BTreeMap<K, i64>) -> Option<(K, i64)> {
    counts
        .into_iter()
        .fold(None, |best: Option<(K, i64)>, (key, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((key, count)),
        })
}
