use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::{format_money, Result};
use crate::modules::reports::models::{SalesReport, TopSalesperson};
use crate::modules::reports::services::{ExportService, ReportService};
use crate::modules::sales::models::{SaleFilter, SaleFilterQuery, SaleResponse};
use crate::modules::sales::services::SaleQueryService;

/// Query parameters for the report endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Exact sale date (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,
    /// Start of the date range, inclusive
    #[serde(default)]
    pub start: Option<String>,
    /// End of the date range, inclusive
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    /// `csv` downloads the filtered sales instead of the JSON report
    #[serde(default)]
    pub export: Option<String>,
}

impl ReportQuery {
    fn wants_csv(&self) -> bool {
        self.export
            .as_deref()
            .map(|v| v.trim().eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
    }

    fn filter(&self) -> Result<SaleFilter> {
        SaleFilterQuery {
            date: self.date.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            employee_id: self.employee_id.clone(),
        }
        .into_filter()
    }
}

/// Response structure for the sales report
#[derive(Debug, Serialize, Deserialize)]
pub struct SalesReportResponse {
    pub filters: SaleFilter,
    pub sale_count: usize,
    pub total_profit: String, // Decimal as string for JSON precision
    pub best_selling_car: Option<String>,
    pub top_salesperson: Option<TopSalesperson>,
    pub sales: Vec<SaleResponse>,
}

impl From<SalesReport> for SalesReportResponse {
    fn from(report: SalesReport) -> Self {
        Self {
            sale_count: report.sales.len(),
            total_profit: format_money(report.total_profit),
            best_selling_car: report.best_selling_car,
            top_salesperson: report.top_salesperson,
            sales: report.sales.iter().map(SaleResponse::from).collect(),
            filters: report.filter,
        }
    }
}

/// Build a CSV download response
pub fn csv_attachment(filename: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(body)
}

/// GET /reports
///
/// Returns total profit, best-selling car and top salesperson for the
/// filtered sales, or the filtered sales as CSV when `export=csv`.
pub async fn get_sales_report(
    report_service: web::Data<Arc<ReportService>>,
    query_service: web::Data<Arc<SaleQueryService>>,
    query: web::Query<ReportQuery>,
) -> Result<HttpResponse> {
    let filter = query.filter()?;

    if query.wants_csv() {
        let sales = query_service.filter_sales(&filter).await?;
        let body = ExportService::export_sales_csv(&sales)?;
        return Ok(csv_attachment("sales_report.csv", body));
    }

    let report = report_service.generate_sales_report(filter).await?;
    Ok(HttpResponse::Ok().json(SalesReportResponse::from(report)))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("", web::get().to(get_sales_report)));
}
