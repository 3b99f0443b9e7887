pub mod export_service;
pub mod report_service;

pub use export_service::{ExportService, CARS_CSV_HEADER, EMPLOYEES_CSV_HEADER, SALES_CSV_HEADER};
pub use report_service::ReportService;
