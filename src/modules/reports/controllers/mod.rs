mod report_controller;

pub use report_controller::{configure, csv_attachment, ReportQuery, SalesReportResponse};
