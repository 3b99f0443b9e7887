pub mod controllers;
pub mod models;
pub mod services;

pub use models::{SalesReport, TopSalesperson};
pub use services::{ExportService, ReportService};
