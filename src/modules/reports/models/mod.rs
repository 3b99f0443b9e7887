pub mod sales_report;

pub use sales_report::{SalesReport, TopSalesperson};
