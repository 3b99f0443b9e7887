//! Car dealership record keeping
//!
//! Employees, cars and sales stored in MySQL, with filtered sales reports
//! (total profit, best-selling car, top salesperson) and CSV exports.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppServices;
pub use modules::cars;
pub use modules::employees;
pub use modules::reports;
pub use modules::sales;
pub use modules::transfer;
