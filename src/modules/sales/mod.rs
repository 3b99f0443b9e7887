// Sales module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewSale, Sale, SaleFilter, SaleInput, SaleRecord, SaleView};
pub use repositories::{MySqlSaleRepository, SaleRepository};
pub use services::{SaleQueryService, SaleService};
