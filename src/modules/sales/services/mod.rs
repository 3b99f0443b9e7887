pub mod sale_query_service;
pub mod sale_service;

pub use sale_query_service::SaleQueryService;
pub use sale_service::SaleService;
