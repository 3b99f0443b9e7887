mod sale;
mod sale_view;

pub use sale::{NewSale, Sale, SaleInput, SaleRecord, SaleResponse};
pub use sale_view::{default_sale_order, SaleFilter, SaleFilterQuery, SaleView};
