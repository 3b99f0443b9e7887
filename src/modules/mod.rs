pub mod cars;
pub mod employees;
pub mod health;
pub mod reports;
pub mod sales;
pub mod transfer;

use actix_web::web;

/// Register every record and report route
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    employees::controllers::configure(cfg);
    cars::controllers::configure(cfg);
    sales::controllers::configure(cfg);
    reports::controllers::configure(cfg);
}
