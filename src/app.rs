// Service wiring shared by the HTTP server and the test harness

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::modules::cars::{CarRepository, CarService, MySqlCarRepository};
use crate::modules::employees::{EmployeeRepository, EmployeeService, MySqlEmployeeRepository};
use crate::modules::reports::ReportService;
use crate::modules::sales::{MySqlSaleRepository, SaleQueryService, SaleRepository, SaleService};

/// Every service the HTTP handlers extract from app data
#[derive(Clone)]
pub struct AppServices {
    pub employees: Arc<EmployeeService>,
    pub cars: Arc<CarService>,
    pub sales: Arc<SaleService>,
    pub sale_queries: Arc<SaleQueryService>,
    pub reports: Arc<ReportService>,
}

impl AppServices {
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        car_repo: Arc<dyn CarRepository>,
        sale_repo: Arc<dyn SaleRepository>,
    ) -> Self {
        let sale_queries = Arc::new(SaleQueryService::new(sale_repo.clone()));

        Self {
            employees: Arc::new(EmployeeService::new(employee_repo.clone())),
            cars: Arc::new(CarService::new(car_repo.clone())),
            sales: Arc::new(SaleService::new(sale_repo, employee_repo, car_repo)),
            reports: Arc::new(ReportService::new(sale_queries.clone())),
            sale_queries,
        }
    }

    /// Services backed by the MySQL repositories
    pub fn mysql(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlEmployeeRepository::new(pool.clone())),
            Arc::new(MySqlCarRepository::new(pool.clone())),
            Arc::new(MySqlSaleRepository::new(pool)),
        )
    }

    /// Register the services as app data along with the API routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.employees.clone()))
            .app_data(web::Data::new(self.cars.clone()))
            .app_data(web::Data::new(self.sales.clone()))
            .app_data(web::Data::new(self.sale_queries.clone()))
            .app_data(web::Data::new(self.reports.clone()))
            .configure(crate::modules::configure_api);
    }
}
