use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::cars::repositories::CarRepository;
use crate::modules::employees::repositories::EmployeeRepository;
use crate::modules::sales::models::{NewSale, SaleInput, SaleRecord};
use crate::modules::sales::repositories::SaleRepository;

/// Service for recording sales
pub struct SaleService {
    sale_repo: Arc<dyn SaleRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
    car_repo: Arc<dyn CarRepository>,
}

impl SaleService {
    pub fn new(
        sale_repo: Arc<dyn SaleRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
        car_repo: Arc<dyn CarRepository>,
    ) -> Self {
        Self {
            sale_repo,
            employee_repo,
            car_repo,
        }
    }

    pub async fn get_sale(&self, id: i64) -> Result<SaleRecord> {
        self.sale_repo
            .find_record(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Sale {}", id)))
    }

    pub async fn create_sale(&self, input: SaleInput) -> Result<SaleRecord> {
        let sale = input.into_validated()?;
        self.ensure_references_exist(&sale).await?;

        let created = self.sale_repo.create(&sale).await?;
        info!(
            sale_id = created.id,
            employee_id = sale.employee_id,
            car_id = sale.car_id,
            "Sale recorded"
        );

        self.get_sale(created.id).await
    }

    pub async fn update_sale(&self, id: i64, input: SaleInput) -> Result<SaleRecord> {
        let sale = input.into_validated()?;
        self.ensure_references_exist(&sale).await?;

        self.sale_repo
            .update(id, &sale)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Sale {}", id)))?;
        info!(sale_id = id, "Sale updated");

        self.get_sale(id).await
    }

    pub async fn delete_sale(&self, id: i64) -> Result<()> {
        if !self.sale_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Sale {}", id)));
        }

        info!(sale_id = id, "Sale deleted");
        Ok(())
    }

    async fn ensure_references_exist(&self, sale: &NewSale) -> Result<()> {
        if self.employee_repo.find_by_id(sale.employee_id).await?.is_none() {
            return Err(AppError::not_found(format!("Employee {}", sale.employee_id)));
        }

        if self.car_repo.find_by_id(sale.car_id).await?.is_none() {
            return Err(AppError::not_found(format!("Car {}", sale.car_id)));
        }

        Ok(())
    }
}
