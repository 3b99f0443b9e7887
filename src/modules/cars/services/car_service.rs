use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::cars::models::{Car, CarInput};
use crate::modules::cars::repositories::CarRepository;

/// Service for car inventory
pub struct CarService {
    car_repo: Arc<dyn CarRepository>,
}

impl CarService {
    pub fn new(car_repo: Arc<dyn CarRepository>) -> Self {
        Self { car_repo }
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>> {
        self.car_repo.list().await
    }

    pub async fn get_car(&self, id: i64) -> Result<Car> {
        self.car_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Car {}", id)))
    }

    pub async fn create_car(&self, input: CarInput) -> Result<Car> {
        let input = input.into_validated()?;
        let car = self.car_repo.create(&input).await?;

        info!(car_id = car.id, car = %car.label(), "Car added to inventory");
        Ok(car)
    }

    /// Update a car; cost price changes flow into every profit computed afterwards
    pub async fn update_car(&self, id: i64, input: CarInput) -> Result<Car> {
        let input = input.into_validated()?;
        let car = self
            .car_repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Car {}", id)))?;

        info!(car_id = id, "Car updated");
        Ok(car)
    }

    /// Delete a car; refused with `Conflict` while sales reference it
    pub async fn delete_car(&self, id: i64) -> Result<()> {
        match self.car_repo.delete(id).await {
            Ok(true) => {
                info!(car_id = id, "Car deleted");
                Ok(())
            }
            Ok(false) => Err(AppError::not_found(format!("Car {}", id))),
            Err(AppError::Conflict(msg)) => {
                warn!(car_id = id, "Refused to delete referenced car");
                Err(AppError::Conflict(msg))
            }
            Err(e) => Err(e),
        }
    }
}
