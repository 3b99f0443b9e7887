use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::traits::Repository;
use crate::core::{AppError, AppResult};
use crate::modules::cars::models::{Car, CarInput};

/// Repository for car inventory records
pub trait CarRepository: Repository<Car, CarInput, i64> {}

pub struct MySqlCarRepository {
    pool: MySqlPool,
}

impl MySqlCarRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn duplicate_car_message(input: &CarInput) -> String {
    format!(
        "Car {} {} ({}) already exists",
        input.manufacturer, input.model, input.year
    )
}

impl CarRepository for MySqlCarRepository {}

#[async_trait]
impl Repository<Car, CarInput, i64> for MySqlCarRepository {
    async fn create(&self, input: &CarInput) -> AppResult<Car> {
        let result = sqlx::query(
            r#"
            INSERT INTO cars (manufacturer, year, model, cost_price, potential_sale_price)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.manufacturer)
        .bind(input.year)
        .bind(&input.model)
        .bind(input.cost_price)
        .bind(input.potential_sale_price)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, duplicate_car_message(input)))?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Car {} missing after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            SELECT id, manufacturer, year, model, cost_price, potential_sale_price,
                   created_at, updated_at
            FROM cars
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(car)
    }

    async fn update(&self, id: i64, input: &CarInput) -> AppResult<Option<Car>> {
        sqlx::query(
            r#"
            UPDATE cars
            SET manufacturer = ?, year = ?, model = ?, cost_price = ?, potential_sale_price = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.manufacturer)
        .bind(input.year)
        .bind(&input.model)
        .bind(input.cost_price)
        .bind(input.potential_sale_price)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, duplicate_car_message(input)))?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_constraint(e, format!("Car {} is referenced by existing sales", id))
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT id, manufacturer, year, model, cost_price, potential_sale_price,
                   created_at, updated_at
            FROM cars
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }
}
