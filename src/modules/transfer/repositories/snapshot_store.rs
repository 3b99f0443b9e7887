use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::{AppError, AppResult};
use crate::modules::cars::models::Car;
use crate::modules::employees::models::Employee;
use crate::modules::sales::models::Sale;
use crate::modules::transfer::models::DataSnapshot;

/// Whole-store read and restore used by data import/export
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read every record, each table ordered by id
    async fn load(&self) -> AppResult<DataSnapshot>;

    /// Insert-or-update every record by primary key, all or nothing
    async fn restore(&self, snapshot: &DataSnapshot) -> AppResult<()>;
}

pub struct MySqlSnapshotStore {
    pool: MySqlPool,
}

impl MySqlSnapshotStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn restore_employees(
        tx: &mut Transaction<'_, MySql>,
        snapshot: &DataSnapshot,
    ) -> AppResult<()> {
        for employee in &snapshot.employees {
            let fields = &employee.fields;
            sqlx::query(
                r#"
                INSERT INTO employees (id, full_name, position, phone, email)
                VALUES (?, ?, ?, ?, ?)
                ON DUPLICATE KEY UPDATE
                    full_name = VALUES(full_name),
                    position = VALUES(position),
                    phone = VALUES(phone),
                    email = VALUES(email)
                "#,
            )
            .bind(employee.pk)
            .bind(&fields.full_name)
            .bind(&fields.position)
            .bind(&fields.phone)
            .bind(&fields.email)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::from_constraint(
                    e,
                    format!("Employee {} conflicts with an existing record", employee.pk),
                )
            })?;
        }
        Ok(())
    }

    async fn restore_cars(
        tx: &mut Transaction<'_, MySql>,
        snapshot: &DataSnapshot,
    ) -> AppResult<()> {
        for car in &snapshot.cars {
            let fields = &car.fields;
            sqlx::query(
                r#"
                INSERT INTO cars (id, manufacturer, year, model, cost_price, potential_sale_price)
                VALUES (?, ?, ?, ?, ?, ?)
                ON DUPLICATE KEY UPDATE
                    manufacturer = VALUES(manufacturer),
                    year = VALUES(year),
                    model = VALUES(model),
                    cost_price = VALUES(cost_price),
                    potential_sale_price = VALUES(potential_sale_price)
                "#,
            )
            .bind(car.pk)
            .bind(&fields.manufacturer)
            .bind(fields.year)
            .bind(&fields.model)
            .bind(fields.cost_price)
            .bind(fields.potential_sale_price)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::from_constraint(
                    e,
                    format!("Car {} conflicts with an existing record", car.pk),
                )
            })?;
        }
        Ok(())
    }

    async fn restore_sales(
        tx: &mut Transaction<'_, MySql>,
        snapshot: &DataSnapshot,
    ) -> AppResult<()> {
        for sale in &snapshot.sales {
            let fields = &sale.fields;
            sqlx::query(
                r#"
                INSERT INTO sales (id, employee_id, car_id, sale_date, actual_sale_price)
                VALUES (?, ?, ?, ?, ?)
                ON DUPLICATE KEY UPDATE
                    employee_id = VALUES(employee_id),
                    car_id = VALUES(car_id),
                    sale_date = VALUES(sale_date),
                    actual_sale_price = VALUES(actual_sale_price)
                "#,
            )
            .bind(sale.pk)
            .bind(fields.employee)
            .bind(fields.car)
            .bind(fields.sale_date)
            .bind(fields.actual_sale_price)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::from_constraint(
                    e,
                    format!(
                        "Sale {} references a missing employee or car",
                        sale.pk
                    ),
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for MySqlSnapshotStore {
    async fn load(&self) -> AppResult<DataSnapshot> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, full_name, position, phone, email, created_at, updated_at FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

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

        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, employee_id, car_id, sale_date, actual_sale_price, created_at, updated_at
            FROM sales
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DataSnapshot::from_records(&employees, &cars, &sales))
    }

    async fn restore(&self, snapshot: &DataSnapshot) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        // Dropping `tx` on an early return rolls everything back
        Self::restore_employees(&mut tx, snapshot).await?;
        Self::restore_cars(&mut tx, snapshot).await?;
        Self::restore_sales(&mut tx, snapshot).await?;

        tx.commit().await?;
        Ok(())
    }
}
