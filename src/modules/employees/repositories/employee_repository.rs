use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::traits::Repository;
use crate::core::{AppError, AppResult};
use crate::modules::employees::models::{Employee, EmployeeInput};

/// Repository for employee records
pub trait EmployeeRepository: Repository<Employee, EmployeeInput, i64> {}

pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for MySqlEmployeeRepository {}

#[async_trait]
impl Repository<Employee, EmployeeInput, i64> for MySqlEmployeeRepository {
    async fn create(&self, input: &EmployeeInput) -> AppResult<Employee> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (full_name, position, phone, email)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&input.full_name)
        .bind(&input.position)
        .bind(&input.phone)
        .bind(&input.email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(
                e,
                format!("Employee with email '{}' already exists", input.email),
            )
        })?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Employee {} missing after insert", id)))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, full_name, position, phone, email, created_at, updated_at
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn update(&self, id: i64, input: &EmployeeInput) -> AppResult<Option<Employee>> {
        sqlx::query(
            r#"
            UPDATE employees
            SET full_name = ?, position = ?, phone = ?, email = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.full_name)
        .bind(&input.position)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(
                e,
                format!("Employee with email '{}' already exists", input.email),
            )
        })?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_constraint(
                    e,
                    format!("Employee {} is referenced by existing sales", id),
                )
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, full_name, position, phone, email, created_at, updated_at
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }
}
