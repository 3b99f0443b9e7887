use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::employees::models::{Employee, EmployeeInput};
use crate::modules::employees::repositories::EmployeeRepository;

/// Service for employee business logic
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.employee_repo.list().await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee> {
        self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {}", id)))
    }

    pub async fn create_employee(&self, input: EmployeeInput) -> Result<Employee> {
        let input = input.into_validated()?;
        let employee = self.employee_repo.create(&input).await?;

        info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    pub async fn update_employee(&self, id: i64, input: EmployeeInput) -> Result<Employee> {
        let input = input.into_validated()?;
        let employee = self
            .employee_repo
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {}", id)))?;

        info!(employee_id = id, "Employee updated");
        Ok(employee)
    }

    /// Delete an employee; refused with `Conflict` while sales reference it
    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        match self.employee_repo.delete(id).await {
            Ok(true) => {
                info!(employee_id = id, "Employee deleted");
                Ok(())
            }
            Ok(false) => Err(AppError::not_found(format!("Employee {}", id))),
            Err(AppError::Conflict(msg)) => {
                warn!(employee_id = id, "Refused to delete referenced employee");
                Err(AppError::Conflict(msg))
            }
            Err(e) => Err(e),
        }
    }
}
