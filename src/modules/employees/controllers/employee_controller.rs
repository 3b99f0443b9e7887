use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::employees::models::EmployeeInput;
use crate::modules::employees::services::EmployeeService;
use crate::modules::reports::controllers::csv_attachment;
use crate::modules::reports::services::ExportService;

/// List employees
/// GET /employees
pub async fn list_employees(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create an employee
/// POST /employees
pub async fn create_employee(
    service: web::Data<Arc<EmployeeService>>,
    request: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = service.create_employee(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Get employee by ID
/// GET /employees/{id}
pub async fn get_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_employee(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Update an employee
/// PUT /employees/{id}
pub async fn update_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
    request: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = service
        .update_employee(path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete an employee
/// DELETE /employees/{id}
pub async fn delete_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_employee(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Download all employees as CSV
/// GET /employees/export
pub async fn export_employees(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_employees().await?;
    let body = ExportService::export_employees_csv(&employees)?;
    Ok(csv_attachment("employees.csv", body))
}

/// Configure employee routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("", web::get().to(list_employees))
            .route("", web::post().to(create_employee))
            .route("/export", web::get().to(export_employees))
            .route("/{id}", web::get().to(get_employee))
            .route("/{id}", web::put().to(update_employee))
            .route("/{id}", web::delete().to(delete_employee)),
    );
}
