use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::cars::models::CarInput;
use crate::modules::cars::services::CarService;
use crate::modules::reports::controllers::csv_attachment;
use crate::modules::reports::services::ExportService;

/// GET /cars
pub async fn list_cars(service: web::Data<Arc<CarService>>) -> Result<HttpResponse, AppError> {
    let cars = service.list_cars().await?;
    Ok(HttpResponse::Ok().json(cars))
}

/// POST /cars
pub async fn create_car(
    service: web::Data<Arc<CarService>>,
    request: web::Json<CarInput>,
) -> Result<HttpResponse, AppError> {
    let car = service.create_car(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(car))
}

/// GET /cars/{id}
pub async fn get_car(
    service: web::Data<Arc<CarService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let car = service.get_car(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(car))
}

/// PUT /cars/{id}
pub async fn update_car(
    service: web::Data<Arc<CarService>>,
    path: web::Path<i64>,
    request: web::Json<CarInput>,
) -> Result<HttpResponse, AppError> {
    let car = service
        .update_car(path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(car))
}

/// DELETE /cars/{id}
pub async fn delete_car(
    service: web::Data<Arc<CarService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_car(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /cars/export
pub async fn export_cars(service: web::Data<Arc<CarService>>) -> Result<HttpResponse, AppError> {
    let cars = service.list_cars().await?;
    let body = ExportService::export_cars_csv(&cars)?;
    Ok(csv_attachment("cars.csv", body))
}

/// Configure car routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cars")
            .route("", web::get().to(list_cars))
            .route("", web::post().to(create_car))
            .route("/export", web::get().to(export_cars))
            .route("/{id}", web::get().to(get_car))
            .route("/{id}", web::put().to(update_car))
            .route("/{id}", web::delete().to(delete_car)),
    );
}
