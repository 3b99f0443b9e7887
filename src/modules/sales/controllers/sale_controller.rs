use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::sales::models::{SaleFilterQuery, SaleInput, SaleResponse};
use crate::modules::sales::services::{SaleQueryService, SaleService};

/// List sales, newest first, optionally filtered
/// GET /sales?date=&start=&end=&employee_id=
pub async fn list_sales(
    query_service: web::Data<Arc<SaleQueryService>>,
    query: web::Query<SaleFilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let view = query_service.filter_sales(&filter).await?;

    let sales: Vec<SaleResponse> = view.iter().map(SaleResponse::from).collect();
    Ok(HttpResponse::Ok().json(sales))
}

/// POST /sales
pub async fn create_sale(
    service: web::Data<Arc<SaleService>>,
    request: web::Json<SaleInput>,
) -> Result<HttpResponse, AppError> {
    let sale = service.create_sale(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(SaleResponse::from(&sale)))
}

/// GET /sales/{id}
pub async fn get_sale(
    service: web::Data<Arc<SaleService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let sale = service.get_sale(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SaleResponse::from(&sale)))
}

/// PUT /sales/{id}
pub async fn update_sale(
    service: web::Data<Arc<SaleService>>,
    path: web::Path<i64>,
    request: web::Json<SaleInput>,
) -> Result<HttpResponse, AppError> {
    let sale = service
        .update_sale(path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(SaleResponse::from(&sale)))
}

/// DELETE /sales/{id}
pub async fn delete_sale(
    service: web::Data<Arc<SaleService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_sale(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure sale routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("", web::get().to(list_sales))
            .route("", web::post().to(create_sale))
            .route("/{id}", web::get().to(get_sale))
            .route("/{id}", web::put().to(update_sale))
            .route("/{id}", web::delete().to(delete_sale)),
    );
}
