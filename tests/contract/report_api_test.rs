//! Contract tests for GET /reports
//!
//! JSON report fields, filter echo, empty defaults and the CSV download.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use rust_decimal_macros::dec;
use serde_json::Value;

use dealership::reports::controllers::SalesReportResponse;
use helpers::*;

#[actix_web::test]
async fn test_report_over_all_sales() {
    let store = MemoryStore::new();
    let services = store.services();
    let john = seed_employee(&services, "John Doe").await;
    let jane = seed_employee(&services, "Jane Roe").await;
    let corolla = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;
    let civic = seed_car(&services, "Honda", "Civic", 2019, dec!(9000.00)).await;

    seed_sale(&services, &john, &corolla, TestDataFactory::date(2024, 1, 1), dec!(12500.00)).await;
    seed_sale(&services, &john, &corolla, TestDataFactory::date(2024, 1, 2), dec!(11000.00)).await;
    seed_sale(&services, &jane, &civic, TestDataFactory::date(2024, 1, 3), dec!(9500.50)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/reports").to_request();
    let report: SalesReportResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(report.sale_count, 3);
    assert_eq!(report.total_profit, "4000.50");
    assert_eq!(report.best_selling_car.as_deref(), Some("Toyota Corolla"));
    let top = report.top_salesperson.unwrap();
    assert_eq!(top.full_name, "John Doe");
    assert_eq!(top.sale_count, 2);
    assert_eq!(report.sales.len(), 3);
}

#[actix_web::test]
async fn test_empty_report_uses_defaults() {
    let store = MemoryStore::new();
    let services = store.services();
    let employee = seed_employee(&services, "John Doe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;
    seed_sale(&services, &employee, &car, TestDataFactory::date(2024, 1, 1), dec!(12500.00)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/reports?date=2023-12-31")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_profit"], "0.00");
    assert!(body["best_selling_car"].is_null());
    assert!(body["top_salesperson"].is_null());
    assert_eq!(body["sales"], serde_json::json!([]));
    assert_eq!(body["filters"]["exact_date"], "2023-12-31");
}

#[actix_web::test]
async fn test_report_filters_by_employee_and_range() {
    let store = MemoryStore::new();
    let services = store.services();
    let john = seed_employee(&services, "John Doe").await;
    let jane = seed_employee(&services, "Jane Roe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;

    seed_sale(&services, &john, &car, TestDataFactory::date(2024, 1, 1), dec!(12500.00)).await;
    seed_sale(&services, &john, &car, TestDataFactory::date(2024, 2, 1), dec!(10500.00)).await;
    seed_sale(&services, &jane, &car, TestDataFactory::date(2024, 2, 1), dec!(20000.00)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/reports?start=2024-01-15&end=2024-02-28&employee_id={}",
            john.id
        ))
        .to_request();
    let report: SalesReportResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(report.sale_count, 1);
    assert_eq!(report.total_profit, "500.00");
    assert_eq!(report.filters.employee_id, Some(john.id));
}

#[actix_web::test]
async fn test_report_rejects_bad_dates() {
    let store = MemoryStore::new();
    let services = store.services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/reports?start=2024-13-01").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_report_csv_export() {
    let store = MemoryStore::new();
    let services = store.services();
    let employee = seed_employee(&services, "John Doe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;
    let sale = seed_sale(&services, &employee, &car, TestDataFactory::date(2024, 1, 1), dec!(12500.00)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/reports?export=csv&date=2024-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"sales_report.csv\""
    );

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        format!(
            "{},2024-01-01,John Doe,Toyota Corolla (2020),12500.00,10000.00,2500.00",
            sale.id
        )
    );
}
