//! Contract tests for the sale endpoints and the sale list filters

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use chrono::Local;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use dealership::middleware::{ErrorHandler, RequestId};
use helpers::*;

#[actix_web::test]
async fn test_create_sale_returns_joined_record() {
    let store = MemoryStore::new();
    let services = store.services();
    let employee = seed_employee(&services, "John Doe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/sales")
        .set_json(json!({
            "employee_id": employee.id,
            "car_id": car.id,
            "sale_date": "2024-01-01",
            "actual_sale_price": "12500.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let sale: Value = test::read_body_json(resp).await;
    assert_eq!(sale["sale_date"], "2024-01-01");
    assert_eq!(sale["employee"], "John Doe");
    assert_eq!(sale["car"], "Toyota Corolla (2020)");
    assert_eq!(sale["actual_sale_price"], "12500.00");
    assert_eq!(sale["cost_price"], "10000.00");
    assert_eq!(sale["profit"], "2500.00");
}

#[actix_web::test]
async fn test_sale_date_defaults_to_today() {
    let store = MemoryStore::new();
    let services = store.services();
    let employee = seed_employee(&services, "John Doe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/sales")
        .set_json(json!({
            "employee_id": employee.id,
            "car_id": car.id,
            "actual_sale_price": "12500.00"
        }))
        .to_request();
    let sale: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        sale["sale_date"],
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

#[actix_web::test]
async fn test_sale_with_unknown_references_is_404() {
    let store = MemoryStore::new();
    let services = store.services();
    let employee = seed_employee(&services, "John Doe").await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/sales")
        .set_json(json!({
            "employee_id": employee.id,
            "car_id": 42,
            "actual_sale_price": "12500.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.sale_count(), 0);
}

#[actix_web::test]
async fn test_negative_price_rejected() {
    let store = MemoryStore::new();
    let services = store.services();
    let employee = seed_employee(&services, "John Doe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/sales")
        .set_json(json!({
            "employee_id": employee.id,
            "car_id": car.id,
            "actual_sale_price": "-5.00"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_is_newest_first_and_filterable() {
    let store = MemoryStore::new();
    let services = store.services();
    let john = seed_employee(&services, "John Doe").await;
    let jane = seed_employee(&services, "Jane Roe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;

    let first = seed_sale(&services, &john, &car, TestDataFactory::date(2024, 1, 1), dec!(11000.00)).await;
    let second = seed_sale(&services, &jane, &car, TestDataFactory::date(2024, 1, 5), dec!(12000.00)).await;
    let third = seed_sale(&services, &john, &car, TestDataFactory::date(2024, 1, 5), dec!(13000.00)).await;
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/sales").to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = sales.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    let req = test::TestRequest::get()
        .uri(&format!("/sales?employee_id={}", john.id))
        .to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = sales.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![third.id, first.id]);

    let req = test::TestRequest::get()
        .uri("/sales?start=2024-01-02&end=2024-01-31&employee_id=")
        .to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sales.len(), 2);

    let req = test::TestRequest::get().uri("/sales?date=2024-01-01").to_request();
    let sales: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0]["id"], first.id);
}

#[actix_web::test]
async fn test_bad_filter_values_are_400() {
    let store = MemoryStore::new();
    let services = store.services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    for uri in ["/sales?date=01-01-2024", "/sales?start=yesterday", "/sales?employee_id=abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[actix_web::test]
async fn test_update_and_delete_sale() {
    let store = MemoryStore::new();
    let services = store.services();
    let employee = seed_employee(&services, "John Doe").await;
    let car = seed_car(&services, "Toyota", "Corolla", 2020, dec!(10000.00)).await;
    let sale = seed_sale(&services, &employee, &car, TestDataFactory::date(2024, 1, 1), dec!(12500.00)).await;
    let app = test::init_service(
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .configure(|cfg| services.configure(cfg)),
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/sales/{}", sale.id))
        .set_json(json!({
            "employee_id": employee.id,
            "car_id": car.id,
            "sale_date": "2024-02-01",
            "actual_sale_price": "9999.99"
        }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["sale_date"], "2024-02-01");
    assert_eq!(updated["profit"], "-0.01");

    let req = test::TestRequest::delete()
        .uri(&format!("/sales/{}", sale.id))
        .insert_header(("X-Request-ID", "delete-sale-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "delete-sale-1");

    let req = test::TestRequest::get()
        .uri(&format!("/sales/{}", sale.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    // Referenced records can be deleted once the sale is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/employees/{}", employee.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
}
