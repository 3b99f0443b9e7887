// Test Data Factory
//
// Builds valid inputs and seeds records through the services so every test
// goes through the same validation as the HTTP layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

use dealership::cars::{Car, CarInput};
use dealership::employees::{Employee, EmployeeInput};
use dealership::sales::{SaleInput, SaleRecord};
use dealership::AppServices;

/// Test data factory for generating unique test data
pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique email so repeated runs never collide on the unique index
    pub fn random_email() -> String {
        format!("test-{}@example.com", Uuid::new_v4().simple())
    }

    pub fn employee_input(full_name: &str) -> EmployeeInput {
        EmployeeInput {
            full_name: full_name.to_string(),
            position: "Sales".to_string(),
            phone: "+48123456789".to_string(),
            email: Self::random_email(),
        }
    }

    pub fn employee_payload(full_name: &str) -> Value {
        json!({
            "full_name": full_name,
            "position": "Sales",
            "phone": "+48123456789",
            "email": Self::random_email(),
        })
    }

    pub fn car_input(manufacturer: &str, model: &str, year: i32, cost_price: Decimal) -> CarInput {
        CarInput {
            manufacturer: manufacturer.to_string(),
            year,
            model: model.to_string(),
            cost_price,
            potential_sale_price: cost_price,
        }
    }

    pub fn car_payload(manufacturer: &str, model: &str, year: i32, cost_price: &str) -> Value {
        json!({
            "manufacturer": manufacturer,
            "year": year,
            "model": model,
            "cost_price": cost_price,
            "potential_sale_price": cost_price,
        })
    }

    pub fn sale_input(
        employee_id: i64,
        car_id: i64,
        sale_date: NaiveDate,
        actual_sale_price: Decimal,
    ) -> SaleInput {
        SaleInput {
            employee_id,
            car_id,
            sale_date: Some(sale_date),
            actual_sale_price,
        }
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

pub async fn seed_employee(services: &AppServices, full_name: &str) -> Employee {
    services
        .employees
        .create_employee(TestDataFactory::employee_input(full_name))
        .await
        .unwrap()
}

pub async fn seed_car(
    services: &AppServices,
    manufacturer: &str,
    model: &str,
    year: i32,
    cost_price: Decimal,
) -> Car {
    services
        .cars
        .create_car(TestDataFactory::car_input(manufacturer, model, year, cost_price))
        .await
        .unwrap()
}

pub async fn seed_sale(
    services: &AppServices,
    employee: &Employee,
    car: &Car,
    sale_date: NaiveDate,
    actual_sale_price: Decimal,
) -> SaleRecord {
    services
        .sales
        .create_sale(TestDataFactory::sale_input(
            employee.id,
            car.id,
            sale_date,
            actual_sale_price,
        ))
        .await
        .unwrap()
}
