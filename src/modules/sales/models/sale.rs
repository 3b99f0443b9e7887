// Sale model and its eagerly-joined read form
//
// A sale references one employee and one car. Profit is derived on read from
// the sale price and the car's current cost price; it is never stored.

use chrono::{DateTime, Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{format_money, to_money, validate_money, Result};
use crate::modules::cars::models::Car;
use crate::modules::employees::models::Employee;

/// A stored sale row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i64,
    pub employee_id: i64,
    pub car_id: i64,
    pub sale_date: NaiveDate,
    pub actual_sale_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sale fields accepted from clients; `sale_date` defaults to today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleInput {
    pub employee_id: i64,
    pub car_id: i64,
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
    pub actual_sale_price: Decimal,
}

/// Validated sale ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub employee_id: i64,
    pub car_id: i64,
    pub sale_date: NaiveDate,
    pub actual_sale_price: Decimal,
}

impl SaleInput {
    /// Validate the price and resolve the sale date against the local calendar
    pub fn into_validated(self) -> Result<NewSale> {
        validate_money("actual_sale_price", self.actual_sale_price)?;

        Ok(NewSale {
            employee_id: self.employee_id,
            car_id: self.car_id,
            sale_date: self
                .sale_date
                .unwrap_or_else(|| Local::now().date_naive()),
            actual_sale_price: to_money(self.actual_sale_price),
        })
    }
}

/// A sale together with the employee and car it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    pub sale_date: NaiveDate,
    pub actual_sale_price: Decimal,
    pub employee: Employee,
    pub car: Car,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SaleRecord {
    /// actual_sale_price - car.cost_price, exact decimal arithmetic
    pub fn profit(&self) -> Decimal {
        self.actual_sale_price - self.car.cost_price
    }
}

/// JSON shape of a sale with its resolved names and profit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleResponse {
    pub id: i64,
    pub sale_date: NaiveDate,
    pub employee_id: i64,
    pub employee: String,
    pub car_id: i64,
    pub car: String,
    pub actual_sale_price: String, // Decimal as string for JSON precision
    pub cost_price: String,
    pub profit: String,
}

impl From<&SaleRecord> for SaleResponse {
    fn from(record: &SaleRecord) -> Self {
        Self {
            id: record.id,
            sale_date: record.sale_date,
            employee_id: record.employee.id,
            employee: record.employee.full_name.clone(),
            car_id: record.car.id,
            car: record.car.label(),
            actual_sale_price: format_money(record.actual_sale_price),
            cost_price: format_money(record.car.cost_price),
            profit: format_money(record.profit()),
        }
    }
}
