// Car inventory model
//
// A car is identified by (manufacturer, year, model). Prices are stored as
// DECIMAL(12,2) and never go through floating point.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{to_money, validate_money, AppError, Result};

/// First year a production automobile existed
pub const MIN_CAR_YEAR: i32 = 1886;

const MANUFACTURER_MAX_LEN: usize = 80;
const MODEL_MAX_LEN: usize = 80;

/// A car in the dealership inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub manufacturer: String,
    pub year: i32,
    pub model: String,
    /// What the dealership paid for the car
    pub cost_price: Decimal,
    /// Asking price shown to customers
    pub potential_sale_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// `Toyota Corolla (2020)`
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.manufacturer, self.model, self.year)
    }

    /// `Toyota Corolla`, the key best-selling reports group on
    pub fn make_and_model(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }
}

/// Editable car fields, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarInput {
    pub manufacturer: String,
    pub year: i32,
    pub model: String,
    pub cost_price: Decimal,
    pub potential_sale_price: Decimal,
}

impl CarInput {
    /// Trim text fields and validate every field
    pub fn into_validated(self) -> Result<Self> {
        let input = Self {
            manufacturer: self.manufacturer.trim().to_string(),
            model: self.model.trim().to_string(),
            ..self
        };
        input.validate()?;
        Ok(Self {
            cost_price: to_money(input.cost_price),
            potential_sale_price: to_money(input.potential_sale_price),
            ..input
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.manufacturer.trim().is_empty() {
            return Err(AppError::validation("manufacturer cannot be empty"));
        }
        if self.manufacturer.chars().count() > MANUFACTURER_MAX_LEN {
            return Err(AppError::validation(format!(
                "manufacturer cannot exceed {} characters",
                MANUFACTURER_MAX_LEN
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::validation("model cannot be empty"));
        }
        if self.model.chars().count() > MODEL_MAX_LEN {
            return Err(AppError::validation(format!(
                "model cannot exceed {} characters",
                MODEL_MAX_LEN
            )));
        }

        if self.year < MIN_CAR_YEAR {
            return Err(AppError::validation(format!(
                "year must be {} or later, got {}",
                MIN_CAR_YEAR, self.year
            )));
        }

        validate_money("cost_price", self.cost_price)?;
        validate_money("potential_sale_price", self.potential_sale_price)?;

        Ok(())
    }
}
