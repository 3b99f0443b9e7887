use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Decimal places carried by every stored money column (DECIMAL(12,2))
pub const MONEY_SCALE: u32 = 2;

/// Total significant digits allowed by the money columns
pub const MONEY_MAX_DIGITS: u32 = 12;

/// Normalise an amount to exactly two decimal places.
///
/// `2500` becomes `2500.00`; values already at scale 2 are returned as-is.
pub fn to_money(amount: Decimal) -> Decimal {
    let mut value = amount;
    value.rescale(MONEY_SCALE);
    value
}

/// Zero at money scale, rendered as `0.00`
pub fn zero_money() -> Decimal {
    Decimal::new(0, MONEY_SCALE)
}

/// Render an amount with exactly two decimal places and no separators
pub fn format_money(amount: Decimal) -> String {
    to_money(amount).to_string()
}

/// Validates that a value fits a non-negative DECIMAL(12,2) column
pub fn validate_money(field: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "{} cannot be negative",
            field
        )));
    }

    if amount.normalize().scale() > MONEY_SCALE {
        return Err(AppError::validation(format!(
            "{} must have at most {} decimal places",
            field, MONEY_SCALE
        )));
    }

    let integer_limit = Decimal::from(10u64.pow(MONEY_MAX_DIGITS - MONEY_SCALE));
    if amount >= integer_limit {
        return Err(AppError::validation(format!(
            "{} must have at most {} digits before the decimal point",
            field,
            MONEY_MAX_DIGITS - MONEY_SCALE
        )));
    }

    Ok(())
}
