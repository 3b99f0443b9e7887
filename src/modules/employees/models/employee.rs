// Employee model with contact-detail validation
//
// Employees are referenced by sales and cannot be deleted while any sale
// still points at them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

const FULL_NAME_MAX_LEN: usize = 120;
const POSITION_MAX_LEN: usize = 80;
const PHONE_MAX_LEN: usize = 20;
const EMAIL_MAX_LEN: usize = 254;

/// A dealership employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub position: String,
    pub phone: String,
    /// Unique across all employees
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Label used in listings, e.g. `John Doe (Manager)`
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.full_name, self.position)
    }
}

/// Editable employee fields, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub full_name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
}

impl EmployeeInput {
    /// Trim surrounding whitespace and validate every field
    pub fn into_validated(self) -> Result<Self> {
        let input = Self {
            full_name: self.full_name.trim().to_string(),
            position: self.position.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<()> {
        validate_text("full_name", &self.full_name, FULL_NAME_MAX_LEN)?;
        validate_text("position", &self.position, POSITION_MAX_LEN)?;

        if self.phone.len() > PHONE_MAX_LEN || !is_valid_phone(&self.phone) {
            return Err(AppError::validation(
                "phone must be like +48123456789 or 123456789",
            ));
        }

        if self.email.len() > EMAIL_MAX_LEN || !is_valid_email(&self.email) {
            return Err(AppError::validation(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }

        Ok(())
    }
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} cannot be empty", field)));
    }

    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{} cannot exceed {} characters",
            field, max_len
        )));
    }

    Ok(())
}

/// Optional leading `+` followed by 7 to 15 ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (7..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !domain.ends_with('.'))
            .unwrap_or(false)
}
