pub mod error;
pub mod money;
pub mod traits;

pub use error::{AppError, AppResult, Result};
pub use money::{format_money, to_money, validate_money, zero_money, MONEY_SCALE};
