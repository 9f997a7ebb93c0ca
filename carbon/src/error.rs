//! Carbon-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarbonError {
    #[error("invalid {field}: {value}")]
    InvalidMeasurement { field: &'static str, value: String },

    #[error("invalid credits_spent for user {user_id}: {value}")]
    InvalidCredits { user_id: u64, value: String },
}
