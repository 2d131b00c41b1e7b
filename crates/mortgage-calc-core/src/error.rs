use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("wrong input types: {field} must be provided as {expected}")]
    InvalidInputType { field: String, expected: String },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: String, value: String },

    #[error("paymentSchedule must be 'weekly', 'biweekly', or 'monthly', got '{0}'")]
    UnknownSchedule(String),

    #[error("Down Payment Is Too Low: {offered} offered, at least {required} required")]
    DownPaymentTooLow { offered: Decimal, required: Decimal },

    #[error("the mortgage must be paid off between 5 to 25 years, got {0}")]
    AmortizationOutOfRange(Decimal),

    #[error("invalid interest rate: {0}")]
    InvalidRate(String),

    #[error("invalid amount: {field} {reason}")]
    InvalidAmount { field: String, reason: String },

    #[error("degenerate payment schedule: {0}")]
    DegenerateSchedule(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::SerializationError(e.to_string())
    }
}
