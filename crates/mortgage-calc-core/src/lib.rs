pub mod amortization;
pub mod calculator;
pub mod down_payment;
pub mod error;
pub mod insurance;
pub mod parse;
pub mod rate_store;
pub mod schedule;
pub mod types;

pub use calculator::{
    mortgage_amount, payment_amount, update_interest_rate, MortgageAmountRequest, MortgageQuote,
    PaymentAmountRequest, PaymentQuote, RateChange,
};
pub use error::MortgageError;
pub use rate_store::{RateStore, DEFAULT_INTEREST_RATE};
pub use schedule::PaymentSchedule;
pub use types::*;

/// Standard result type for all mortgage-calc operations
pub type MortgageResult<T> = Result<T, MortgageError>;
