use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
}

/// Envelope shared by every response: `result` plus the endpoint's fields.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub result: Outcome,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            result: Outcome::Success,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub message: String,
}

impl ApiResponse<FailureBody> {
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            result: Outcome::Fail,
            data: FailureBody {
                message: message.into(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAmountBody {
    #[serde(with = "rust_decimal::serde::float")]
    pub payment_amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageAmountBody {
    #[serde(with = "rust_decimal::serde::float")]
    pub mortgage_amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateChangeBody {
    #[serde(with = "rust_decimal::serde::float")]
    pub old_interest_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub new_interest_rate: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRateBody {
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}
