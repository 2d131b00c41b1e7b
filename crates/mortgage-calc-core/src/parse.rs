//! Turning untyped transport input (query strings, JSON bodies) into typed
//! values, failing with the matching `MortgageError` kind.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::error::MortgageError;
use crate::schedule::PaymentSchedule;
use crate::types::Rate;
use crate::MortgageResult;

/// JSON field carrying the new rate in an interest-rate update body.
pub const INTEREST_RATE_FIELD: &str = "interest-rate";

/// Parse a required numeric parameter. Plain and scientific notation are
/// accepted, surrounding whitespace is ignored.
pub fn parse_amount(field: &str, raw: Option<&str>) -> MortgageResult<Decimal> {
    let raw = raw.ok_or_else(|| MortgageError::InvalidInputType {
        field: field.into(),
        expected: "a string".into(),
    })?;
    parse_decimal(raw.trim()).ok_or_else(|| MortgageError::NotANumber {
        field: field.into(),
        value: raw.into(),
    })
}

/// Parse a required payment-schedule parameter.
pub fn parse_schedule(field: &str, raw: Option<&str>) -> MortgageResult<PaymentSchedule> {
    let raw = raw.ok_or_else(|| MortgageError::InvalidInputType {
        field: field.into(),
        expected: "a string".into(),
    })?;
    PaymentSchedule::from_label(raw)
}

/// Extract the requested rate from an interest-rate update body such as
/// `{"interest-rate": 0.031}`.
///
/// Positivity is not checked here; `RateStore::replace` owns that rule.
pub fn parse_rate_update(body: &[u8]) -> MortgageResult<Rate> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| MortgageError::InvalidRate(format!("unparsable JSON body: {e}")))?;

    let number = match value.get(INTEREST_RATE_FIELD) {
        Some(Value::Number(number)) => number,
        _ => {
            return Err(MortgageError::InvalidInputType {
                field: INTEREST_RATE_FIELD.into(),
                expected: "a JSON number".into(),
            })
        }
    };

    // Go through the JSON text so 0.031 stays exactly 0.031.
    let text = number.to_string();
    parse_decimal(&text).ok_or_else(|| {
        MortgageError::InvalidRate(format!("{text} is outside the supported decimal range"))
    })
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
