//! Mortgage default insurance premium, tiered by down-payment ratio.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Asking prices above this are exempt from insurance whatever the down payment.
pub const INSURANCE_EXEMPT_ABOVE: Money = dec!(1000000);

/// (lower bound inclusive, upper bound exclusive, premium rate on asking price)
const PREMIUM_TIERS: [(Rate, Rate, Rate); 3] = [
    (dec!(0.05), dec!(0.10), dec!(0.0315)),
    (dec!(0.10), dec!(0.15), dec!(0.0240)),
    (dec!(0.15), dec!(0.20), dec!(0.0180)),
];

/// Premium rate for a down-payment ratio, or `None` when no premium applies.
pub fn premium_tier(down_payment_ratio: Rate) -> Option<Rate> {
    PREMIUM_TIERS
        .iter()
        .find(|(lower, upper, _)| down_payment_ratio >= *lower && down_payment_ratio < *upper)
        .map(|(_, _, rate)| *rate)
}

/// Insurance premium added on top of the asking price.
pub fn premium(down_payment: Money, asking_price: Money) -> MortgageResult<Money> {
    if asking_price <= Decimal::ZERO {
        return Err(MortgageError::InvalidAmount {
            field: "asking_price".into(),
            reason: "must be greater than 0".into(),
        });
    }

    // Jumbo carve-out: ignores the ratio entirely.
    if is_exempt(asking_price) {
        return Ok(Decimal::ZERO);
    }

    let ratio = down_payment / asking_price;
    Ok(premium_tier(ratio)
        .map(|rate| rate * asking_price)
        .unwrap_or(Decimal::ZERO))
}

pub fn is_exempt(asking_price: Money) -> bool {
    asking_price > INSURANCE_EXEMPT_ABOVE
}
