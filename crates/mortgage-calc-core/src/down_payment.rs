use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Portion of the asking price charged at the lower minimum rate.
const FIRST_BRACKET_LIMIT: Money = dec!(500000);
const FIRST_BRACKET_RATE: Rate = dec!(0.05);
const ABOVE_BRACKET_RATE: Rate = dec!(0.10);

/// Smallest down payment accepted for `asking_price`: 5% of the first 500k,
/// 10% of anything above it.
pub fn minimum_down_payment(asking_price: Money) -> Money {
    if asking_price > FIRST_BRACKET_LIMIT {
        FIRST_BRACKET_LIMIT * FIRST_BRACKET_RATE
            + (asking_price - FIRST_BRACKET_LIMIT) * ABOVE_BRACKET_RATE
    } else {
        asking_price * FIRST_BRACKET_RATE
    }
}

pub fn is_too_low(down_payment: Money, asking_price: Money) -> bool {
    down_payment < minimum_down_payment(asking_price)
}

/// Fail with `DownPaymentTooLow` unless the down payment meets the minimum.
pub fn ensure_sufficient(down_payment: Money, asking_price: Money) -> MortgageResult<()> {
    let required = minimum_down_payment(asking_price);
    if down_payment < required {
        return Err(MortgageError::DownPaymentTooLow {
            offered: down_payment,
            required,
        });
    }
    Ok(())
}
