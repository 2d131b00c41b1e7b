//! Level-payment amortization: periodic payment from principal, and the
//! inverse, maximum principal from a periodic payment.
//!
//! Both directions share the growth factor `(1 + r)^n`. Whole period counts
//! use exact integer powers; fractional counts (fractional amortization
//! years) go through `MathematicalOps::checked_powd`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::MortgageError;
use crate::schedule::PaymentSchedule;
use crate::types::{Money, Rate, Years};
use crate::MortgageResult;

/// Annual rate spread evenly over the payments in one year.
pub fn per_period_rate(annual_rate: Rate, schedule: PaymentSchedule) -> Rate {
    annual_rate / Decimal::from(schedule.payments_per_year())
}

/// Total number of payments over the amortization period.
pub fn number_of_periods(schedule: PaymentSchedule, years: Years) -> Decimal {
    Decimal::from(schedule.payments_per_year()) * years
}

/// Periodic payment that retires `total_financed` over `num_periods` periods.
///
/// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)`; a zero rate falls back to
/// straight-line repayment `P / n`.
pub fn compute_payment(
    total_financed: Money,
    per_period_rate: Rate,
    num_periods: Decimal,
) -> MortgageResult<Money> {
    validate_inputs(per_period_rate, num_periods)?;

    if per_period_rate.is_zero() {
        return Ok(total_financed / num_periods);
    }

    let factor = growth_factor(per_period_rate, num_periods)?;
    let denominator = annuity_denominator(factor)?;

    total_financed
        .checked_mul(per_period_rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| overflow("total_financed"))
}

/// Largest principal that `periodic_payment` retires over `num_periods` periods.
///
/// `mortgage = M * ((1 + r)^n - 1) / (r * (1 + r)^n)`; a zero rate falls back
/// to `M * n`.
pub fn compute_max_mortgage(
    periodic_payment: Money,
    per_period_rate: Rate,
    num_periods: Decimal,
) -> MortgageResult<Money> {
    validate_inputs(per_period_rate, num_periods)?;

    if per_period_rate.is_zero() {
        return periodic_payment
            .checked_mul(num_periods)
            .ok_or_else(|| overflow("periodic_payment"));
    }

    let factor = growth_factor(per_period_rate, num_periods)?;
    let numerator = annuity_denominator(factor)?;

    per_period_rate
        .checked_mul(factor)
        .and_then(|discount| {
            periodic_payment
                .checked_mul(numerator)
                .and_then(|v| v.checked_div(discount))
        })
        .ok_or_else(|| overflow("periodic_payment"))
}

fn validate_inputs(per_period_rate: Rate, num_periods: Decimal) -> MortgageResult<()> {
    if num_periods <= Decimal::ZERO {
        return Err(MortgageError::DegenerateSchedule(format!(
            "number of periods must be greater than 0, got {num_periods}"
        )));
    }
    if per_period_rate < Decimal::ZERO {
        return Err(MortgageError::InvalidRate(format!(
            "per-period rate must not be negative, got {per_period_rate}"
        )));
    }
    Ok(())
}

/// `(1 + r)^n`
fn growth_factor(rate: Rate, num_periods: Decimal) -> MortgageResult<Decimal> {
    let base = Decimal::ONE + rate;
    let factor = if num_periods.fract().is_zero() {
        num_periods.to_u64().and_then(|exp| base.checked_powu(exp))
    } else {
        base.checked_powd(num_periods)
    };
    factor.ok_or_else(|| overflow("num_periods"))
}

/// `(1 + r)^n - 1`, which must be non-zero to divide by.
fn annuity_denominator(factor: Decimal) -> MortgageResult<Decimal> {
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(MortgageError::DegenerateSchedule(
            "per-period rate too small: (1 + r)^n - 1 is zero".into(),
        ));
    }
    Ok(denominator)
}

fn overflow(field: &str) -> MortgageError {
    MortgageError::InvalidAmount {
        field: field.into(),
        reason: "is too large to compute a result".into(),
    }
}
