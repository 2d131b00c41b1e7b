//! Entry points that assemble the validators, the insurance premium and the
//! amortization engine into the three mortgage operations.
//!
//! Each calculation reads the rate store once, so a concurrent rate update
//! can never mix two rates inside one result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{
    compute_max_mortgage, compute_payment, number_of_periods, per_period_rate,
};
use crate::down_payment::ensure_sufficient;
use crate::error::MortgageError;
use crate::insurance;
use crate::rate_store::RateStore;
use crate::schedule::PaymentSchedule;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::MortgageResult;

pub const MIN_AMORTIZATION_YEARS: Years = dec!(5);
pub const MAX_AMORTIZATION_YEARS: Years = dec!(25);

// ---------------------------------------------------------------------------
// Requests and results
// ---------------------------------------------------------------------------

/// Inputs for the periodic payment on a requested mortgage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAmountRequest {
    /// Mortgage amount being requested.
    pub asking_price: Money,
    /// Initial payment made up front.
    pub down_payment: Money,
    pub payment_schedule: PaymentSchedule,
    /// Years to pay the mortgage off, within [5, 25].
    pub amortization_years: Years,
}

/// Inputs for the largest mortgage a periodic payment can carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageAmountRequest {
    pub payment_amount: Money,
    pub payment_schedule: PaymentSchedule,
    /// Years to pay the mortgage off, within [5, 25].
    pub amortization_years: Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentQuote {
    /// Amount due every period.
    pub payment_amount: Money,
    pub insurance_premium: Money,
    /// Asking price plus insurance premium.
    pub total_financed: Money,
    pub payments_per_year: u32,
    pub per_period_rate: Rate,
    pub number_of_periods: Decimal,
    /// Annual rate the quote was computed with.
    pub interest_rate: Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageQuote {
    pub mortgage_amount: Money,
    pub payments_per_year: u32,
    pub per_period_rate: Rate,
    pub number_of_periods: Decimal,
    pub interest_rate: Rate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateChange {
    pub old_rate: Rate,
    pub new_rate: Rate,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Amortization must fall within [5, 25] years inclusive.
pub fn validate_amortization(years: Years) -> MortgageResult<()> {
    if years < MIN_AMORTIZATION_YEARS || years > MAX_AMORTIZATION_YEARS {
        return Err(MortgageError::AmortizationOutOfRange(years));
    }
    Ok(())
}

fn require_positive(field: &str, amount: Money) -> MortgageResult<()> {
    if amount <= Decimal::ZERO {
        return Err(MortgageError::InvalidAmount {
            field: field.into(),
            reason: format!("must be greater than 0, got {amount}"),
        });
    }
    Ok(())
}

fn validate_payment_request(req: &PaymentAmountRequest) -> MortgageResult<()> {
    require_positive("asking_price", req.asking_price)?;
    if req.down_payment < Decimal::ZERO {
        return Err(MortgageError::InvalidAmount {
            field: "down_payment".into(),
            reason: format!("must not be negative, got {}", req.down_payment),
        });
    }
    if req.down_payment > req.asking_price {
        return Err(MortgageError::InvalidAmount {
            field: "down_payment".into(),
            reason: format!(
                "{} exceeds the asking price {}",
                req.down_payment, req.asking_price
            ),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Periodic payment for a requested mortgage, insurance included.
pub fn payment_amount(rates: &RateStore, req: &PaymentAmountRequest) -> MortgageResult<PaymentQuote> {
    validate_payment_request(req)?;
    ensure_sufficient(req.down_payment, req.asking_price)?;
    let insurance_premium = insurance::premium(req.down_payment, req.asking_price)?;
    validate_amortization(req.amortization_years)?;

    let interest_rate = rates.current();
    let total_financed = req.asking_price + insurance_premium;
    let r = per_period_rate(interest_rate, req.payment_schedule);
    let n = number_of_periods(req.payment_schedule, req.amortization_years);

    Ok(PaymentQuote {
        payment_amount: compute_payment(total_financed, r, n)?,
        insurance_premium,
        total_financed,
        payments_per_year: req.payment_schedule.payments_per_year(),
        per_period_rate: r,
        number_of_periods: n,
        interest_rate,
    })
}

/// Largest mortgage the requested periodic payment can service.
pub fn mortgage_amount(
    rates: &RateStore,
    req: &MortgageAmountRequest,
) -> MortgageResult<MortgageQuote> {
    require_positive("payment_amount", req.payment_amount)?;
    validate_amortization(req.amortization_years)?;

    let interest_rate = rates.current();
    let r = per_period_rate(interest_rate, req.payment_schedule);
    let n = number_of_periods(req.payment_schedule, req.amortization_years);

    Ok(MortgageQuote {
        mortgage_amount: compute_max_mortgage(req.payment_amount, r, n)?,
        payments_per_year: req.payment_schedule.payments_per_year(),
        per_period_rate: r,
        number_of_periods: n,
        interest_rate,
    })
}

/// Replace the shared rate, reporting both the old and new values.
pub fn update_interest_rate(rates: &RateStore, new_rate: Rate) -> MortgageResult<RateChange> {
    let old_rate = rates.replace(new_rate)?;
    Ok(RateChange { old_rate, new_rate })
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// `payment_amount` wrapped with methodology, assumptions and warnings.
pub fn payment_amount_report(
    rates: &RateStore,
    req: &PaymentAmountRequest,
) -> MortgageResult<ComputationOutput<PaymentQuote>> {
    let start = Instant::now();
    let quote = payment_amount(rates, req)?;

    let mut warnings = Vec::new();
    if insurance::is_exempt(req.asking_price) {
        warnings.push(format!(
            "Asking price above {} is exempt from mortgage insurance regardless of down payment",
            insurance::INSURANCE_EXEMPT_ABOVE
        ));
    }
    if !quote.number_of_periods.fract().is_zero() {
        warnings.push(format!(
            "Amortization yields a fractional number of payments ({})",
            quote.number_of_periods
        ));
    }

    Ok(with_metadata(
        "Level-payment amortization with tiered mortgage insurance",
        &serde_json::json!({
            "request": req,
            "interest_rate": quote.interest_rate,
        }),
        warnings,
        start,
        quote,
    ))
}

/// `mortgage_amount` wrapped with methodology, assumptions and warnings.
pub fn mortgage_amount_report(
    rates: &RateStore,
    req: &MortgageAmountRequest,
) -> MortgageResult<ComputationOutput<MortgageQuote>> {
    let start = Instant::now();
    let quote = mortgage_amount(rates, req)?;

    let mut warnings = Vec::new();
    if !quote.number_of_periods.fract().is_zero() {
        warnings.push(format!(
            "Amortization yields a fractional number of payments ({})",
            quote.number_of_periods
        ));
    }
    warnings.push(
        "Maximum mortgage excludes mortgage insurance; the insured principal must fit within it"
            .to_string(),
    );

    Ok(with_metadata(
        "Present value of a level-payment annuity",
        &serde_json::json!({
            "request": req,
            "interest_rate": quote.interest_rate,
        }),
        warnings,
        start,
        quote,
    ))
}
