use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::calculator::{self, MortgageAmountRequest, PaymentAmountRequest};
use mortgage_calc_core::{PaymentSchedule, RateStore};

use crate::input;

/// Arguments for the periodic payment calculation
#[derive(Args)]
pub struct PaymentAmountArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Mortgage amount being requested
    #[arg(long)]
    pub asking_price: Option<Decimal>,

    /// Initial payment made up front
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Payment frequency: weekly, biweekly, monthly
    #[arg(long, default_value = "monthly")]
    pub payment_schedule: PaymentSchedule,

    /// Years to pay the mortgage off (5 to 25)
    #[arg(long, default_value = "25")]
    pub amortization_period: Decimal,
}

/// Arguments for the maximum mortgage calculation
#[derive(Args)]
pub struct MortgageAmountArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount paid every period
    #[arg(long)]
    pub payment_amount: Option<Decimal>,

    /// Payment frequency: weekly, biweekly, monthly
    #[arg(long, default_value = "monthly")]
    pub payment_schedule: PaymentSchedule,

    /// Years to pay the mortgage off (5 to 25)
    #[arg(long, default_value = "25")]
    pub amortization_period: Decimal,
}

impl PaymentAmountArgs {
    fn into_request(self) -> Result<PaymentAmountRequest, Box<dyn std::error::Error>> {
        match input::load(self.input.as_deref())? {
            Some(request) => Ok(request),
            None => self.from_flags(),
        }
    }

    fn from_flags(self) -> Result<PaymentAmountRequest, Box<dyn std::error::Error>> {
        Ok(PaymentAmountRequest {
            asking_price: self
                .asking_price
                .ok_or("--asking-price is required (or provide --input)")?,
            down_payment: self
                .down_payment
                .ok_or("--down-payment is required (or provide --input)")?,
            payment_schedule: self.payment_schedule,
            amortization_years: self.amortization_period,
        })
    }
}

impl MortgageAmountArgs {
    fn into_request(self) -> Result<MortgageAmountRequest, Box<dyn std::error::Error>> {
        match input::load(self.input.as_deref())? {
            Some(request) => Ok(request),
            None => self.from_flags(),
        }
    }

    fn from_flags(self) -> Result<MortgageAmountRequest, Box<dyn std::error::Error>> {
        Ok(MortgageAmountRequest {
            payment_amount: self
                .payment_amount
                .ok_or("--payment-amount is required (or provide --input)")?,
            payment_schedule: self.payment_schedule,
            amortization_years: self.amortization_period,
        })
    }
}

pub fn run_payment_amount(
    args: PaymentAmountArgs,
    rates: &RateStore,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request = args.into_request()?;
    let result = calculator::payment_amount_report(rates, &request)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_mortgage_amount(
    args: MortgageAmountArgs,
    rates: &RateStore,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request = args.into_request()?;
    let result = calculator::mortgage_amount_report(rates, &request)?;
    Ok(serde_json::to_value(result)?)
}
