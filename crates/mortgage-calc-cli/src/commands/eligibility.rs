use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use mortgage_calc_core::types::{with_metadata, Money, Rate};
use mortgage_calc_core::{down_payment, insurance};

/// Arguments for the mortgage insurance premium lookup
#[derive(Args)]
pub struct InsuranceArgs {
    /// Initial payment made up front
    #[arg(long)]
    pub down_payment: Decimal,

    /// Mortgage amount being requested
    #[arg(long)]
    pub asking_price: Decimal,
}

/// Arguments for the minimum down payment lookup
#[derive(Args)]
pub struct DownPaymentArgs {
    /// Mortgage amount being requested
    #[arg(long)]
    pub asking_price: Decimal,

    /// Down payment to check against the minimum
    #[arg(long)]
    pub down_payment: Option<Decimal>,
}

#[derive(Debug, Serialize)]
struct InsuranceOutput {
    insurance_premium: Money,
    down_payment_ratio: Rate,
    premium_rate: Option<Rate>,
    exempt: bool,
}

#[derive(Debug, Serialize)]
struct DownPaymentOutput {
    minimum_down_payment: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    sufficient: Option<bool>,
}

pub fn run_insurance_premium(args: InsuranceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let premium = insurance::premium(args.down_payment, args.asking_price)?;
    let ratio = args.down_payment / args.asking_price;
    let exempt = insurance::is_exempt(args.asking_price);

    let mut warnings = Vec::new();
    if exempt {
        warnings.push(format!(
            "Asking price above {} is exempt from mortgage insurance regardless of down payment",
            insurance::INSURANCE_EXEMPT_ABOVE
        ));
    } else if down_payment::is_too_low(args.down_payment, args.asking_price) {
        warnings.push("Down payment is below the required minimum".to_string());
    }

    let output = InsuranceOutput {
        insurance_premium: premium,
        down_payment_ratio: ratio,
        premium_rate: if exempt { None } else { insurance::premium_tier(ratio) },
        exempt,
    };
    let result = with_metadata(
        "Tiered mortgage insurance on asking price",
        &serde_json::json!({
            "down_payment": args.down_payment,
            "asking_price": args.asking_price,
        }),
        warnings,
        start,
        output,
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_minimum_down_payment(
    args: DownPaymentArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    if args.asking_price <= Decimal::ZERO {
        return Err("--asking-price must be greater than 0".into());
    }
    let start = Instant::now();
    let output = DownPaymentOutput {
        minimum_down_payment: down_payment::minimum_down_payment(args.asking_price),
        sufficient: args
            .down_payment
            .map(|dp| !down_payment::is_too_low(dp, args.asking_price)),
    };
    let result = with_metadata(
        "5% of the first 500,000 plus 10% of the remainder",
        &serde_json::json!({ "asking_price": args.asking_price }),
        Vec::new(),
        start,
        output,
    );
    Ok(serde_json::to_value(result)?)
}
