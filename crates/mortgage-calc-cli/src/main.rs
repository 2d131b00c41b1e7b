mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rust_decimal::Decimal;
use std::process;

use commands::eligibility::{DownPaymentArgs, InsuranceArgs};
use commands::mortgage::{MortgageAmountArgs, PaymentAmountArgs};
use mortgage_calc_core::{RateStore, DEFAULT_INTEREST_RATE};

/// Mortgage payment and affordability calculations
#[derive(Parser)]
#[command(
    name = "mca",
    version,
    about = "Mortgage payment and affordability calculations",
    long_about = "A CLI for mortgage arithmetic with decimal precision: periodic payment \
                  for a requested mortgage, maximum mortgage for a target payment, \
                  mortgage insurance premiums and minimum down payments."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Annual interest rate (0.025 = 2.5%)
    #[arg(long, default_value_t = DEFAULT_INTEREST_RATE, global = true)]
    interest_rate: Decimal,
}

#[derive(Subcommand)]
enum Commands {
    /// Periodic payment for a requested mortgage, insurance included
    PaymentAmount(PaymentAmountArgs),
    /// Maximum mortgage a periodic payment can carry
    MortgageAmount(MortgageAmountArgs),
    /// Mortgage insurance premium for a down payment and asking price
    InsurancePremium(InsuranceArgs),
    /// Minimum down payment required for an asking price
    MinimumDownPayment(DownPaymentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let rates = match RateStore::new(cli.interest_rate) {
        Ok(rates) => rates,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::PaymentAmount(args) => commands::mortgage::run_payment_amount(args, &rates),
        Commands::MortgageAmount(args) => commands::mortgage::run_mortgage_amount(args, &rates),
        Commands::InsurancePremium(args) => commands::eligibility::run_insurance_premium(args),
        Commands::MinimumDownPayment(args) => {
            commands::eligibility::run_minimum_down_payment(args)
        }
        Commands::Version => {
            println!("mca {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
