use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mortgage_rate_core::rate_table::RateTable;

/// Arguments for payment-to-rate inversion
#[derive(Args)]
pub struct EstimateRateArgs {
    /// Loan principal
    #[arg(long)]
    pub loan_value: Decimal,

    /// Loan term in years
    #[arg(long)]
    pub years: u32,

    /// Observed monthly payment to invert
    #[arg(long)]
    pub payment: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct EstimateOutput {
    loan_value: Decimal,
    years: u32,
    observed_payment: Decimal,
    estimated_rate_percent: Decimal,
    tabulated_payments: usize,
    lowest_tabulated_payment: u64,
    highest_tabulated_payment: u64,
}

pub fn run_estimate_rate(args: EstimateRateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let table = RateTable::build(args.loan_value, args.years)?;
    let estimated = table.estimate_rate(args.payment)?;

    Ok(serde_json::to_value(EstimateOutput {
        loan_value: args.loan_value,
        years: args.years,
        observed_payment: args.payment,
        estimated_rate_percent: estimated,
        tabulated_payments: table.len(),
        lowest_tabulated_payment: table.lowest_payment().unwrap_or_default(),
        highest_tabulated_payment: table.highest_payment().unwrap_or_default(),
    })?)
}
