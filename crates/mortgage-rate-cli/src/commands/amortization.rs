use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mortgage_rate_core::amortization::{
    monthly_payment, total_payment, yearly_rate_from_components,
};

/// Arguments for the monthly payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan principal
    #[arg(long)]
    pub loan_value: Decimal,

    /// Yearly rate as a fraction (e.g. 0.0364)
    #[arg(long, conflicts_with_all = ["reference_rate_percent", "marginal_rate_percent"])]
    pub yearly_rate: Option<Decimal>,

    /// Reference rate in percent (e.g. Euribor 12 month)
    #[arg(long, requires = "marginal_rate_percent")]
    pub reference_rate_percent: Option<Decimal>,

    /// Bank margin over the reference rate, in percent
    #[arg(long, requires = "reference_rate_percent")]
    pub marginal_rate_percent: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub years: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct PaymentOutput {
    loan_value: Decimal,
    yearly_rate_percent: Decimal,
    years: u32,
    monthly_payment: Decimal,
    total_payment: Decimal,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let yearly_rate = resolve_yearly_rate(&args)?;
    let monthly = monthly_payment(args.loan_value, yearly_rate, args.years)?;
    let total = total_payment(monthly, args.years);

    Ok(serde_json::to_value(PaymentOutput {
        loan_value: args.loan_value,
        yearly_rate_percent: yearly_rate * dec!(100),
        years: args.years,
        monthly_payment: monthly,
        total_payment: total,
    })?)
}

fn resolve_yearly_rate(args: &PaymentArgs) -> Result<Decimal, Box<dyn std::error::Error>> {
    if let Some(rate) = args.yearly_rate {
        return Ok(rate);
    }
    if let (Some(reference), Some(marginal)) =
        (args.reference_rate_percent, args.marginal_rate_percent)
    {
        return Ok(yearly_rate_from_components(reference, marginal));
    }
    Err("--yearly-rate or --reference-rate-percent with --marginal-rate-percent required".into())
}
