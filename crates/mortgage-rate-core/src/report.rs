//! Loan cost reports.
//!
//! Takes a bank's loan offer (principal, margin over a reference rate, term,
//! quoted monthly payment and extra costs) and produces cost breakdowns with
//! the effective yearly rate implied by each payment variant, plus a stress
//! test over alternative reference rates.

use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::{
    monthly_payment, total_payment, yearly_rate_from_components, MONTHS_IN_YEAR,
};
use crate::error::MortgageRateError;
use crate::rate_table::RateTable;
use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money, Percent};
use crate::MortgageRateResult;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Extra loan costs on top of the annuity payment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExtraCosts {
    /// Recurring monthly costs (insurance, protection from rising rates).
    pub monthly: Money,
    /// One-off premium paid to the bank when the loan agreement is made.
    pub fixed: Money,
}

/// Input scenario for a full loan cost report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScenario {
    pub bank_name: String,
    /// Loan principal.
    pub loan_value: Money,
    /// Bank margin over the reference rate, in percent.
    pub bank_marginal_rate_percent: Percent,
    /// Reference rate, in percent. For example, Euribor 12 month.
    pub reference_rate_percent: Percent,
    /// Loan term in years.
    pub years: u32,
    /// Monthly payment quoted by the bank.
    pub suggested_monthly_payment: Money,
    /// Recurring monthly costs on top of the payment.
    #[serde(default)]
    pub extra_monthly_costs: Money,
    /// One-off costs charged when the agreement is made.
    #[serde(default)]
    pub extra_fixed_loan_costs: Money,
    /// Alternative reference rates for the stress-test section, in percent.
    #[serde(default)]
    pub reference_rates_percents_to_test: Vec<Percent>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Cost figures and estimated effective rates for one nominal yearly rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Nominal yearly rate, in percent.
    pub nominal_rate_percent: Percent,
    /// True when the monthly payment was quoted by the bank rather than
    /// computed from the nominal rate.
    pub suggested_by_bank: bool,
    /// Monthly annuity payment.
    pub monthly_payment: Money,
    /// Monthly payment plus recurring extra costs.
    pub monthly_payment_with_extras: Money,
    /// Monthly payment with extras plus the fixed costs spread over the term.
    pub full_monthly_payment: Money,
    /// Everything paid back over the term, including fixed costs.
    pub total_payment: Money,
    /// Effective yearly rate implied by the monthly payment, in percent.
    pub estimated_rate_percent: Percent,
    /// Effective yearly rate implied by the payment with extras, in percent.
    pub estimated_rate_with_extras_percent: Percent,
    /// Effective yearly rate implied by the full monthly payment, in percent.
    pub estimated_full_rate_percent: Percent,
}

/// Header figures of the loan offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralLoanInfo {
    pub loan_value: Money,
    pub suggested_yearly_rate_percent: Percent,
    pub suggested_monthly_payment: Money,
    pub extra_monthly_costs: Money,
    pub extra_fixed_loan_costs: Money,
    pub years: u32,
}

/// One stress-test row: the breakdown at an alternative reference rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressTestEntry {
    pub reference_rate_percent: Percent,
    pub breakdown: CostBreakdown,
}

/// The full loan cost report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanCostReport {
    pub bank_name: String,
    pub general: GeneralLoanInfo,
    pub suggested: CostBreakdown,
    pub stress_test: Vec<StressTestEntry>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Cost breakdown with the monthly payment computed from the nominal rate.
pub fn breakdown_for_rate(
    params: &LoanParameters,
    costs: &ExtraCosts,
    table: &RateTable,
) -> MortgageRateResult<CostBreakdown> {
    let payment = monthly_payment(params.principal, params.yearly_rate, params.term_years)?;
    breakdown(params, costs, table, payment, false)
}

/// Cost breakdown using the monthly payment quoted by the bank.
pub fn breakdown_for_suggested_payment(
    params: &LoanParameters,
    costs: &ExtraCosts,
    table: &RateTable,
    suggested_payment: Money,
) -> MortgageRateResult<CostBreakdown> {
    if suggested_payment <= Decimal::ZERO {
        return Err(MortgageRateError::InvalidInput {
            field: "suggested_monthly_payment".into(),
            reason: "Suggested monthly payment must be positive".into(),
        });
    }
    breakdown(params, costs, table, suggested_payment, true)
}

fn breakdown(
    params: &LoanParameters,
    costs: &ExtraCosts,
    table: &RateTable,
    payment: Money,
    suggested_by_bank: bool,
) -> MortgageRateResult<CostBreakdown> {
    if params.term_years == 0 {
        return Err(MortgageRateError::InvalidInput {
            field: "years".into(),
            reason: "Loan term must be at least one year".into(),
        });
    }

    let with_extras = payment + costs.monthly;
    let total = total_payment(with_extras, params.term_years) + costs.fixed;

    let total_months = Decimal::from(params.term_years * MONTHS_IN_YEAR);
    let fixed_costs_monthly = costs.fixed / total_months;
    let full_payment = with_extras + fixed_costs_monthly;

    Ok(CostBreakdown {
        nominal_rate_percent: params.yearly_rate * dec!(100),
        suggested_by_bank,
        monthly_payment: payment,
        monthly_payment_with_extras: with_extras,
        full_monthly_payment: full_payment,
        total_payment: total,
        estimated_rate_percent: table.estimate_rate(payment)?,
        estimated_rate_with_extras_percent: table.estimate_rate(with_extras)?,
        estimated_full_rate_percent: table.estimate_rate(full_payment)?,
    })
}

/// Produce the full loan cost report for a scenario.
///
/// Builds the rate table once, computes the breakdown for the bank's quoted
/// payment at the offered rate, then one breakdown per alternative reference
/// rate in the stress-test list.
pub fn generate_report(
    scenario: &LoanScenario,
) -> MortgageRateResult<ComputationOutput<LoanCostReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_scenario(scenario)?;

    let suggested_rate = yearly_rate_from_components(
        scenario.reference_rate_percent,
        scenario.bank_marginal_rate_percent,
    );
    let params = LoanParameters {
        principal: scenario.loan_value,
        yearly_rate: suggested_rate,
        term_years: scenario.years,
    };
    let costs = ExtraCosts {
        monthly: scenario.extra_monthly_costs,
        fixed: scenario.extra_fixed_loan_costs,
    };

    let table = RateTable::build(scenario.loan_value, scenario.years)?;

    let nominal = monthly_payment(params.principal, params.yearly_rate, params.term_years)?;
    if scenario.suggested_monthly_payment < nominal {
        warnings.push(format!(
            "Suggested monthly payment {} is below the annuity payment {} at the offered rate",
            scenario.suggested_monthly_payment, nominal
        ));
    }

    let suggested = breakdown_for_suggested_payment(
        &params,
        &costs,
        &table,
        scenario.suggested_monthly_payment,
    )?;

    let stress_test = scenario
        .reference_rates_percents_to_test
        .iter()
        .map(|reference_percent| {
            let stress_params = LoanParameters {
                yearly_rate: yearly_rate_from_components(
                    *reference_percent,
                    scenario.bank_marginal_rate_percent,
                ),
                ..params
            };
            Ok(StressTestEntry {
                reference_rate_percent: *reference_percent,
                breakdown: breakdown_for_rate(&stress_params, &costs, &table)?,
            })
        })
        .collect::<MortgageRateResult<Vec<_>>>()?;

    let report = LoanCostReport {
        bank_name: scenario.bank_name.clone(),
        general: GeneralLoanInfo {
            loan_value: scenario.loan_value,
            suggested_yearly_rate_percent: suggested_rate * dec!(100),
            suggested_monthly_payment: scenario.suggested_monthly_payment,
            extra_monthly_costs: scenario.extra_monthly_costs,
            extra_fixed_loan_costs: scenario.extra_fixed_loan_costs,
            years: scenario.years,
        },
        suggested,
        stress_test,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity Amortization with Rate-Table Inversion",
        scenario,
        warnings,
        elapsed,
        report,
    ))
}

fn validate_scenario(scenario: &LoanScenario) -> MortgageRateResult<()> {
    if scenario.loan_value <= Decimal::ZERO {
        return Err(MortgageRateError::InvalidInput {
            field: "loan_value".into(),
            reason: "Loan value must be positive".into(),
        });
    }
    if scenario.years == 0 {
        return Err(MortgageRateError::InvalidInput {
            field: "years".into(),
            reason: "Loan term must be at least one year".into(),
        });
    }
    if scenario.suggested_monthly_payment <= Decimal::ZERO {
        return Err(MortgageRateError::InvalidInput {
            field: "suggested_monthly_payment".into(),
            reason: "Suggested monthly payment must be positive".into(),
        });
    }
    if scenario.extra_monthly_costs < Decimal::ZERO {
        return Err(MortgageRateError::InvalidInput {
            field: "extra_monthly_costs".into(),
            reason: "Extra monthly costs cannot be negative".into(),
        });
    }
    if scenario.extra_fixed_loan_costs < Decimal::ZERO {
        return Err(MortgageRateError::InvalidInput {
            field: "extra_fixed_loan_costs".into(),
            reason: "Extra fixed loan costs cannot be negative".into(),
        });
    }
    Ok(())
}
