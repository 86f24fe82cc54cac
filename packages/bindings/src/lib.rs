use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mortgage_rate_core::amortization;
use mortgage_rate_core::rate_table::RateTable;
use mortgage_rate_core::report;
use mortgage_rate_core::types::LoanParameters;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PaymentResponse {
    monthly_payment: Decimal,
    total_payment: Decimal,
}

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let params: LoanParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let monthly =
        amortization::monthly_payment(params.principal, params.yearly_rate, params.term_years)
            .map_err(to_napi_error)?;
    let response = PaymentResponse {
        monthly_payment: monthly,
        total_payment: amortization::total_payment(monthly, params.term_years),
    };
    serde_json::to_string(&response).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rate estimation
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct EstimateRequest {
    loan_value: Decimal,
    years: u32,
    payment: Decimal,
}

#[derive(Debug, Serialize)]
struct EstimateResponse {
    estimated_rate_percent: Decimal,
}

#[napi]
pub fn estimate_rate(input_json: String) -> NapiResult<String> {
    let request: EstimateRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let table = RateTable::build(request.loan_value, request.years).map_err(to_napi_error)?;
    let estimated = table.estimate_rate(request.payment).map_err(to_napi_error)?;
    let response = EstimateResponse {
        estimated_rate_percent: estimated,
    };
    serde_json::to_string(&response).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_cost_report(input_json: String) -> NapiResult<String> {
    let scenario: report::LoanScenario =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = report::generate_report(&scenario).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
