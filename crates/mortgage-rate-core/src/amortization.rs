//! Annuity amortization primitives.
//!
//! Standard annuity payment math with monthly compounding: the yearly rate
//! is divided by twelve and compounded over the term in months. All math in
//! `rust_decimal::Decimal`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::MortgageRateError;
use crate::types::{Money, Percent, Rate};
use crate::MortgageRateResult;

/// Compounding periods per year.
pub const MONTHS_IN_YEAR: u32 = 12;

/// Monthly annuity payment for a loan.
///
/// Computes `principal * mr * (1+mr)^n / ((1+mr)^n - 1)` where `mr` is the
/// monthly rate and `n` the term in months. A zero or negative rate has no
/// annuity payment and is rejected rather than left to divide by zero.
pub fn monthly_payment(
    principal: Money,
    yearly_rate: Rate,
    years: u32,
) -> MortgageRateResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(MortgageRateError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal must be positive".into(),
        });
    }
    if years == 0 {
        return Err(MortgageRateError::InvalidInput {
            field: "years".into(),
            reason: "Loan term must be at least one year".into(),
        });
    }
    if yearly_rate <= Decimal::ZERO {
        return Err(MortgageRateError::InvalidInput {
            field: "yearly_rate".into(),
            reason: "Yearly rate must be positive for an annuity payment".into(),
        });
    }

    let monthly_rate = yearly_rate / Decimal::from(MONTHS_IN_YEAR);
    let total_months = years * MONTHS_IN_YEAR;
    let factor = (Decimal::ONE + monthly_rate).powd(Decimal::from(total_months));
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(MortgageRateError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(principal * monthly_rate * factor / denominator)
}

/// Everything paid over the term at a given monthly cost.
pub fn total_payment(monthly_cost: Money, years: u32) -> Money {
    monthly_cost * Decimal::from(MONTHS_IN_YEAR) * Decimal::from(years)
}

/// Fractional yearly rate from a reference rate plus a bank margin, both in
/// percentage points.
pub fn yearly_rate_from_components(
    reference_rate_percent: Percent,
    marginal_rate_percent: Percent,
) -> Rate {
    (reference_rate_percent + marginal_rate_percent) / dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_payment_basic() {
        // 80000 at 3.64% over 20 years: ~469.74/month by the annuity formula
        let payment = monthly_payment(dec!(80000), dec!(0.0364), 20).unwrap();
        assert!(
            (payment - dec!(469.74)).abs() < dec!(0.01),
            "expected ~469.74, got {payment}"
        );
    }

    #[test]
    fn test_total_payment_exact() {
        assert_eq!(total_payment(dec!(658.27), 20), dec!(157984.80));
    }

    #[test]
    fn test_yearly_rate_from_components() {
        assert_eq!(yearly_rate_from_components(dec!(3.00), dec!(0.64)), dec!(0.0364));
    }

    #[test]
    fn test_zero_rate_rejected() {
        let err = monthly_payment(dec!(80000), Decimal::ZERO, 20).unwrap_err();
        assert!(matches!(err, MortgageRateError::InvalidInput { .. }));
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = monthly_payment(dec!(80000), dec!(0.05), 0).unwrap_err();
        assert!(matches!(err, MortgageRateError::InvalidInput { .. }));
    }
}
