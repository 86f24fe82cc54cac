use mortgage_rate_core::amortization::{
    monthly_payment, total_payment, yearly_rate_from_components,
};
use mortgage_rate_core::MortgageRateError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Monthly payment tests
// ===========================================================================

#[test]
fn test_monthly_payment_reference_loan() {
    // 80000 at 3.64% over 20 years.
    // mr = 0.0364/12, n = 240, payment = 80000 * mr * (1+mr)^240 / ((1+mr)^240 - 1)
    // Hand-computed: ~469.74
    let payment = monthly_payment(dec!(80000), dec!(0.0364), 20).unwrap();
    assert!(
        (payment - dec!(469.74)).abs() < dec!(0.01),
        "expected ~469.74, got {payment}"
    );
}

#[test]
fn test_monthly_payment_positive_and_covers_interest() {
    let cases = [
        (dec!(80000), dec!(0.0364), 20),
        (dec!(150000), dec!(0.02), 30),
        (dec!(10000), dec!(0.15), 5),
        (dec!(500000), dec!(0.055), 25),
    ];
    for (principal, rate, years) in cases {
        let payment = monthly_payment(principal, rate, years).unwrap();
        assert!(payment > Decimal::ZERO);
        // Interest is always paid: repaying more than was borrowed.
        assert!(
            total_payment(payment, years) > principal,
            "total repayment must exceed principal for {principal} at {rate}"
        );
    }
}

#[test]
fn test_monthly_payment_monotonic_in_rate() {
    let rates = [
        dec!(0.005),
        dec!(0.01),
        dec!(0.02),
        dec!(0.0364),
        dec!(0.05),
        dec!(0.10),
        dec!(0.30),
    ];
    let mut previous = Decimal::ZERO;
    for rate in rates {
        let payment = monthly_payment(dec!(80000), rate, 20).unwrap();
        assert!(
            payment > previous,
            "payment at {rate} should exceed payment at the previous rate"
        );
        previous = payment;
    }
}

#[test]
fn test_monthly_payment_rejects_degenerate_inputs() {
    assert!(matches!(
        monthly_payment(Decimal::ZERO, dec!(0.05), 20).unwrap_err(),
        MortgageRateError::InvalidInput { .. }
    ));
    assert!(matches!(
        monthly_payment(dec!(80000), Decimal::ZERO, 20).unwrap_err(),
        MortgageRateError::InvalidInput { .. }
    ));
    assert!(matches!(
        monthly_payment(dec!(80000), dec!(-0.01), 20).unwrap_err(),
        MortgageRateError::InvalidInput { .. }
    ));
    assert!(matches!(
        monthly_payment(dec!(80000), dec!(0.05), 0).unwrap_err(),
        MortgageRateError::InvalidInput { .. }
    ));
}

// ===========================================================================
// Total payment and rate composition tests
// ===========================================================================

#[test]
fn test_total_payment_reference_value() {
    // 658.27 * 12 * 20 = 157984.80
    assert_eq!(total_payment(dec!(658.27), 20), dec!(157984.80));
}

#[test]
fn test_yearly_rate_from_components_reference_value() {
    // (3.00 + 0.64) / 100 = 0.0364
    assert_eq!(
        yearly_rate_from_components(dec!(3.00), dec!(0.64)),
        dec!(0.0364)
    );
}
