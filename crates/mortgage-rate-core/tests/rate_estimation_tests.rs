use mortgage_rate_core::amortization::monthly_payment;
use mortgage_rate_core::rate_table::RateTable;
use mortgage_rate_core::MortgageRateError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Table construction tests
// ===========================================================================

#[test]
fn test_table_is_ordered_and_dense() {
    let table = RateTable::build(dec!(80000), 20).unwrap();

    // Candidate payments from ~0.01% up to ~100% give thousands of distinct
    // rounded payments for this principal and term.
    assert!(table.len() > 1000);
    assert!(!table.is_empty());

    for pair in table.entries().windows(2) {
        assert!(pair[0].payment < pair[1].payment, "payments must ascend");
        assert!(
            pair[0].rate_percent < pair[1].rate_percent,
            "rates must ascend with payments"
        );
    }
}

#[test]
fn test_table_bounds_for_reference_loan() {
    let table = RateTable::build(dec!(80000), 20).unwrap();

    // At a near-zero rate the payment approaches 80000/240 = 333.33, so the
    // lowest key sits just above that. At 100% the payment is ~6666.67.
    let lowest = table.lowest_payment().unwrap();
    let highest = table.highest_payment().unwrap();
    assert!(lowest >= 334 && lowest <= 340, "lowest key {lowest}");
    assert!(highest >= 6600 && highest <= 6700, "highest key {highest}");
}

// ===========================================================================
// Estimation tests
// ===========================================================================

#[test]
fn test_estimate_rate_round_trip() {
    let table = RateTable::build(dec!(80000), 20).unwrap();

    // For a rate on the grid, estimating from its own payment lands within
    // a few hundredths of a percent below it (ceil rounding places the exact
    // payment under its key).
    for rate in [dec!(0.02), dec!(0.0364), dec!(0.05), dec!(0.10)] {
        let payment = monthly_payment(dec!(80000), rate, 20).unwrap();
        let estimated = table.estimate_rate(payment).unwrap();
        let actual_percent = rate * dec!(100);
        assert!(
            (estimated - actual_percent).abs() < dec!(0.05),
            "estimate {estimated} too far from {actual_percent}"
        );
        assert!(
            estimated <= actual_percent,
            "estimate {estimated} must not exceed {actual_percent}"
        );
    }
}

#[test]
fn test_estimate_rate_for_quoted_payment() {
    let table = RateTable::build(dec!(80000), 20).unwrap();

    // A 600.20 monthly payment on an 80000/20y loan implies roughly 6.6%,
    // well above the offered nominal 3.64%.
    let estimated = table.estimate_rate(dec!(600.2)).unwrap();
    assert!(
        estimated > dec!(6.5) && estimated < dec!(6.7),
        "got {estimated}"
    );
}

#[test]
fn test_estimate_rate_exact_key_inclusive() {
    let table = RateTable::build(dec!(80000), 20).unwrap();

    for entry in [
        table.entries()[0],
        table.entries()[table.len() / 3],
        table.entries()[table.len() - 1],
    ] {
        let rate = table.estimate_rate(Decimal::from(entry.payment)).unwrap();
        assert_eq!(rate, entry.rate_percent);
    }
}

#[test]
fn test_estimate_rate_out_of_range_is_explicit() {
    let table = RateTable::build(dec!(80000), 20).unwrap();

    let below = table.estimate_rate(dec!(100)).unwrap_err();
    assert!(matches!(
        below,
        MortgageRateError::PaymentOutOfRange { .. }
    ));

    let above = table.estimate_rate(dec!(50000)).unwrap_err();
    match above {
        MortgageRateError::PaymentOutOfRange {
            payment,
            lowest,
            highest,
        } => {
            assert_eq!(payment, dec!(50000));
            assert!(lowest < highest);
        }
        other => panic!("expected PaymentOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_estimate_rate_different_terms_use_their_own_table() {
    // The same payment implies a very different rate on a shorter term.
    let table_20y = RateTable::build(dec!(80000), 20).unwrap();
    let table_10y = RateTable::build(dec!(80000), 10).unwrap();

    let estimate_20y = table_20y.estimate_rate(dec!(900)).unwrap();
    let estimate_10y = table_10y.estimate_rate(dec!(900)).unwrap();
    assert!(
        estimate_20y > estimate_10y,
        "a 900 payment is cheap money on 10y ({estimate_10y}) but expensive on 20y ({estimate_20y})"
    );
}
