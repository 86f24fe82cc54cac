//! Payment-to-rate inversion via a precomputed lookup table.
//!
//! The annuity formula has no closed-form inverse for the rate given a
//! payment, so the estimator tabulates candidate rates over a dense grid,
//! computes each candidate's monthly payment for the fixed principal and
//! term, and answers queries by binary search over the rounded payments.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::monthly_payment;
use crate::error::MortgageRateError;
use crate::types::{Money, Percent};
use crate::MortgageRateResult;

/// Candidate grid resolution: hundredths of a percent.
const RATE_STEP_PERCENT: Decimal = dec!(0.01);

/// Scale from percentage points to a fractional rate.
const PERCENT_TO_FRACTION: Decimal = dec!(0.01);

/// Candidates spanning 0 to 100% at the grid resolution.
const GRID_POINTS: u32 = 10_000;

/// One tabulated candidate rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTableEntry {
    /// Monthly payment rounded up to the nearest whole currency unit.
    pub payment: u64,
    /// The candidate yearly rate producing that payment, in percent.
    pub rate_percent: Percent,
}

/// Immutable payment-to-rate table for one principal and term.
///
/// Entries are strictly ascending by payment. Candidates whose rounded
/// payments collide keep the last (highest) rate, so a lookup returns the
/// highest tabulated rate whose payment does not exceed the observed one.
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: Vec<RateTableEntry>,
}

impl RateTable {
    /// Tabulate candidate rates from one grid step above zero up to 100%.
    ///
    /// The zero candidate is excluded: it has no annuity payment.
    pub fn build(principal: Money, years: u32) -> MortgageRateResult<Self> {
        let mut by_payment: BTreeMap<u64, Percent> = BTreeMap::new();

        for idx in 1..GRID_POINTS {
            let rate = RATE_STEP_PERCENT * Decimal::from(idx) * PERCENT_TO_FRACTION;
            let payment = monthly_payment(principal, rate, years)?;
            let key = payment.ceil().to_u64().ok_or_else(|| {
                MortgageRateError::InvalidInput {
                    field: "principal".into(),
                    reason: format!("Candidate payment {payment} does not fit a table key"),
                }
            })?;
            by_payment.insert(key, rate * dec!(100));
        }

        if by_payment.is_empty() {
            return Err(MortgageRateError::InsufficientData(
                "Rate table has no entries".into(),
            ));
        }

        let entries = by_payment
            .into_iter()
            .map(|(payment, rate_percent)| RateTableEntry {
                payment,
                rate_percent,
            })
            .collect();

        Ok(Self { entries })
    }

    /// Estimate the yearly rate implied by an observed monthly payment.
    ///
    /// Returns the rate of the greatest tabulated payment not exceeding the
    /// observed one; an observed payment exactly equal to a tabulated key
    /// returns that key's rate. Payments below the lowest or above the
    /// highest tabulated payment are out of range.
    pub fn estimate_rate(&self, observed: Money) -> MortgageRateResult<Percent> {
        let (lowest, highest) = match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => (first.payment, last.payment),
            _ => {
                return Err(MortgageRateError::InsufficientData(
                    "Rate table has no entries".into(),
                ))
            }
        };

        let out_of_range = || MortgageRateError::PaymentOutOfRange {
            payment: observed,
            lowest: Decimal::from(lowest),
            highest: Decimal::from(highest),
        };

        if observed > Decimal::from(highest) {
            return Err(out_of_range());
        }

        let idx = self
            .entries
            .partition_point(|entry| Decimal::from(entry.payment) <= observed);
        if idx == 0 {
            return Err(out_of_range());
        }

        Ok(self.entries[idx - 1].rate_percent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RateTableEntry] {
        &self.entries
    }

    /// Lowest tabulated payment, in whole currency units.
    pub fn lowest_payment(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.payment)
    }

    /// Highest tabulated payment, in whole currency units.
    pub fn highest_payment(&self) -> Option<u64> {
        self.entries.last().map(|entry| entry.payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_entries_strictly_ascending() {
        let table = RateTable::build(dec!(80000), 20).unwrap();
        assert!(table.len() > 1000);
        for pair in table.entries().windows(2) {
            assert!(pair[0].payment < pair[1].payment);
            assert!(pair[0].rate_percent < pair[1].rate_percent);
        }
    }

    #[test]
    fn test_exact_key_is_inclusive() {
        let table = RateTable::build(dec!(80000), 20).unwrap();
        let entry = table.entries()[table.len() / 2];
        let rate = table.estimate_rate(Decimal::from(entry.payment)).unwrap();
        assert_eq!(rate, entry.rate_percent);
    }

    #[test]
    fn test_payment_below_table_is_out_of_range() {
        let table = RateTable::build(dec!(80000), 20).unwrap();
        let err = table.estimate_rate(dec!(10)).unwrap_err();
        assert!(matches!(err, MortgageRateError::PaymentOutOfRange { .. }));
    }

    #[test]
    fn test_payment_above_table_is_out_of_range() {
        let table = RateTable::build(dec!(80000), 20).unwrap();
        let err = table.estimate_rate(dec!(1000000)).unwrap_err();
        assert!(matches!(err, MortgageRateError::PaymentOutOfRange { .. }));
    }
}
