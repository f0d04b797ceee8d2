//! Bill splitter.

use minicalc_core::history::CalculationKind;

use super::{Evaluated, fixed2};

/// Equal split. Returns the per-person amount already formatted to two
/// decimals, `"0.00"` when the bill or head-count is not positive.
pub fn split_equal(bill: f64, people: i64) -> Evaluated<String> {
    if bill <= 0.0 || people <= 0 {
        return Evaluated::unrecorded(fixed2(0.0));
    }

    let per_person = fixed2(bill / people as f64);
    let entry = CalculationKind::BillSplitEqual.entry(format!(
        "Each of {people} people pays ${per_person}"
    ));
    Evaluated::recorded(per_person, entry)
}

/// Unequal split: what is left to assign after the given shares. Negative
/// means the shares overshoot the bill. Never recorded.
pub fn remaining_unequal(bill: f64, shares: &[f64]) -> f64 {
    bill - shares.iter().sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_split() {
        let outcome = split_equal(100.0, 3);
        assert_eq!(outcome.value, "33.33");
        assert_eq!(outcome.entry.unwrap().result, "Each of 3 people pays $33.33");
    }

    #[test]
    fn test_equal_split_zero_bill() {
        let outcome = split_equal(0.0, 3);
        assert_eq!(outcome.value, "0.00");
        assert!(outcome.entry.is_none());
    }

    #[test]
    fn test_remaining() {
        assert_eq!(remaining_unequal(100.0, &[30.0, 20.0]), 50.0);
        assert_eq!(remaining_unequal(100.0, &[80.0, 40.0]), -20.0);
        assert_eq!(remaining_unequal(100.0, &[]), 100.0);
    }
}
