//! Sales tax calculator.

use minicalc_core::history::CalculationKind;

use super::{Evaluated, fixed2};

#[derive(Debug, Clone, PartialEq)]
pub struct TaxResult {
    pub tax_amount: f64,
    pub total_amount: f64,
}

pub fn calculate(amount: f64, rate_percent: f64) -> Evaluated<TaxResult> {
    if amount <= 0.0 {
        return Evaluated::unrecorded(TaxResult {
            tax_amount: 0.0,
            total_amount: amount,
        });
    }

    let tax = amount * (rate_percent / 100.0);
    let result = TaxResult {
        tax_amount: tax,
        total_amount: amount + tax,
    };
    let entry = CalculationKind::Tax.entry(format!(
        "Total with Tax: ${}",
        fixed2(result.total_amount)
    ));
    Evaluated::recorded(result, entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_percent() {
        let outcome = calculate(200.0, 5.0);
        assert_eq!(outcome.value.tax_amount, 10.0);
        assert_eq!(outcome.value.total_amount, 210.0);
        assert_eq!(outcome.entry.unwrap().result, "Total with Tax: $210.00");
    }

    #[test]
    fn test_zero_amount_not_recorded() {
        let outcome = calculate(0.0, 5.0);
        assert_eq!(outcome.value.tax_amount, 0.0);
        assert!(outcome.entry.is_none());
    }
}
