//! Tip calculator.

use minicalc_core::history::CalculationKind;

use super::{Evaluated, fixed2};
use crate::input::{count_or, number_or_zero};

#[derive(Debug, Clone, PartialEq)]
pub struct TipInput {
    pub bill: f64,
    pub tip_percent: f64,
    pub people: i64,
    pub round_up: bool,
}

impl TipInput {
    /// Builds input from form text: bad numbers read as 0, a bad or zero
    /// head-count reads as 1.
    pub fn from_text(bill: &str, tip_percent: &str, people: &str, round_up: bool) -> Self {
        Self {
            bill: number_or_zero(bill),
            tip_percent: number_or_zero(tip_percent),
            people: count_or(people, 1),
            round_up,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TipResult {
    pub tip_amount: f64,
    pub total_amount: f64,
    pub per_person_amount: f64,
}

impl TipResult {
    pub fn summary(&self) -> String {
        format!(
            "Total: ${}, Per Person: ${}",
            fixed2(self.total_amount),
            fixed2(self.per_person_amount)
        )
    }
}

pub fn calculate(input: &TipInput) -> Evaluated<TipResult> {
    let people = input.people as f64;

    if input.bill <= 0.0 || input.people <= 0 {
        return Evaluated::unrecorded(TipResult {
            tip_amount: 0.0,
            total_amount: input.bill,
            per_person_amount: input.bill / people,
        });
    }

    let tip = input.bill * (input.tip_percent / 100.0);
    let mut total = input.bill + tip;
    if input.round_up {
        total = total.ceil();
    }

    let result = TipResult {
        tip_amount: total - input.bill,
        total_amount: total,
        per_person_amount: total / people,
    };
    let entry = CalculationKind::Tip.entry(result.summary());
    Evaluated::recorded(result, entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_percent_single_person() {
        let outcome = calculate(&TipInput::from_text("100.00", "15", "1", false));
        assert_eq!(outcome.value.total_amount, 115.0);
        assert_eq!(outcome.value.per_person_amount, 115.0);

        let entry = outcome.entry.unwrap();
        assert_eq!(entry.kind, "Tip Calculation");
        assert_eq!(entry.result, "Total: $115.00, Per Person: $115.00");
    }

    #[test]
    fn test_round_up_moves_difference_into_tip() {
        let outcome = calculate(&TipInput::from_text("47.30", "15", "2", true));
        assert_eq!(outcome.value.total_amount, 55.0);
        assert!((outcome.value.tip_amount - 7.7).abs() < 1e-9);
        assert_eq!(outcome.value.per_person_amount, 27.5);
    }

    #[test]
    fn test_empty_bill_is_not_recorded() {
        let outcome = calculate(&TipInput::from_text("", "15", "", false));
        assert_eq!(outcome.value.tip_amount, 0.0);
        assert_eq!(outcome.value.total_amount, 0.0);
        assert!(outcome.entry.is_none());
    }

    #[test]
    fn test_negative_people_is_not_recorded() {
        let outcome = calculate(&TipInput::from_text("50", "10", "-2", false));
        assert_eq!(outcome.value.total_amount, 50.0);
        assert_eq!(outcome.value.per_person_amount, -25.0);
        assert!(outcome.entry.is_none());
    }
}
