//! Currency conversion arithmetic. Fetching the rate is the suite's job.

use minicalc_core::history::CalculationKind;

use super::{Evaluated, fixed2};

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub rate: f64,
    /// `amount × rate` to two decimals.
    pub converted: String,
}

impl Conversion {
    /// `"1 USD = 0.9200 EUR"`.
    pub fn rate_line(&self, from: &str, to: &str) -> String {
        format!("1 {from} = {:.4} {to}", self.rate)
    }
}

/// Converts with an already-fetched rate. `amount_text` is echoed verbatim
/// into the history line so it reads the way the user typed it.
pub fn convert(amount_text: &str, amount: f64, rate: f64, from: &str, to: &str) -> Evaluated<Conversion> {
    let converted = fixed2(amount * rate);
    let entry = CalculationKind::CurrencyConversion.entry(format!(
        "{} {from} = {converted} {to}",
        amount_text.trim()
    ));
    Evaluated::recorded(Conversion { rate, converted }, entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_formats_result() {
        let outcome = convert("10", 10.0, 0.92, "USD", "EUR");
        assert_eq!(outcome.value.converted, "9.20");
        assert_eq!(outcome.value.rate_line("USD", "EUR"), "1 USD = 0.9200 EUR");
        assert_eq!(outcome.entry.unwrap().result, "10 USD = 9.20 EUR");
    }
}
