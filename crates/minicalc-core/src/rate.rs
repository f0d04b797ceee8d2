//! Exchange-rate provider trait.

use async_trait::async_trait;

/// Currencies offered by the converter.
pub const SUPPORTED_CURRENCIES: [&str; 9] = [
    "USD", "EUR", "JPY", "GBP", "AUD", "CAD", "CHF", "CNY", "INR",
];

/// Returns true if `code` is one of [`SUPPORTED_CURRENCIES`] (case-insensitive).
pub fn is_supported_currency(code: &str) -> bool {
    SUPPORTED_CURRENCIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(code))
}

/// Source of `(from, to) -> rate` conversions.
///
/// `None` is the single absence-marker for every failure: missing
/// credential, transport error, timeout, or a malformed payload. Callers only
/// branch on presence. The returned rate is not range-checked.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn fetch_exchange_rate(&self, from: &str, to: &str) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_currency_lookup() {
        assert!(is_supported_currency("usd"));
        assert!(is_supported_currency("INR"));
        assert!(!is_supported_currency("XYZ"));
    }
}
