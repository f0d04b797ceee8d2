//! Lenient parsing of form-style numeric input.
//!
//! Calculator fields arrive as text. A field that does not start with a
//! number counts as zero instead of being rejected, and trailing garbage
//! after a numeric prefix is ignored (`"12kg"` reads as `12`).

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid decimal regex")
});

static INTEGER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("valid integer regex"));

/// Leading decimal number in `raw`, or `None` if there is none.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    DECIMAL_PREFIX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Leading integer in `raw`, or `None` if there is none.
pub fn parse_integer(raw: &str) -> Option<i64> {
    INTEGER_PREFIX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Decimal field where anything unparseable means zero.
pub fn number_or_zero(raw: &str) -> f64 {
    parse_decimal(raw).unwrap_or(0.0)
}

/// Count field (people, cores) where unparseable or zero falls back to `default`.
pub fn count_or(raw: &str, default: i64) -> i64 {
    match parse_integer(raw) {
        Some(0) | None => default,
        Some(n) => n,
    }
}
