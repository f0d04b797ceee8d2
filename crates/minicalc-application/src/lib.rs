//! Application layer for minicalc.
//!
//! Calculator formulas plus the [`CalculatorSuite`] that runs them against
//! the history ledger and the exchange-rate provider.

pub mod calculator_suite;
pub mod calculators;
pub mod input;

pub use calculator_suite::{CalculatorSuite, ConversionError};
