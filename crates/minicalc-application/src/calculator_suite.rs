//! CalculatorSuite - runs calculators and records their outcomes.
//!
//! The calculators in [`crate::calculators`] are pure. This layer owns the
//! collaborators (history ledger, rate provider) and the acting identity,
//! and submits an entry to the ledger only when a calculator produced one.

use std::sync::Arc;

use minicalc_core::Identity;
use minicalc_core::history::{HistoryItem, HistoryRepository, NewHistoryEntry};
use minicalc_core::rate::ExchangeRateProvider;
use thiserror::Error;

use crate::calculators::currency::{self, Conversion};
use crate::calculators::engineering::{self, CableInput};
use crate::calculators::tip::{self, TipInput, TipResult};
use crate::calculators::tax::{self, TaxResult};
use crate::calculators::{Evaluated, bill_split};
use crate::input::{count_or, number_or_zero, parse_decimal};

/// Why a currency conversion produced nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Any gateway failure. Deliberately generic: the cause is only logged.
    #[error("Could not fetch exchange rate. Please try again.")]
    RateUnavailable,

    #[error("Amount '{0}' is not a number")]
    InvalidAmount(String),
}

pub struct CalculatorSuite {
    history: Arc<dyn HistoryRepository>,
    rates: Arc<dyn ExchangeRateProvider>,
    identity: Option<Identity>,
}

impl CalculatorSuite {
    pub fn new(history: Arc<dyn HistoryRepository>, rates: Arc<dyn ExchangeRateProvider>) -> Self {
        Self {
            history,
            rates,
            identity: None,
        }
    }

    /// Acts on behalf of `identity`. Without one, nothing is recorded.
    pub fn with_identity(mut self, identity: Option<Identity>) -> Self {
        self.identity = identity;
        self
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    fn keep<T>(&self, outcome: Evaluated<T>) -> T {
        if let Some(entry) = outcome.entry {
            self.record(entry);
        }
        outcome.value
    }

    fn record(&self, entry: NewHistoryEntry) {
        tracing::debug!(kind = %entry.kind, "recording calculation");
        self.history.record_result(self.identity.as_ref(), entry);
    }

    pub fn tip(&self, input: &TipInput) -> TipResult {
        self.keep(tip::calculate(input))
    }

    /// Per-person share formatted to two decimals.
    pub fn split_equal(&self, bill: f64, people: i64) -> String {
        self.keep(bill_split::split_equal(bill, people))
    }

    /// Equal split from form text. A head-count that is blank, unparseable
    /// or zero counts as one person.
    pub fn split_equal_from_text(&self, bill: &str, people: &str) -> String {
        self.split_equal(number_or_zero(bill), count_or(people, 1))
    }

    /// Amount of the bill not yet covered by `shares`. Not recorded.
    pub fn split_remaining(&self, bill: f64, shares: &[f64]) -> f64 {
        bill_split::remaining_unequal(bill, shares)
    }

    pub fn tax(&self, amount: f64, rate_percent: f64) -> TaxResult {
        self.keep(tax::calculate(amount, rate_percent))
    }

    pub fn transformer_core_area(&self, voltage: f64, frequency: f64) -> String {
        self.keep(engineering::transformer_core_area(voltage, frequency))
    }

    pub fn cable_core_size(&self, input: &CableInput) -> String {
        self.keep(engineering::cable_core_size(input))
    }

    pub fn cpu_performance(&self, cores: i64, clock_ghz: f64, ipc: f64) -> String {
        self.keep(engineering::cpu_performance(cores, clock_ghz, ipc))
    }

    /// Fetches a rate and converts `amount_text`.
    ///
    /// A missing rate, or a rate of exactly zero, is reported as
    /// [`ConversionError::RateUnavailable`]. Nothing is recorded on error.
    pub async fn convert(&self, amount_text: &str, from: &str, to: &str) -> Result<Conversion, ConversionError> {
        let amount = parse_decimal(amount_text)
            .ok_or_else(|| ConversionError::InvalidAmount(amount_text.trim().to_string()))?;

        let rate = self
            .rates
            .fetch_exchange_rate(from, to)
            .await
            .filter(|rate| *rate != 0.0)
            .ok_or(ConversionError::RateUnavailable)?;

        Ok(self.keep(currency::convert(amount_text, amount, rate, from, to)))
    }

    pub fn history(&self) -> Vec<HistoryItem> {
        self.history.list_results(self.identity.as_ref())
    }

    pub fn delete_history_item(&self, id: &str) {
        self.history.delete_result(self.identity.as_ref(), id);
    }

    pub fn clear_history(&self) {
        self.history.clear_results(self.identity.as_ref());
    }
}
