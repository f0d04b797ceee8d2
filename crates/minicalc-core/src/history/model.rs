//! History domain models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// One recorded calculation outcome.
///
/// Field names match the persisted JSON layout exactly
/// (`{ "id", "type", "result", "date" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Assigned by the ledger at creation time.
    pub id: String,
    /// Label of the originating calculator.
    #[serde(rename = "type")]
    pub kind: String,
    /// Already-formatted summary text.
    pub result: String,
    /// Human-readable local timestamp, assigned at creation time.
    pub date: String,
}

/// What a calculator submits: everything except `id` and `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub kind: String,
    pub result: String,
}

impl NewHistoryEntry {
    pub fn new(kind: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            result: result.into(),
        }
    }
}

/// Labels used by the built-in calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
pub enum CalculationKind {
    #[strum(serialize = "Tip Calculation")]
    Tip,
    #[strum(serialize = "Bill Split (Equal)")]
    BillSplitEqual,
    #[strum(serialize = "Tax Calculation")]
    Tax,
    #[strum(serialize = "Currency Conversion")]
    CurrencyConversion,
    #[strum(serialize = "Transformer Core Area")]
    TransformerCoreArea,
    #[strum(serialize = "Cable Core Size")]
    CableCoreSize,
    #[strum(serialize = "CPU Performance Score")]
    CpuPerformance,
}

impl CalculationKind {
    /// Builds an entry for this calculator with the given summary text.
    pub fn entry(self, result: impl Into<String>) -> NewHistoryEntry {
        NewHistoryEntry::new(self.as_ref(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_with_type_field() {
        let item = HistoryItem {
            id: "a".to_string(),
            kind: "Tip Calculation".to_string(),
            result: "Total: $1.00, Per Person: $1.00".to_string(),
            date: "1/1/2026, 9:00:00 AM".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Tip Calculation");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CalculationKind::Tip.to_string(), "Tip Calculation");
        assert_eq!(
            CalculationKind::CurrencyConversion.entry("x").kind,
            "Currency Conversion"
        );
        assert_eq!(
            "Cable Core Size".parse::<CalculationKind>().unwrap(),
            CalculationKind::CableCoreSize
        );
    }
}
