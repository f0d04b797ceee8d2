//! In-memory expense tracker. Expenses never reach the history ledger.

use chrono::Local;
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transport,
    Shopping,
    Utilities,
    Entertainment,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: String,
}

#[derive(Debug, Default)]
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an expense if the description is non-blank and the amount is
    /// positive. Returns whether it was added.
    pub fn add(&mut self, description: &str, amount: f64, category: ExpenseCategory) -> bool {
        let description = description.trim();
        if description.is_empty() || amount.is_nan() || amount <= 0.0 {
            return false;
        }

        self.next_id += 1;
        self.expenses.push(Expense {
            id: self.next_id,
            description: description.to_string(),
            amount,
            category,
            date: Local::now().format("%-m/%-d/%Y").to_string(),
        });
        true
    }

    /// Newest first.
    pub fn list(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().rev()
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
