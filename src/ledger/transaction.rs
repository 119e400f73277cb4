use std::fmt;

use chrono::{DateTime, Local};

/// Discriminates plain income from categorized expenses.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionKind {
    Income,
    Expense { category: String },
}

/// A dated monetary record. Immutable once created; the ledger only ever
/// appends and removes whole transactions.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Local>,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Builds an income entry. The description is fixed.
    pub fn income(amount: f64) -> Self {
        Self {
            description: "Income".into(),
            amount,
            date: Local::now(),
            kind: TransactionKind::Income,
        }
    }

    /// Builds an expense entry carrying a free-text category label.
    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date: Local::now(),
            kind: TransactionKind::Expense {
                category: category.into(),
            },
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense { .. })
    }

    /// Category label, present on expenses only.
    pub fn category(&self) -> Option<&str> {
        match &self.kind {
            TransactionKind::Expense { category } => Some(category),
            TransactionKind::Income => None,
        }
    }

    /// True for expenses whose category equals `needle` ignoring case.
    pub fn matches_category(&self, needle: &str) -> bool {
        self.category()
            .is_some_and(|category| category.eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.date.format("%Y-%m-%d %H:%M:%S");
        match &self.kind {
            TransactionKind::Income => write!(
                f,
                "Transaction: {} | Amount: {:.2} | Date: {}",
                self.description, self.amount, date
            ),
            TransactionKind::Expense { category } => write!(
                f,
                "Expense: {} | Amount: {:.2} | Category: {} | Date: {}",
                self.description, self.amount, category, date
            ),
        }
    }
}
