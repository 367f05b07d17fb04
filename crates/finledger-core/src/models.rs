//! Core data model for the ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single financial record (income or expense)
///
/// `id` is caller-supplied and assumed unique; the store never enforces
/// uniqueness. `kind` is serialized as `type` and is semantically
/// "income" or "expense", but any string is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-supplied identifier
    pub id: i64,
    /// Transaction date (YYYY-MM-DD by convention, not validated)
    pub date: String,
    /// "income" or "expense"
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form category
    pub category: String,
    /// Transaction amount
    pub amount: f64,
    /// Optional note, empty when absent
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Get the transaction date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Check if this is an income record
    pub fn is_income(&self) -> bool {
        self.kind == "income"
    }

    /// Check if this is an expense record
    pub fn is_expense(&self) -> bool {
        self.kind == "expense"
    }

    /// Get a summary string for logging
    pub fn summary(&self) -> String {
        format!("{} {} {} {:.2}", self.id, self.date, self.category, self.amount)
    }
}

// ==================== Tests ====================
