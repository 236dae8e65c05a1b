//! Canonical transaction record and the draft accumulator both statement
//! pipelines assemble into.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rules::Ruleset;

/// Which pipeline produced a record. Only used for downstream formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "chequing")]
    Chequing,
    #[serde(rename = "visa")]
    Visa,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Chequing => "chequing",
            Method::Visa => "visa",
        }
    }
}

/// Normalized output of statement parsers (layout-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Date the transaction posted; equals `date` when the source only
    /// carries one date.
    pub posting_date: NaiveDate,
    pub description: String,
    /// Negative = withdrawal/charge, positive = deposit/credit.
    pub amount: f64,
    /// 23-digit reference code, when the statement prints one.
    pub code: Option<String>,
    pub category: Option<String>,
    pub method: Method,
}

/// In-progress partial transaction. Fields arrive incrementally as fragments
/// or lines are consumed; the draft freezes into a [`Transaction`] only once
/// the three required fields (date, description, amount) are present.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub date: Option<NaiveDate>,
    /// Distinct posting date, when the source prints one.
    pub posting_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub code: Option<String>,
}

impl Draft {
    /// All three required fields present; an empty description does not
    /// count.
    pub fn is_complete(&self) -> bool {
        self.date.is_some()
            && self.description.as_deref().is_some_and(|d| !d.is_empty())
            && self.amount.is_some()
    }

    /// Append fragment text to the description, space-joined.
    pub fn push_description(&mut self, text: &str) {
        match &mut self.description {
            Some(desc) => {
                desc.push(' ');
                desc.push_str(text);
            }
            None => self.description = Some(text.to_string()),
        }
    }

    /// Freeze a complete draft into a transaction: attach the method, default
    /// the posting date to the transaction date, and resolve the category
    /// with the ruleset's fallback label.
    ///
    /// Returns `None` for incomplete drafts and for drafts whose description
    /// matches an exclusion rule. Exclusion runs last, against the final
    /// concatenated description.
    pub fn freeze(&self, method: Method, rules: &Ruleset) -> Option<Transaction> {
        if !self.is_complete() {
            return None;
        }

        let description = self.description.clone()?;
        if rules.is_excluded(&description) {
            return None;
        }

        let date = self.date?;
        let category = rules.category_for(&description);

        Some(Transaction {
            date,
            posting_date: self.posting_date.unwrap_or(date),
            description,
            amount: self.amount?,
            code: self.code.clone(),
            category: Some(category.to_string()),
            method,
        })
    }

    /// Reset for the next transaction, carrying the date forward so entries
    /// that omit an explicit date reuse the previous one.
    pub fn reset_keeping_date(&mut self) {
        self.posting_date = None;
        self.description = None;
        self.amount = None;
        self.code = None;
    }
}
