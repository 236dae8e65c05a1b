//! Online-banking CSV export parser.
//!
//! Column layout of the bank's CSV download:
//!
//!   Account Type, Account Number, Transaction Date, Cheque Number,
//!   Description 1, Description 2, CAD$, USD$
//!
//! Dates here carry their year, so no rollover inference is needed; amounts
//! are already signed. Category and exclusion rules still apply.

use anyhow::Result;
use chrono::NaiveDate;
use ledgersift_core::{Draft, Method, Ruleset, Transaction};

/// Parse a CSV export, skipping rows that do not decode as transactions.
pub fn parse_csv_export(raw: &str, rules: &Ruleset) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let mut out = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let date_str = record.get(2).unwrap_or("").trim();
        let Ok(date) = NaiveDate::parse_from_str(date_str, "%m/%d/%Y") else {
            continue; // summary rows, blank trailing lines
        };

        let description = [record.get(4).unwrap_or(""), record.get(5).unwrap_or("")]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if description.is_empty() {
            continue;
        }

        let Ok(amount) = record.get(6).unwrap_or("").trim().parse::<f64>() else {
            continue;
        };

        let account_type = record.get(0).unwrap_or("").trim();
        let method = if account_type.to_ascii_lowercase().contains("visa") {
            Method::Visa
        } else {
            Method::Chequing
        };

        let mut draft = Draft::default();
        draft.date = Some(date);
        draft.push_description(&description);
        draft.amount = Some(amount);
        draft.code = record
            .get(3)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        if let Some(tx) = draft.freeze(method, rules) {
            out.push(tx);
        }
    }

    log::debug!("csv: {} transactions", out.len());
    Ok(out)
}
