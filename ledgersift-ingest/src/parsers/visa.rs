//! Visa e-statement parser (pattern pipeline).
//!
//! The extractor returns flat text for these statements. A transaction spans
//! several physical lines:
//!
//!   NOV 15
//!   NOV 16
//!   AMAZON.COM 12345678901234567890123 MKTPLACE
//!   $45.67
//!
//! Line joining collapses those back into one logical line per transaction,
//! then a single regex captures transaction date, posting date, body and the
//! first amount. Every matched amount on these statements is a charge, so
//! polarity is fixed negative.

use std::sync::LazyLock;

use anyhow::Result;
use chrono::NaiveDate;
use ledgersift_core::dates::MONTH_DAY;
use ledgersift_core::money::AMOUNT_DOLLARS;
use ledgersift_core::{Draft, Method, Ruleset, ShortDate, Transaction, extract_start_date, parse_amount};
use regex::Regex;

static MONTH_DAY_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)^{MONTH_DAY}")).unwrap());

/// Parse a flat-text visa statement dump.
///
/// As with the layout pipeline, a document without a resolvable statement
/// period yields an empty result instead of an error.
pub fn parse_visa(
    raw: &str,
    start_override: Option<NaiveDate>,
    rules: &Ruleset,
) -> Result<Vec<Transaction>> {
    // Prefix of a transaction line, up to the first amount on it. Any later
    // amounts on the same line are balances or currency-exchange figures.
    let line_re = Regex::new(&format!(r"(?i)^{MONTH_DAY}.*?{AMOUNT_DOLLARS}"))?;
    let tx_re = Regex::new(&format!(
        r"(?i)^({MONTH_DAY})\s+({MONTH_DAY})\s+(.*)\s+({AMOUNT_DOLLARS})$"
    ))?;
    let code_re = Regex::new(r"[0-9]{23}")?;

    let Some(start_date) = start_override.or_else(|| extract_start_date(raw)) else {
        log::warn!("visa: no statement period header, skipping document");
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    for line in join_continuations(raw).lines() {
        let Some(found) = line_re.find(line) else {
            continue; // page decoration, totals, interest tables
        };
        if let Some(tx) = parse_line(found.as_str(), start_date, rules, &tx_re, &code_re) {
            out.push(tx);
        }
    }

    log::debug!("visa: {} transactions", out.len());
    Ok(out)
}

/// Re-join physical lines into one logical line per transaction.
///
/// A newline is a real transaction boundary only when the next line is
/// exactly a short-date token and the line after that starts with one — the
/// transaction-date/posting-date pair that opens every entry. Every other
/// newline is a continuation and becomes a space.
fn join_continuations(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let mut out = String::with_capacity(raw.len());

    for (i, line) in lines.iter().enumerate() {
        out.push_str(line);
        if i + 1 == lines.len() {
            break;
        }

        let next_is_date_token = ShortDate::parse_month_first(lines[i + 1]).is_some();
        let after_opens_with_date = lines
            .get(i + 2)
            .is_some_and(|l| MONTH_DAY_PREFIX_RE.is_match(l));

        if next_is_date_token && after_opens_with_date {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out
}

fn parse_line(
    line: &str,
    start_date: NaiveDate,
    rules: &Ruleset,
    tx_re: &Regex,
    code_re: &Regex,
) -> Option<Transaction> {
    let caps = tx_re.captures(line)?;

    let date = ShortDate::parse_month_first(&caps[1])?;
    let posting_date = ShortDate::parse_month_first(&caps[2])?;
    let body = caps[3].split_whitespace().collect::<Vec<_>>().join(" ");
    let (code, description) = split_code(&body, code_re);

    let mut draft = Draft::default();
    draft.date = date.resolve(start_date);
    draft.posting_date = posting_date.resolve(start_date);
    draft.push_description(&description);
    // every matched visa line is a charge
    draft.amount = Some(-parse_amount(&caps[4])?.abs());
    draft.code = code;

    draft.freeze(Method::Visa, rules)
}

/// Pull the 23-digit reference code out of the body, removing it and one
/// adjacent space from the description.
fn split_code(body: &str, code_re: &Regex) -> (Option<String>, String) {
    let Some(found) = code_re.find(body) else {
        return (None, body.to_string());
    };

    let code = found.as_str().to_string();
    let mut description = body.replacen(&format!(" {code}"), "", 1);
    if description.len() == body.len() {
        // code sat at the start of the body
        description = body.replacen(&code, "", 1);
    }

    (Some(code), description.trim().to_string())
}
