//! Chequing/savings e-statement parser (layout pipeline).
//!
//! The extractor renders these statements as positioned HTML, one fragment
//! per text run. Column position decides what a fragment means, and a small
//! accumulator state machine stitches fragments back into transactions:
//!
//!   <p style="...left:12.0pt">15 Nov</p>       date column
//!   <p style="...left:64.3pt">GROCERY STORE</p>  description column
//!   <p style="...left:305.9pt">45.67</p>       withdrawal column
//!
//! A transaction may omit its date line, in which case it reuses the date of
//! the previous transaction.

use anyhow::Result;
use chrono::NaiveDate;
use ledgersift_core::{Draft, Method, Ruleset, ShortDate, Transaction, extract_start_date, parse_amount};

use crate::classifier::{Field, FieldClassifier};
use crate::fragment::{Fragment, fragments_from_html};

/// Parse a positioned-HTML chequing statement dump.
///
/// The statement period header supplies the year for every transaction date;
/// without it (and without `start_override`) the document yields no
/// transactions rather than failing the batch.
pub fn parse_chequing(
    html: &str,
    start_override: Option<NaiveDate>,
    rules: &Ruleset,
) -> Result<Vec<Transaction>> {
    let Some(start_date) = start_override.or_else(|| extract_start_date(html)) else {
        log::warn!("chequing: no statement period header, skipping document");
        return Ok(Vec::new());
    };

    let fragments = fragments_from_html(html);
    let out = parse_fragments(&fragments, start_date, &FieldClassifier::chequing(), rules);
    log::debug!(
        "chequing: {} transactions from {} fragments",
        out.len(),
        fragments.len()
    );

    Ok(out)
}

/// Run the accumulator state machine over a fragment stream.
///
/// Field order is enforced by the guards: a description only attaches once a
/// date is known, an amount only once a description exists. Withdrawal-column
/// amounts are stored negative, deposit-column amounts positive. Whatever is
/// left in the accumulator at end of stream is discarded.
pub fn parse_fragments(
    fragments: &[Fragment],
    start_date: NaiveDate,
    classifier: &FieldClassifier,
    rules: &Ruleset,
) -> Vec<Transaction> {
    let mut out = Vec::new();
    let mut draft = Draft::default();

    for fragment in fragments {
        match classifier.classify(fragment) {
            Some(Field::Date) => {
                if let Some(date) = ShortDate::parse_day_first(&fragment.text)
                    .and_then(|sd| sd.resolve(start_date))
                {
                    draft.date = Some(date);
                }
            }
            Some(Field::Description) if draft.date.is_some() => {
                draft.push_description(fragment.text.trim());
            }
            Some(Field::Withdrawal) if draft.description.is_some() => {
                if let Some(value) = parse_amount(&fragment.text) {
                    draft.amount = Some(-value);
                }
            }
            Some(Field::Deposit) if draft.description.is_some() => {
                if let Some(value) = parse_amount(&fragment.text) {
                    draft.amount = Some(value);
                }
            }
            // balance column, out-of-band decoration, or out-of-order fields
            _ => {}
        }

        if draft.is_complete() {
            if let Some(tx) = draft.freeze(Method::Chequing, rules) {
                out.push(tx);
            }
            draft.reset_keeping_date();
        }
    }

    out
}
