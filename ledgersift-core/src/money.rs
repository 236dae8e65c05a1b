//! Currency text parsing: `$`/comma-separated decimals with two fraction
//! digits, e.g. "$1,234.56" or "-45.67".

use std::sync::LazyLock;

use regex::Regex;

/// Currency amount with an optional `$`, used by the layout pipeline's
/// column checks.
pub const AMOUNT: &str = r"-?\$?[0-9,]+\.[0-9]{2}";

/// Currency amount with a mandatory `$`, as printed on visa statements.
pub const AMOUNT_DOLLARS: &str = r"-?\$[0-9,]+\.[0-9]{2}";

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{AMOUNT}$")).unwrap());

/// Whether the whole string is a currency amount.
pub fn is_amount(s: &str) -> bool {
    AMOUNT_RE.is_match(s.trim())
}

/// Parse a currency string to its numeric value. Returns `None` for text
/// that does not survive `$`/comma stripping, so one anomalous figure never
/// aborts a whole document.
pub fn parse_amount(s: &str) -> Option<f64> {
    s.trim().replace(['$', ','], "").parse().ok()
}
