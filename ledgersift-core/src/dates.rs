//! Statement date resolution: the "from X to Y" period header and
//! year-rollover for transaction dates that only carry month + day.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

const MONTH_SHORT: &str = "jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec";

/// Full month names first so "january" is not consumed as "jan".
const MONTH_LONG: &str = "january|february|march|april|may|june|july|august|september|october|november|december";

/// Month-first short date as printed on visa statements: "Nov 15". The
/// chequing day-first form ("15 Nov") is covered by
/// [`ShortDate::parse_day_first`].
pub const MONTH_DAY: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec) [0-9]{2}";

static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    // "from <month> <day>[, <year>] to <month> <day>[, <year>]"
    let long_date = format!(r"((?:{MONTH_LONG}|{MONTH_SHORT})) ([0-9]{{1,2}})(?:, )?([0-9]{{4}})?");
    Regex::new(&format!(r"(?i)from {long_date} to {long_date}")).unwrap()
});

static DAY_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^([0-9]{{1,2}}) ({MONTH_SHORT})$")).unwrap()
});

static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^({MONTH_SHORT}) ([0-9]{{2}})$")).unwrap()
});

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    let n = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

/// A transaction date as printed on a statement: month + day, no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortDate {
    pub month: u32,
    pub day: u32,
}

impl ShortDate {
    /// Parse "15 Nov" (whole string, case-insensitive).
    pub fn parse_day_first(s: &str) -> Option<Self> {
        let caps = DAY_MONTH_RE.captures(s.trim())?;
        Some(Self {
            month: month_number(&caps[2])?,
            day: caps[1].parse().ok()?,
        })
    }

    /// Parse "Nov 15" (whole string, case-insensitive).
    pub fn parse_month_first(s: &str) -> Option<Self> {
        let caps = MONTH_DAY_RE.captures(s.trim())?;
        Some(Self {
            month: month_number(&caps[1])?,
            day: caps[2].parse().ok()?,
        })
    }

    /// Resolve the calendar year against the statement's start date.
    ///
    /// A month earlier than the start month means the statement crossed a
    /// year boundary, so the date belongs to the following year. A date in
    /// the same month as the start never rolls over.
    pub fn resolve(&self, start: NaiveDate) -> Option<NaiveDate> {
        let year = if self.month < start.month() {
            start.year() + 1
        } else {
            start.year()
        };
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// Locate the statement's "from <long-date> to <long-date>" header and return
/// the resolved start date. When the start date omits its year, it inherits
/// the end date's. `None` when no header is found; callers must then give up
/// on the document since every per-transaction date depends on it.
pub fn extract_start_date(text: &str) -> Option<NaiveDate> {
    let caps = PERIOD_RE.captures(text)?;

    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps
        .get(3)
        .or(caps.get(6))
        .and_then(|m| m.as_str().parse().ok())?;

    NaiveDate::from_ymd_opt(year, month, day)
}
