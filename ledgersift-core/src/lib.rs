//! ledgersift-core: transaction data model, statement-date resolution,
//! currency parsing, and category/exclusion rule matching.

pub mod dates;
pub mod money;
pub mod rules;
pub mod transaction;

pub use dates::{ShortDate, extract_start_date};
pub use money::{is_amount, parse_amount};
pub use rules::{CategoryRules, ExcludeRules, Ruleset};
pub use transaction::{Draft, Method, Transaction};
