//! ledgersift-ingest: statement text ingestion — positioned-fragment
//! classification and the chequing/visa/CSV statement parsers.

pub mod classifier;
pub mod fragment;
pub mod parsers;

pub use classifier::{Band, Field, FieldClassifier};
pub use fragment::{Fragment, fragments_from_html};
pub use parsers::{parse_chequing, parse_csv_export, parse_visa};
