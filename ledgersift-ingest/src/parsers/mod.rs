//! Statement parsers, one per source document type.

pub mod chequing;
pub mod csv_export;
pub mod visa;

pub use chequing::parse_chequing;
pub use csv_export::parse_csv_export;
pub use visa::parse_visa;
