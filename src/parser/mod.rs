// Parser module: line-delimited JSON record ingestion.

pub mod record_parser;

pub use record_parser::{JsonLinesSource, ListingStream, RecordSource, read_products};
