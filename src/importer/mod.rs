mod aggregator;
mod config;
mod errors;
mod export;
mod row;
#[cfg(test)]
mod tests;
mod transaction_importer;

pub use aggregator::ResultBuilder;
pub use config::{ImporterConfig, DEFAULT_PLACEHOLDER_PRICES, DEFAULT_SUMMARY_MARKERS};
pub use errors::ImporterError;
pub use export::{write_transactions, EXPORT_HEADER};
pub use row::{process_row, RowOutcome, SkipReason};
pub use transaction_importer::TransactionImporter;
