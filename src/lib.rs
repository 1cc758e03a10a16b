pub mod importer;
pub mod matching;
pub mod models;
pub mod parser;
pub mod types;

pub use importer::{write_transactions, ImporterConfig, ImporterError, TransactionImporter};
pub use matching::{load_clients, load_clients_from_path, ClientIndex, ClientLookup};
pub use models::{Client, ImportError, ImportField, ImportResult, ImportedTransaction};

/// Import CSV text against the known clients using the default skip heuristics.
pub fn import_transactions(text: &str, clients: &[Client]) -> ImportResult {
    TransactionImporter::new().import(text, clients)
}
