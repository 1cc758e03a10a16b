use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, error, info};

use crate::importer::{process_row, ImporterConfig, ImporterError, ResultBuilder, RowOutcome};
use crate::matching::{ClientIndex, ClientLookup};
use crate::models::{Client, ImportError, ImportResult};
use crate::parser::{is_header_row, tokenize, ColumnMap, RawRow};

/// Imports real-estate transactions from a spreadsheet CSV export.
pub struct TransactionImporter {
    config: ImporterConfig
}

impl TransactionImporter {
    pub fn new() -> Self {
        Self {
            config: ImporterConfig::default()
        }
    }

    pub fn with_config(mut self, config: ImporterConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the first-cell markers that identify summary rows.
    pub fn with_summary_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.config.summary_markers = markers.into_iter().map(|marker| marker.as_ref().to_lowercase()).collect();
        self
    }

    pub fn with_placeholder_prices<I, S>(mut self, prices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.config.placeholder_prices = prices.into_iter().map(|price| price.as_ref().trim().to_string()).collect();
        self
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// Reads the uploaded file and imports it against the known clients.
    ///
    /// Reading the file is the only asynchronous step; everything after it
    /// runs synchronously to completion.
    pub async fn run(&self, path: impl AsRef<Path>, clients: &[Client]) -> Result<ImportResult, ImporterError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ImporterError::read(path, source))?;

        debug!("Read {} byte(s) from {}", text.len(), path.display());

        Ok(self.import(&text, clients))
    }

    /// Imports CSV text, resolving client names against `clients`.
    pub fn import(&self, text: &str, clients: &[Client]) -> ImportResult {
        let index = ClientIndex::new(clients);

        self.import_with(text, &index)
    }

    /// Imports CSV text with a caller-provided client lookup.
    ///
    /// File-level problems end the run with a single error. Row-level problems
    /// are collected and the run moves on to the next row, including rows
    /// whose processing panicked. The process panic hook still runs for those
    /// rows, so the default hook prints the panic message to stderr. Callers
    /// that want those rows reported only through the result install their own
    /// hook with `std::panic::set_hook`.
    pub fn import_with<L: ClientLookup>(&self, text: &str, lookup: &L) -> ImportResult {
        let rows: Vec<RawRow> = tokenize(text).collect();

        if rows.is_empty() {
            error!("Import aborted: file is empty");
            return ImportResult::failed(ImportError::empty_file());
        }

        let Some(header_position) = rows.iter().position(is_header_row) else {
            error!("Import aborted: no header row with an address column");
            return ImportResult::failed(ImportError::headers_not_found());
        };

        let columns = ColumnMap::infer(&rows[header_position].cells);
        debug!("Header found on line [{}]: {columns:?}", rows[header_position].line);

        let mut builder = ResultBuilder::new();

        for row in &rows[header_position + 1..] {
            let outcome = catch_unwind(AssertUnwindSafe(|| process_row(row, &columns, lookup, &self.config)))
                .unwrap_or_else(|payload| {
                    let detail = panic_detail(payload.as_ref());
                    error!("Line [{}] could not be processed: {detail}", row.line);

                    RowOutcome::Errored(vec![ImportError::general(row.line, &detail, &row.cells.join(","))])
                });

            builder.record(outcome);
        }

        let result = builder.build();
        info!("{}", result.summary());

        result
    }
}

impl Default for TransactionImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}
