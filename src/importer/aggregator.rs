use tracing::warn;

use crate::importer::RowOutcome;
use crate::models::{ImportError, ImportResult, ImportedTransaction};

/// Accumulates row outcomes of a single run into an `ImportResult`.
#[derive(Debug, Default)]
pub struct ResultBuilder {
    data: Vec<ImportedTransaction>,
    errors: Vec<ImportError>,
    skipped: usize
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Included(transaction) => self.data.push(transaction),
            RowOutcome::Skipped(_) => self.skipped += 1,
            RowOutcome::Errored(errors) => {
                for error in &errors {
                    warn!("{error}");
                }

                self.errors.extend(errors);
            }
        }
    }

    pub fn build(self) -> ImportResult {
        ImportResult::new(self.data, self.errors, self.skipped)
    }
}
