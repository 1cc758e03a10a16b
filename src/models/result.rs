use serde::Serialize;

use crate::models::{ImportError, ImportedTransaction};

/// Final outcome of one import run.
///
/// `success` is true exactly when `errors` is empty, and `imported` always
/// equals `data.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportResult {
    pub success: bool,
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
    pub data: Vec<ImportedTransaction>
}

impl ImportResult {
    pub fn new(data: Vec<ImportedTransaction>, errors: Vec<ImportError>, skipped: usize) -> Self {
        Self {
            success: errors.is_empty(),
            imported: data.len(),
            skipped,
            errors,
            data
        }
    }

    pub fn failed(error: ImportError) -> Self {
        Self::new(Vec::new(), vec![error], 0)
    }

    /// Number of distinct lines that produced at least one error.
    pub fn errored_rows(&self) -> usize {
        let mut rows: Vec<_> = self.errors.iter().map(|error| error.row).collect();
        // Errors are recorded in line order, so duplicates are adjacent.
        rows.dedup();
        rows.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Imported {} transaction(s), skipped {} row(s), {} error(s)",
            self.imported,
            self.skipped,
            self.errors.len()
        )
    }
}
