use serde::Serialize;
use thiserror::Error;

use crate::models::ImportField;
use crate::types::{AmountError, RowNumber};

/// Row number reported for failures that concern the whole file.
pub const FILE_LEVEL_ROW: RowNumber = 0;

/// One problem found while importing, attributed to a line and a field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Row {row} [{field}]: {message} ({value})")]
pub struct ImportError {
    /// 1-based line number in the uploaded file, `0` for file-level errors.
    pub row: RowNumber,
    pub field: ImportField,
    pub message: String,
    pub value: String
}

impl ImportError {
    pub fn new(row: RowNumber, field: ImportField, message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            row,
            field,
            message: message.into(),
            value: value.into()
        }
    }

    pub fn empty_file() -> Self {
        Self::new(FILE_LEVEL_ROW, ImportField::File, "File is empty", "")
    }

    pub fn headers_not_found() -> Self {
        Self::new(FILE_LEVEL_ROW, ImportField::Headers, "No header row with an address column was found", "")
    }

    pub fn invalid_number(row: RowNumber, field: ImportField, value: &str, error: &AmountError) -> Self {
        let message = match error {
            AmountError::Empty => format!("{} is required", label(field)),
            AmountError::InvalidFormat { .. } => format!("{} is not a valid number", label(field))
        };

        Self::new(row, field, message, value)
    }

    pub fn non_positive_price(row: RowNumber, value: &str) -> Self {
        Self::new(row, ImportField::Price, "Price must be greater than zero", value)
    }

    pub fn invalid_side(row: RowNumber, value: &str) -> Self {
        Self::new(row, ImportField::Side, "Side must be one of seller, buyer or both", value)
    }

    pub fn client_not_found(row: RowNumber, client_name: &str) -> Self {
        Self::new(row, ImportField::ClientName, format!("Client \"{client_name}\" not found"), client_name)
    }

    pub fn general(row: RowNumber, detail: &str, value: &str) -> Self {
        Self::new(row, ImportField::General, format!("Unexpected error while processing row: {detail}"), value)
    }

    pub fn is_file_level(&self) -> bool {
        matches!(self.field, ImportField::File | ImportField::Headers)
    }
}

fn label(field: ImportField) -> &'static str {
    match field {
        ImportField::Price => "Price",
        ImportField::CommissionRate => "Commission rate",
        ImportField::GrossCommission => "Gross commission",
        ImportField::NetCommission => "Net commission",
        ImportField::BrokerCommission => "Broker commission",
        _ => "Value"
    }
}
