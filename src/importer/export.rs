use csv::WriterBuilder;
use std::io::Write;

use crate::importer::ImporterError;
use crate::models::ImportedTransaction;

pub const EXPORT_HEADER: [&str; 12] = [
    "address",
    "client_name",
    "client_id",
    "price",
    "commission_rate",
    "source",
    "side",
    "gross_commission",
    "net_commission",
    "broker_commission",
    "closing_date",
    "status"
];

/// Writes importable transactions as CSV, header first even when there are none.
pub fn write_transactions<W: Write>(transactions: &[ImportedTransaction], writer: W) -> Result<(), ImporterError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(EXPORT_HEADER)?;

    for transaction in transactions {
        csv_writer.serialize(transaction)?;
    }

    csv_writer.flush()?;

    Ok(())
}
