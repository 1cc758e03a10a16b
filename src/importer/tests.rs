use super::{process_row, write_transactions, ImporterConfig, ImporterError, RowOutcome, SkipReason, TransactionImporter};

use anyhow::Result;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::matching::{ClientIndex, ClientLookup};
use crate::models::{Client, ImportField, ImportResult, Side, TransactionStatus};
use crate::parser::{ColumnMap, RawRow};
use crate::types::ClientId;

const HEADER: &str = "ADDRESS,NAME,SOURCE,S,PRICE,COMM %";

fn create_csv(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);

    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }

    csv
}

fn john_doe() -> Vec<Client> {
    vec![Client::new("c1", "John Doe")]
}

fn raw_row(line: usize, cells: &[&str]) -> RawRow {
    RawRow {
        line,
        cells: cells.iter().map(|cell| cell.to_string()).collect()
    }
}

struct PanickingLookup;

impl ClientLookup for PanickingLookup {
    fn resolve(&self, name: &str) -> Option<ClientId> {
        if name == "Broken Record" {
            panic!("lookup backend unavailable");
        }

        Some("c9".to_string())
    }
}

#[test]
fn test_end_to_end_single_transaction_import() {
    let csv = create_csv(&["123 Main St,John Doe,referral,seller,$100000,3.0%"]);

    let result = TransactionImporter::new().import(&csv, &john_doe());

    assert!(result.success);
    assert_eq!(result.imported, 1);
    assert!(result.errors.is_empty());

    let transaction = &result.data[0];

    assert_eq!(transaction.address, "123 Main St");
    assert_eq!(transaction.client_name, "John Doe");
    assert_eq!(transaction.client_id, "c1");
    assert_eq!(transaction.price.value(), dec!(100000));
    assert_eq!(transaction.commission_rate.value(), dec!(3.0));
    assert_eq!(transaction.source.as_deref(), Some("referral"));
    assert_eq!(transaction.side, Some(Side::Seller));
    assert_eq!(transaction.gross_commission, None);
    assert_eq!(transaction.status, TransactionStatus::Pending);
}

#[test]
fn test_price_formats_all_import_as_the_same_amount() {
    let csv = create_csv(&[
        r#"1 A St,John Doe,,,"$100,000.00",3"#,
        "2 B St,John Doe,,,100000,3",
        r#"3 C St,John Doe,,,"100,000",3"#,
        "4 D St,John Doe,,,$100000,3"
    ]);

    let result = TransactionImporter::new().import(&csv, &john_doe());

    assert_eq!(result.imported, 4);

    for transaction in &result.data {
        assert_eq!(transaction.price.value(), dec!(100000));
    }
}

#[test]
fn test_unknown_client_is_reported_once_and_row_dropped() {
    let csv = create_csv(&["9 Pine Rd,Unknown Person,referral,buyer,$250000,2.5%"]);
    let clients = vec![Client::new("c1", "Jane Smith")];

    let result = TransactionImporter::new().import(&csv, &clients);

    assert!(!result.success);
    assert!(result.data.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::ClientName);
    assert!(result.errors[0].message.contains("Unknown Person"));
    assert_eq!(result.errors[0].row, 2);
}

#[test]
fn test_carriage_return_only_file_imports_every_row() {
    let csv = "ADDRESS,NAME,SOURCE,S,PRICE,COMM %\r\
               123 Main St,John Doe,referral,seller,$100000,3.0%\r\
               9 Pine Rd,Unknown Person,referral,buyer,$250000,2.5%\r";

    let result = TransactionImporter::new().import(csv, &john_doe());

    assert_eq!(result.imported, 1);
    assert_eq!(result.data[0].client_id, "c1");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 3);
    assert_eq!(result.errors[0].field, ImportField::ClientName);
}

#[test]
fn test_empty_client_name_is_not_matched_to_any_client() {
    let csv = create_csv(&["123 Main St,,referral,seller,$100000,3.0%"]);

    let result = TransactionImporter::new().import(&csv, &john_doe());

    assert!(result.data.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::ClientName);
    assert_eq!(result.errors[0].message, "Client \"\" not found");
}

#[test]
fn test_over_precise_price_is_a_price_error_not_a_rounded_amount() {
    let csv = create_csv(&["123 Main St,John Doe,referral,seller,0.123456789012345678901234567891,3.0%"]);

    let result = TransactionImporter::new().import(&csv, &john_doe());

    assert!(result.data.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::Price);
    assert_eq!(result.errors[0].value, "0.123456789012345678901234567891");
}

#[test]
fn test_empty_file_is_a_file_level_error() {
    let result = TransactionImporter::new().import("\n  \n", &john_doe());

    assert!(!result.success);
    assert_eq!(result.imported, 0);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::File);
}

#[test]
fn test_missing_header_row_is_a_file_level_error() {
    let csv = "NAME,PRICE\nJohn Doe,$100000\n";

    let result = TransactionImporter::new().import(csv, &john_doe());

    assert!(!result.success);
    assert_eq!(result.imported, 0);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::Headers);
}

#[test]
fn test_header_row_may_follow_title_rows() {
    let csv = "2024 Closed Sales,,\n\nProperty Address,Client Name,Sale Price,Comm %\n5 Elm St,John Doe,$300000,3%\n";

    let result = TransactionImporter::new().import(csv, &john_doe());

    assert!(result.success);
    assert_eq!(result.imported, 1);
    assert_eq!(result.data[0].address, "5 Elm St");
}

#[test]
fn test_summary_and_incomplete_rows_are_skipped_silently() {
    let csv = create_csv(&[
        "123 Main St,John Doe,referral,seller,$100000,3.0%",
        r#""TOTAL: $50,000",,,,,"#,
        "Pending:,,,,,",
        "SOLD:,,,,,",
        ",John Doe,referral,seller,$100000,3.0%",
        "7 Oak Ave,John Doe,referral,seller,,3.0%",
        "8 Oak Ave,John Doe,referral,seller,0,3.0%",
        "9 Oak Ave,John Doe,referral,seller,$0.00,3.0%",
        ",,,,,"
    ]);

    let result = TransactionImporter::new().import(&csv, &john_doe());

    assert!(result.success);
    assert_eq!(result.imported, 1);
    assert_eq!(result.skipped, 8);
    assert!(result.errors.is_empty());
}

#[test]
fn test_each_invalid_field_records_its_own_error() {
    let csv = create_csv(&["123 Main St,John Doe,referral,landlord,$12k,three%"]);

    let result = TransactionImporter::new().import(&csv, &john_doe());

    let fields: Vec<ImportField> = result.errors.iter().map(|error| error.field).collect();

    assert!(result.data.is_empty());
    assert_eq!(fields, vec![ImportField::Price, ImportField::CommissionRate, ImportField::Side]);
    assert!(result.errors.iter().all(|error| error.row == 2));
    assert_eq!(result.errors[0].value, "$12k");
    assert_eq!(result.errors[2].value, "landlord");
}

#[test]
fn test_invalid_fields_skip_client_resolution() {
    let csv = create_csv(&["123 Main St,Nobody Known,referral,seller,-500,3%"]);

    let result = TransactionImporter::new().import(&csv, &john_doe());

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::Price);
    assert_eq!(result.errors[0].message, "Price must be greater than zero");
}

#[test]
fn test_missing_commission_rate_column_is_an_error() {
    let csv = "ADDRESS,NAME,PRICE\n123 Main St,John Doe,$100000\n";

    let result = TransactionImporter::new().import(csv, &john_doe());

    assert!(result.data.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::CommissionRate);
    assert_eq!(result.errors[0].message, "Commission rate is required");
}

#[test]
fn test_commission_breakdown_columns_are_optional() {
    let csv = "Address,Name,Side,Price,Comm %,Gross Comm,Net Comm,Broker Comm,Closing Date\n\
               1 Elm St,John Doe,buyer,$400000,2.5%,\"$10,000\",$8000.50,,2024-03-15\n\
               2 Elm St,John Doe,both,$200000,3,,,,\n";

    let result = TransactionImporter::new().import(csv, &john_doe());

    assert!(result.success);
    assert_eq!(result.imported, 2);

    let closed = &result.data[0];

    assert_eq!(closed.side, Some(Side::Buyer));
    assert_eq!(closed.gross_commission.map(|value| value.value()), Some(dec!(10000)));
    assert_eq!(closed.net_commission.map(|value| value.value()), Some(dec!(8000.50)));
    assert_eq!(closed.broker_commission, None);
    assert_eq!(closed.closing_date.as_deref(), Some("2024-03-15"));
    assert_eq!(closed.status, TransactionStatus::Closed);

    let pending = &result.data[1];

    assert_eq!(pending.side, Some(Side::Both));
    assert_eq!(pending.gross_commission, None);
    assert_eq!(pending.closing_date, None);
    assert_eq!(pending.status, TransactionStatus::Pending);
}

#[test]
fn test_malformed_commission_breakdown_is_an_error() {
    let csv = "Address,Name,Price,Comm %,Gross Comm\n1 Elm St,John Doe,$400000,2.5%,n/a\n";

    let result = TransactionImporter::new().import(csv, &john_doe());

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::GrossCommission);
    assert_eq!(result.errors[0].value, "n/a");
}

#[test]
fn test_partition_accounts_for_every_data_row() {
    let csv = create_csv(&[
        "1 A St,John Doe,referral,seller,$100000,3%",
        "2 B St,Someone Else,referral,seller,$100000,3%",
        "3 C St,John Doe,referral,renter,abc,x",
        "TOTAL,,,,,",
        "4 D St,John,referral,buyer,$90000,2%",
        "5 E St,John Doe,,,,"
    ]);

    let result = TransactionImporter::new().import(&csv, &john_doe());
    let data_rows = 6;

    assert_eq!(result.imported, 2);
    assert_eq!(result.errored_rows(), 2);
    assert_eq!(result.skipped, 2);
    assert_eq!(result.imported + result.errored_rows() + result.skipped, data_rows);
}

#[test]
fn test_import_is_deterministic() {
    let csv = create_csv(&[
        "1 A St,John Doe,referral,seller,$100000,3%",
        "2 B St,Someone Else,referral,seller,$100000,3%",
        "TOTAL,,,,,"
    ]);
    let clients = john_doe();
    let importer = TransactionImporter::new();

    let first: ImportResult = importer.import(&csv, &clients);
    let second: ImportResult = importer.import(&csv, &clients);

    assert_eq!(first, second);
}

#[test]
fn test_panicking_row_becomes_general_error_and_import_continues() {
    let csv = create_csv(&[
        "1 A St,Broken Record,referral,seller,$100000,3%",
        "2 B St,Anyone,referral,seller,$100000,3%"
    ]);

    let result = TransactionImporter::new().import_with(&csv, &PanickingLookup);

    assert_eq!(result.imported, 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, ImportField::General);
    assert_eq!(result.errors[0].row, 2);
    assert!(result.errors[0].message.contains("lookup backend unavailable"));
}

#[test]
fn test_custom_summary_markers_replace_defaults() {
    let csv = create_csv(&[
        "Subtotal,John Doe,referral,seller,$100000,3%",
        "Q1 Closings,,,,,",
        "Total,John Doe,referral,seller,$100000,3%"
    ]);

    let result = TransactionImporter::new()
        .with_summary_markers(["Q1"])
        .import(&csv, &john_doe());

    assert_eq!(result.skipped, 1);
    assert_eq!(result.imported, 2);
}

#[test]
fn test_custom_placeholder_prices() {
    let csv = create_csv(&["1 A St,John Doe,referral,seller,TBD,3%"]);

    let strict = TransactionImporter::new().import(&csv, &john_doe());
    let lenient = TransactionImporter::new()
        .with_placeholder_prices(["TBD", "0"])
        .import(&csv, &john_doe());

    assert_eq!(strict.errors[0].field, ImportField::Price);
    assert!(lenient.success);
    assert_eq!(lenient.skipped, 1);
}

#[test]
fn test_process_row_reports_skip_reasons() {
    let columns = ColumnMap::infer(&["Address", "Name", "Price", "Comm %"]);
    let index = ClientIndex::new(&john_doe());
    let config = ImporterConfig::default();

    let blank = process_row(&raw_row(2, &["", "", "", ""]), &columns, &index, &config);
    let summary = process_row(&raw_row(3, &["Totals:", "", "", ""]), &columns, &index, &config);
    let incomplete = process_row(&raw_row(4, &["1 A St", "John Doe", "", "3%"]), &columns, &index, &config);
    let short = process_row(&raw_row(5, &["1 A St"]), &columns, &index, &config);

    assert_eq!(blank, RowOutcome::Skipped(SkipReason::Blank));
    assert_eq!(summary, RowOutcome::Skipped(SkipReason::Summary));
    assert_eq!(incomplete, RowOutcome::Skipped(SkipReason::Incomplete));
    assert_eq!(short, RowOutcome::Skipped(SkipReason::Incomplete));
}

#[tokio::test]
async fn test_run_reads_file_and_imports() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    writeln!(file, "123 Main St,John Doe,referral,seller,$100000,3.0%")?;

    let result = TransactionImporter::new().run(file.path(), &john_doe()).await?;

    assert!(result.success);
    assert_eq!(result.imported, 1);

    Ok(())
}

#[tokio::test]
async fn test_run_with_missing_file_fails() {
    let result = TransactionImporter::new().run("missing-transactions.csv", &john_doe()).await;

    assert!(matches!(result, Err(ImporterError::Read { .. })));
}

#[test]
fn test_write_transactions_exports_csv() -> Result<()> {
    let csv = create_csv(&["123 Main St,John Doe,referral,seller,$100000,3.0%"]);
    let result = TransactionImporter::new().import(&csv, &john_doe());

    let mut output = Vec::new();
    write_transactions(&result.data, &mut output)?;
    let output = String::from_utf8(output)?;
    let mut lines = output.lines();

    assert_eq!(
        lines.next(),
        Some("address,client_name,client_id,price,commission_rate,source,side,gross_commission,net_commission,broker_commission,closing_date,status")
    );
    assert_eq!(lines.next(), Some("123 Main St,John Doe,c1,100000,3.0,referral,seller,,,,,pending"));
    assert_eq!(lines.next(), None);

    Ok(())
}

#[test]
fn test_write_transactions_without_data_writes_header_only() -> Result<()> {
    let mut output = Vec::new();
    write_transactions(&[], &mut output)?;

    assert_eq!(String::from_utf8(output)?.lines().count(), 1);

    Ok(())
}
