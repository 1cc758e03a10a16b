use std::str::FromStr;

use tracing::debug;

use crate::importer::ImporterConfig;
use crate::matching::ClientLookup;
use crate::models::{ImportError, ImportField, ImportedTransaction, Side, TransactionStatus};
use crate::parser::{ColumnMap, RawRow};
use crate::types::{AmountError, Currency, Percentage, RowNumber};

/// Why a data row was dropped without being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Summary,
    Incomplete
}

/// Terminal state of one data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Included(ImportedTransaction),
    Skipped(SkipReason),
    Errored(Vec<ImportError>)
}

/// Runs one data row through skip, presence, validation and client resolution.
///
/// Every failing field contributes its own error. Client resolution is only
/// attempted once all fields are valid and reports at most one error.
pub fn process_row<L: ClientLookup>(row: &RawRow, columns: &ColumnMap, lookup: &L, config: &ImporterConfig) -> RowOutcome {
    if row.is_blank() {
        return RowOutcome::Skipped(SkipReason::Blank);
    }

    if config.is_summary_row(row.first_cell()) {
        debug!("Line [{}] skipped as a summary row: {}", row.line, row.first_cell());
        return RowOutcome::Skipped(SkipReason::Summary);
    }

    let address = row.cell(columns.address);
    let raw_price = row.cell(columns.price);

    if address.is_empty() || config.is_placeholder_price(raw_price) {
        debug!("Line [{}] skipped as incomplete", row.line);
        return RowOutcome::Skipped(SkipReason::Incomplete);
    }

    let line = row.line;
    let mut errors = Vec::new();

    let price = collect(parse_price(line, raw_price), &mut errors);
    let commission_rate = collect(
        parse_amount::<Percentage>(line, ImportField::CommissionRate, row.cell(columns.commission_rate)),
        &mut errors
    );
    let gross_commission = collect(parse_optional_currency(line, ImportField::GrossCommission, row, columns), &mut errors);
    let net_commission = collect(parse_optional_currency(line, ImportField::NetCommission, row, columns), &mut errors);
    let broker_commission = collect(parse_optional_currency(line, ImportField::BrokerCommission, row, columns), &mut errors);
    let side = collect(parse_side(line, row.cell(columns.side)), &mut errors);

    let (Some(price), Some(commission_rate), Some(gross_commission), Some(net_commission), Some(broker_commission), Some(side)) =
        (price, commission_rate, gross_commission, net_commission, broker_commission, side)
    else {
        return RowOutcome::Errored(errors);
    };

    let client_name = row.cell(columns.client_name);

    let Some(client_id) = lookup.resolve(client_name) else {
        return RowOutcome::Errored(vec![ImportError::client_not_found(line, client_name)]);
    };

    let closing_date = optional_text(row.cell(columns.closing_date));
    let status = if closing_date.is_some() { TransactionStatus::Closed } else { TransactionStatus::Pending };

    debug!("Line [{line}] resolved client [{client_name}] to [{client_id}]");

    RowOutcome::Included(ImportedTransaction {
        address: address.to_string(),
        client_name: client_name.to_string(),
        client_id,
        price,
        commission_rate,
        source: optional_text(row.cell(columns.source)),
        side,
        gross_commission,
        net_commission,
        broker_commission,
        closing_date,
        status
    })
}

fn collect<T>(result: Result<T, ImportError>, errors: &mut Vec<ImportError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

fn parse_amount<T: FromStr<Err = AmountError>>(line: RowNumber, field: ImportField, value: &str) -> Result<T, ImportError> {
    value.parse::<T>().map_err(|error| ImportError::invalid_number(line, field, value, &error))
}

fn parse_price(line: RowNumber, value: &str) -> Result<Currency, ImportError> {
    let price = parse_amount::<Currency>(line, ImportField::Price, value)?;

    if !price.is_positive() {
        return Err(ImportError::non_positive_price(line, value));
    }

    Ok(price)
}

fn parse_optional_currency(line: RowNumber, field: ImportField, row: &RawRow, columns: &ColumnMap) -> Result<Option<Currency>, ImportError> {
    let value = row.cell(columns.index(field));

    if value.is_empty() {
        return Ok(None);
    }

    parse_amount::<Currency>(line, field, value).map(Some)
}

fn parse_side(line: RowNumber, value: &str) -> Result<Option<Side>, ImportError> {
    if value.is_empty() {
        return Ok(None);
    }

    Side::from_label(value)
        .map(Some)
        .ok_or_else(|| ImportError::invalid_side(line, value))
}

fn optional_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
