use crate::models::ImportField;
use crate::parser::RawRow;

const HEADER_MARKER: &str = "address";

/// Column positions of the logical transaction fields, inferred from header text.
///
/// Spreadsheet exports word their headers differently ("COMM %", "Gross Comm.",
/// "Net Comm$"), so each field is matched by substring on the lowercased
/// header and takes the first column that satisfies its predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub address: Option<usize>,
    pub client_name: Option<usize>,
    pub source: Option<usize>,
    pub side: Option<usize>,
    pub price: Option<usize>,
    pub commission_rate: Option<usize>,
    pub gross_commission: Option<usize>,
    pub net_commission: Option<usize>,
    pub broker_commission: Option<usize>,
    pub closing_date: Option<usize>
}

impl ColumnMap {
    pub fn infer<S: AsRef<str>>(headers: &[S]) -> Self {
        let headers: Vec<String> = headers.iter().map(|header| header.as_ref().trim().to_lowercase()).collect();

        let find = |predicate: fn(&str) -> bool| headers.iter().position(|header| predicate(header.as_str()));

        Self {
            address: find(|header| header.contains("address")),
            client_name: find(|header| header.contains("name")),
            source: find(|header| header.contains("source")),
            side: find(|header| header == "s" || header.contains("side")),
            price: find(|header| header.contains("price")),
            commission_rate: find(|header| header.contains("comm") && header.contains('%')),
            gross_commission: find(|header| header.contains("gross") && header.contains("comm")),
            net_commission: find(|header| header.contains("net") && header.contains("comm")),
            broker_commission: find(|header| header.contains("broker")),
            closing_date: find(|header| header.contains("closing") || header.contains("date"))
        }
    }

    /// Column index for a row-level field; `None` when unmapped or not a row-level field.
    pub fn index(&self, field: ImportField) -> Option<usize> {
        match field {
            ImportField::Address => self.address,
            ImportField::ClientName => self.client_name,
            ImportField::Source => self.source,
            ImportField::Side => self.side,
            ImportField::Price => self.price,
            ImportField::CommissionRate => self.commission_rate,
            ImportField::GrossCommission => self.gross_commission,
            ImportField::NetCommission => self.net_commission,
            ImportField::BrokerCommission => self.broker_commission,
            ImportField::ClosingDate => self.closing_date,
            ImportField::File | ImportField::Headers | ImportField::General => None
        }
    }
}

/// A header row is the first row with a cell mentioning an address.
pub fn is_header_row(row: &RawRow) -> bool {
    row.cells.iter().any(|cell| cell.to_lowercase().contains(HEADER_MARKER))
}
