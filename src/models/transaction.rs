use serde::Serialize;

use crate::models::{Side, TransactionStatus};
use crate::types::{ClientId, Currency, Percentage};

/// A validated spreadsheet row, ready to be submitted as a new CRM transaction.
///
/// Only rows whose price parsed to a positive amount and whose client name
/// resolved to a known client become an `ImportedTransaction`. Commission
/// breakdown columns are optional in the source export and stay `None` when
/// the cell is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedTransaction {
    pub address: String,
    pub client_name: String,
    pub client_id: ClientId,
    pub price: Currency,
    pub commission_rate: Percentage,
    pub source: Option<String>,
    pub side: Option<Side>,
    pub gross_commission: Option<Currency>,
    pub net_commission: Option<Currency>,
    pub broker_commission: Option<Currency>,
    pub closing_date: Option<String>,
    pub status: TransactionStatus
}
