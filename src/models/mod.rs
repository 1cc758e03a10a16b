mod client;
mod errors;
mod result;
mod transaction;

use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use client::Client;
pub use errors::ImportError;
pub use result::ImportResult;
pub use transaction::ImportedTransaction;

/// Logical field an import error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportField {
    File,
    Headers,
    General,
    Address,
    ClientName,
    Source,
    Side,
    Price,
    CommissionRate,
    GrossCommission,
    NetCommission,
    BrokerCommission,
    ClosingDate
}

impl ImportField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportField::File => "file",
            ImportField::Headers => "headers",
            ImportField::General => "general",
            ImportField::Address => "address",
            ImportField::ClientName => "client_name",
            ImportField::Source => "source",
            ImportField::Side => "side",
            ImportField::Price => "price",
            ImportField::CommissionRate => "commission_rate",
            ImportField::GrossCommission => "gross_commission",
            ImportField::NetCommission => "net_commission",
            ImportField::BrokerCommission => "broker_commission",
            ImportField::ClosingDate => "closing_date"
        }
    }
}

impl Display for ImportField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Seller,
    Buyer,
    Both
}

impl Side {
    pub fn from_label(label: &str) -> Option<Side> {
        match label.trim().to_lowercase().as_str() {
            "seller" => Some(Side::Seller),
            "buyer" => Some(Side::Buyer),
            "both" => Some(Side::Both),
            _ => None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Closed
}
