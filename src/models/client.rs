use serde::Deserialize;

use crate::types::ClientId;

/// A client record already known to the CRM, as fetched before an import starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String
}

impl Client {
    pub fn new(id: impl Into<ClientId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into()
        }
    }
}
