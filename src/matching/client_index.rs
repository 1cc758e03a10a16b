use tracing::debug;

use crate::matching::ClientLookup;
use crate::models::Client;
use crate::types::ClientId;

/// Lowercased, trimmed form used on both sides of a name comparison.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Known clients with their names normalized once per import run.
///
/// Resolution is a fuzzy match: a client matches when its normalized name
/// contains the search term or the search term contains it. Entries keep the
/// order of the source list and the first match wins, so an ambiguous name
/// resolves to whichever client was listed first. Each lookup is a linear scan.
#[derive(Debug, Clone, Default)]
pub struct ClientIndex {
    entries: Vec<(String, ClientId)>
}

impl ClientIndex {
    pub fn new(clients: &[Client]) -> Self {
        let entries = clients
            .iter()
            .filter_map(|client| {
                let key = normalize_name(&client.name);

                // An empty name would be contained in every search term.
                if key.is_empty() {
                    debug!("Client [{}] has no name and will never be matched", client.id);
                    return None;
                }

                Some((key, client.id.clone()))
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ClientLookup for ClientIndex {
    fn resolve(&self, name: &str) -> Option<ClientId> {
        let term = normalize_name(name);

        if term.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(key, _)| key.contains(term.as_str()) || term.contains(key.as_str()))
            .map(|(_, client_id)| client_id.clone())
    }
}
