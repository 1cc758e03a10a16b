mod client_index;
mod directory;

use crate::types::ClientId;

pub use client_index::{normalize_name, ClientIndex};
pub use directory::{load_clients, load_clients_from_path};

/// Resolves a free-text client name from an export to a known client.
pub trait ClientLookup {
    fn resolve(&self, name: &str) -> Option<ClientId>;
}
