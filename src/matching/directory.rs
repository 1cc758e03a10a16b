use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{error, info};

use crate::importer::ImporterError;
use crate::models::Client;

const REQUIRED_COLUMNS: [&str; 2] = ["id", "name"];

/// Reads the known-client list from CSV with `id` and `name` columns.
///
/// Rows that fail to deserialize are logged and skipped; a header without
/// both columns fails the whole load.
pub fn load_clients<R: Read>(reader: R) -> Result<Vec<Client>, ImporterError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?;

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(ImporterError::MissingClientColumn { column });
        }
    }

    let mut clients = Vec::new();

    for result in reader.deserialize::<Client>() {
        match result {
            Ok(client) => clients.push(client),
            Err(error) => {
                error!("Client list deserialization error: {error}");
            }
        }
    }

    info!("Loaded {} known client(s)", clients.len());

    Ok(clients)
}

pub fn load_clients_from_path(path: impl AsRef<Path>) -> Result<Vec<Client>, ImporterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImporterError::read(path, source))?;

    load_clients(BufReader::new(file))
}
