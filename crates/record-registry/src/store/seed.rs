//! Seed records loaded into the store at startup.

use super::Record;
use crate::error::SeedError;
use std::path::Path;
use tracing::info;

/// The two records every fresh store starts with.
pub fn default_seed() -> Vec<Record> {
    vec![
        Record::new("alicea", "4422602875", "alexislicea@gmail.com", "123Abc+"),
        Record::new("rleon", "4422602873", "alexisleon@gmail.com", "123Abc+w"),
    ]
}

/// Load seed records from a JSON fixture holding an array of records.
///
/// Seed records are trusted and are not run through admission.
pub async fn load_seed(path: &Path) -> Result<Vec<Record>, SeedError> {
    let data = tokio::fs::read(path).await.map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Record> =
        serde_json::from_slice(&data).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), count = records.len(), "Loaded seed fixture");
    Ok(records)
}
