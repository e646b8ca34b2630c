use serde_json::Value;

use cloudstocks_core::{MemoryReferenceStore, ReferenceStore};

use crate::error::CliError;

pub async fn run(store: &MemoryReferenceStore) -> Result<Value, CliError> {
    let catalog = store.list().await?;
    Ok(serde_json::to_value(catalog)?)
}
