use serde_json::Value;

use cloudstocks_core::{MemoryReferenceStore, ReferenceStore};

use crate::cli::SearchArgs;
use crate::error::CliError;

pub async fn run(args: &SearchArgs, store: &MemoryReferenceStore) -> Result<Value, CliError> {
    if args.limit == 0 {
        return Err(CliError::Command(String::from(
            "--limit must be greater than zero",
        )));
    }

    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::Command(String::from("query must not be empty")));
    }

    let matches = store.search(query, args.limit).await?;
    Ok(serde_json::to_value(matches)?)
}
