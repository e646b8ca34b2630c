mod chart;
mod search;
mod stocks;

use serde_json::Value;

use cloudstocks_core::MemoryReferenceStore;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    // The CLI always works against the built-in sample catalog; remote
    // reference endpoints are a server concern.
    let store = MemoryReferenceStore::with_sample_catalog();

    match &cli.command {
        Command::Chart(args) => chart::run(args, &store).await,
        Command::Search(args) => search::run(args, &store).await,
        Command::Stocks => stocks::run(&store).await,
    }
}
