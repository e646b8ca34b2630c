use serde_json::Value;

use cloudstocks_core::{
    ChartResponse, MemoryReferenceStore, RangeCode, ReferenceStore, SeriesSynthesizer, Symbol,
    UtcDateTime,
};

use crate::cli::ChartArgs;
use crate::error::CliError;

pub async fn run(args: &ChartArgs, store: &MemoryReferenceStore) -> Result<Value, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let range = RangeCode::parse_or_default(Some(&args.range));

    let reference = store
        .get(&symbol)
        .await?
        .ok_or_else(|| CliError::Command(format!("stock symbol {symbol} not found")))?;

    let series = SeriesSynthesizer::default().synthesize(&reference, range, UtcDateTime::now())?;

    Ok(serde_json::to_value(ChartResponse::assemble(
        &reference, &series,
    ))?)
}
