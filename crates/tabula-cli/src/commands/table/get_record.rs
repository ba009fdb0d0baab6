//! Get record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use tabula_core::DynamicRecord;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct GetRecordArgs {
    /// Table name or id
    pub table: String,

    /// Record id
    pub id: String,
}

pub async fn run(args: GetRecordArgs) -> Result<()> {
    let client = config::open_client()?;
    let table = client.table(&args.table).context("Invalid table name")?;

    let record: DynamicRecord = table
        .get(&args.id)
        .await
        .context("Failed to get record")?;

    output::record(&record, output::Format::Pretty)?;

    Ok(())
}
