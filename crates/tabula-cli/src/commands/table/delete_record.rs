//! Delete record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use tabula_core::DynamicRecord;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteRecordArgs {
    /// Table name or id
    pub table: String,

    /// Record id
    pub id: String,
}

pub async fn run(args: DeleteRecordArgs) -> Result<()> {
    let client = config::open_client()?;
    let table = client.table(&args.table).context("Invalid table name")?;

    let record = DynamicRecord {
        id: args.id,
        ..Default::default()
    };
    table
        .delete(&record)
        .await
        .context("Failed to delete record")?;

    output::success(&format!("Deleted record: {}", record.id));

    Ok(())
}
