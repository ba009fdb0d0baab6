//! Update record command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use tabula_core::DynamicRecord;

use super::FieldInput;
use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateRecordArgs {
    /// Table name or id
    pub table: String,

    /// Record id
    pub id: String,

    #[command(flatten)]
    pub fields: FieldInput,
}

pub async fn run(args: UpdateRecordArgs) -> Result<()> {
    let fields = args.fields.read()?;
    if fields.is_empty() {
        bail!("Nothing to update: pass --json or --set");
    }

    let client = config::open_client()?;
    let table = client.table(&args.table).context("Invalid table name")?;

    let record = DynamicRecord {
        id: args.id,
        ..DynamicRecord::new(fields)
    };
    table
        .update(&record)
        .await
        .context("Failed to update record")?;

    output::success(&format!("Updated record: {}", record.id));

    Ok(())
}
