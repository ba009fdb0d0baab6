//! Create record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use tabula_core::DynamicRecord;

use super::FieldInput;
use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateRecordArgs {
    /// Table name or id
    pub table: String,

    #[command(flatten)]
    pub fields: FieldInput,
}

pub async fn run(args: CreateRecordArgs) -> Result<()> {
    let fields = args.fields.read()?;

    let client = config::open_client()?;
    let table = client.table(&args.table).context("Invalid table name")?;

    let mut record = DynamicRecord::new(fields);
    table
        .create(&mut record)
        .await
        .context("Failed to create record")?;

    output::created(&record);

    Ok(())
}
