//! Table subcommand implementations.

mod create_record;
mod delete_record;
mod get_record;
mod list_records;
mod update_record;

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use serde_json::Value;

use tabula_core::Fields;

#[derive(Args, Debug)]
pub struct TableCommand {
    #[command(subcommand)]
    pub command: TableSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TableSubcommand {
    /// Fetch a single record
    GetRecord(get_record::GetRecordArgs),

    /// Create a new record
    CreateRecord(create_record::CreateRecordArgs),

    /// Update fields of an existing record
    UpdateRecord(update_record::UpdateRecordArgs),

    /// Delete a record
    DeleteRecord(delete_record::DeleteRecordArgs),

    /// List records in a table
    ListRecords(list_records::ListRecordsArgs),
}

pub async fn handle(cmd: TableCommand) -> Result<()> {
    match cmd.command {
        TableSubcommand::GetRecord(args) => get_record::run(args).await,
        TableSubcommand::CreateRecord(args) => create_record::run(args).await,
        TableSubcommand::UpdateRecord(args) => update_record::run(args).await,
        TableSubcommand::DeleteRecord(args) => delete_record::run(args).await,
        TableSubcommand::ListRecords(args) => list_records::run(args).await,
    }
}

/// Field input shared by create and update.
#[derive(Args, Debug)]
pub struct FieldInput {
    /// JSON file with the fields object (use - for stdin)
    #[arg(long)]
    pub json: Option<String>,

    /// Set a single field (NAME=VALUE, VALUE parsed as JSON when possible)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

impl FieldInput {
    /// Collect the fields from the JSON input and `--set` pairs.
    pub fn read(&self) -> Result<Fields> {
        let mut fields = match self.json.as_deref() {
            Some(path) => {
                let content = if path == "-" {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read from stdin")?;
                    buf
                } else {
                    std::fs::read_to_string(path).context("Failed to read JSON file")?
                };
                match serde_json::from_str::<Value>(&content).context("Invalid JSON input")? {
                    Value::Object(map) => map,
                    _ => bail!("JSON input must be an object of fields"),
                }
            }
            None => Fields::new(),
        };

        for pair in &self.set {
            let (name, value) = parse_assignment(pair)?;
            fields.insert(name, value);
        }

        Ok(fields)
    }
}

/// Parse `NAME=VALUE`; VALUE is JSON if it parses, a string otherwise.
fn parse_assignment(pair: &str) -> Result<(String, Value)> {
    let (name, raw) = pair
        .split_once('=')
        .with_context(|| format!("Expected NAME=VALUE, got '{pair}'"))?;
    if name.is_empty() {
        bail!("Field name cannot be empty in '{pair}'");
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.to_string(), value))
}
