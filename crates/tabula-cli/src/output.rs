//! Output formatting.
//!
//! Records go to stdout as JSON so they can be piped; status lines and hints
//! go to stderr.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use tabula_core::DynamicRecord;

/// How records are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One JSON document per line.
    Lines,
    /// Indented JSON documents.
    Pretty,
}

impl Format {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { Format::Pretty } else { Format::Lines }
    }
}

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a single record.
pub fn record(record: &DynamicRecord, format: Format) -> Result<()> {
    write_value(&mut io::stdout().lock(), record, format)
}

/// Print a list of records followed by the pagination hint, if any.
pub fn records(records: &[DynamicRecord], next_offset: Option<&str>, format: Format) -> Result<()> {
    if records.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
    }

    write_records(&mut io::stdout().lock(), records, format)?;

    if let Some(offset) = next_offset {
        eprintln!();
        eprintln!("{}: {}", "Next offset".dimmed(), offset);
        eprintln!("{}", "Pass --offset to continue, or --all to fetch every page.".dimmed());
    }

    Ok(())
}

/// Print the id of a newly created record.
///
/// The bare id goes to stdout for scripting; the confirmation to stderr.
pub fn created(record: &DynamicRecord) {
    println!("{}", record.id);
    success(&format!("Created record: {}", record.id));
}

fn write_records<W: Write>(out: &mut W, records: &[DynamicRecord], format: Format) -> Result<()> {
    for record in records {
        write_value(out, record, format)?;
    }
    Ok(())
}

fn write_value<W: Write, T: Serialize>(out: &mut W, value: &T, format: Format) -> Result<()> {
    match format {
        Format::Lines => serde_json::to_writer(&mut *out, value)?,
        Format::Pretty => serde_json::to_writer_pretty(&mut *out, value)?,
    }
    writeln!(out)?;
    Ok(())
}
