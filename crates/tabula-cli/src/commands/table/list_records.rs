//! List records command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use tabula_core::{Direction, DynamicRecord, ListOptions};

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct ListRecordsArgs {
    /// Table name or id
    pub table: String,

    /// View to read from
    #[arg(long)]
    pub view: Option<String>,

    /// Only return records matching this formula
    #[arg(long)]
    pub formula: Option<String>,

    /// Sort by field; prefix with '-' for descending (repeatable)
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Vec<String>,

    /// Only return this field (repeatable)
    #[arg(long = "field")]
    pub fields: Vec<String>,

    /// Records per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Maximum number of records across all pages
    #[arg(long)]
    pub max_records: Option<u32>,

    /// Pagination offset to start from
    #[arg(long, conflicts_with = "all")]
    pub offset: Option<String>,

    /// Follow offsets until the last page
    #[arg(long)]
    pub all: bool,

    /// Follow offsets for at most this many pages
    #[arg(long, conflicts_with = "all")]
    pub max_pages: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ListRecordsArgs {
    fn options(&self) -> Result<ListOptions> {
        let mut options = ListOptions::new();
        options.fields = self.fields.clone();
        options.filter_by_formula = self.formula.clone();
        options.max_records = self.max_records;
        options.page_size = self.page_size;
        options.view = self.view.clone();

        for key in &self.sort {
            let (field, direction) = parse_sort(key)?;
            options = options.sort(field, direction);
        }

        Ok(options)
    }
}

fn parse_sort(key: &str) -> Result<(&str, Direction)> {
    let (field, direction) = match key.strip_prefix('-') {
        Some(field) => (field, Direction::Desc),
        None => (key, Direction::Asc),
    };
    if field.is_empty() {
        bail!("Sort field cannot be empty");
    }
    Ok((field, direction))
}

pub async fn run(args: ListRecordsArgs) -> Result<()> {
    let options = args.options()?;

    let client = config::open_client()?;
    let table = client.table(&args.table).context("Invalid table name")?;

    let mut records: Vec<DynamicRecord> = Vec::new();
    let mut next_offset: Option<String> = None;

    if args.all {
        table
            .list(&mut records, Some(options))
            .await
            .context("Failed to list records")?;
    } else {
        let max_pages = args.max_pages.unwrap_or(1).max(1);
        let mut offset = args.offset.clone();

        for _ in 0..max_pages {
            let page = table
                .list_page::<DynamicRecord>(&options, offset.as_deref())
                .await
                .context("Failed to list records")?;

            offset = page.next_offset().map(str::to_string);
            records.extend(page.records);

            if offset.is_none() {
                break;
            }
        }

        next_offset = offset;
    }

    output::records(
        &records,
        next_offset.as_deref(),
        output::Format::from_pretty(args.pretty),
    )?;

    Ok(())
}
