//! tabula-core - Record mapping and pagination for table REST APIs.
//!
//! Records are caller-defined types implementing [`Record`]. A [`Table`]
//! maps them to and from the wire shape `{"id", "createdTime", "fields"}`
//! over any [`Transport`], and [`Table::list`] follows pagination offsets
//! until the server reports the last page.
//!
//! # Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use tabula_core::{Client, ListOptions, TableRecord, Transport};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct Task {
//!     #[serde(rename = "Name")]
//!     name: String,
//! }
//!
//! # async fn example<T: Transport>(client: Client<T>) -> tabula_core::Result<()> {
//! let tasks = client.table("Tasks")?;
//!
//! let mut all: Vec<TableRecord<Task>> = Vec::new();
//! tasks.list(&mut all, Some(ListOptions::new().view("Grid view"))).await?;
//!
//! for task in &all {
//!     println!("{}: {}", task.id, task.fields.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod fields;
pub mod options;
pub mod pagination;
pub mod record;
pub mod table;
pub mod transport;
pub mod types;

pub use client::Client;
pub use error::{ApiError, Error, InvalidInputError, SchemaError, TransportError};
pub use fields::{Fields, apply_fields, new_record, try_apply_fields};
pub use options::{Direction, ListOptions, Sort};
pub use pagination::ListPage;
pub use record::{DynamicRecord, Record, TableRecord, fields_body, fields_payload, record_id};
pub use table::Table;
pub use transport::{Method, Transport};
pub use types::{ApiUrl, BaseId, TableName};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
