//! Table operations.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::record::{Record, fields_body, overlay_response, record_id};
use crate::transport::{Method, Transport};
use crate::error::InvalidInputError;
use crate::types::{TableName, escape_segment, is_dot_segment};
use crate::{Error, Result};

/// Response from a delete request.
#[derive(Debug, Deserialize)]
struct DeleteResponse {
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    id: String,
}

/// A handle for CRUD operations on one table.
///
/// # Example
///
/// ```no_run
/// # use tabula_core::{Client, TableRecord, Transport, Fields};
/// # async fn example<T: Transport>(client: Client<T>) -> tabula_core::Result<()> {
/// let table = client.table("Tasks")?;
///
/// let mut record = TableRecord::new(Fields::new());
/// record.fields.insert("Name".into(), "write docs".into());
/// table.create(&mut record).await?;
///
/// let fetched: TableRecord<Fields> = table.get(&record.id).await?;
/// table.delete(&fetched).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Table<T> {
    pub(crate) name: TableName,
    pub(crate) transport: Arc<T>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Table<T> {
    pub(crate) fn new(name: TableName, transport: Arc<T>) -> Self {
        Self { name, transport }
    }

    /// Returns the table name.
    pub fn name(&self) -> &TableName {
        &self.name
    }

    /// Returns the escaped request path for a record id.
    ///
    /// An empty id yields the table path itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is `.` or `..`, which would address the
    /// table or base instead of a record.
    pub fn path(&self, id: &str) -> Result<String> {
        let table = self.name.escaped();
        if id.is_empty() {
            return Ok(table);
        }
        if is_dot_segment(id) {
            return Err(InvalidInputError::RecordId {
                value: id.to_string(),
                reason: "record id cannot be a relative path segment".to_string(),
            }
            .into());
        }
        Ok(format!("{}/{}", table, escape_segment(id)))
    }

    /// Fetch a single record by id.
    ///
    /// Payload members missing from the response must have a serde default.
    #[instrument(skip(self), fields(table = %self.name))]
    pub async fn get<R: Record>(&self, id: &str) -> Result<R> {
        debug!(id, "Getting record");

        let body = self
            .transport
            .request(Method::Get, &self.path(id)?, None)
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Create a record, filling in its server-assigned members.
    ///
    /// The response is decoded over the record, so payload members the
    /// server leaves out keep the values that were sent.
    #[instrument(skip(self, record), fields(table = %self.name))]
    pub async fn create<R: Record>(&self, record: &mut R) -> Result<()> {
        let body = fields_body(record)?;
        debug!("Creating record");

        let response = self
            .transport
            .request_with_body(Method::Post, &self.path("")?, None, body)
            .await?;

        *record = overlay_response(record, &response)?;
        debug!(id = record.id(), "Created record");
        Ok(())
    }

    /// Update the fields of a stored record.
    ///
    /// Only the members present in the serialized payload are sent; fields
    /// not mentioned keep their server-side values.
    #[instrument(skip(self, record), fields(table = %self.name))]
    pub async fn update<R: Record>(&self, record: &R) -> Result<()> {
        let id = record_id(record)?;
        let body = fields_body(record)?;
        debug!(id, "Updating record");

        self.transport
            .request_with_body(Method::Patch, &self.path(id)?, None, body)
            .await?;

        Ok(())
    }

    /// Delete a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDeleted`] if the server answers without confirming
    /// the deletion.
    #[instrument(skip(self, record), fields(table = %self.name))]
    pub async fn delete<R: Record>(&self, record: &R) -> Result<()> {
        let id = record_id(record)?;
        debug!(id, "Deleting record");

        let response = self
            .transport
            .request(Method::Delete, &self.path(id)?, None)
            .await?;

        let deleted: DeleteResponse = serde_json::from_slice(&response)?;
        if !deleted.deleted {
            return Err(Error::NotDeleted {
                id: id.to_string(),
                response: String::from_utf8_lossy(&response).into_owned(),
            });
        }

        debug!(id = %deleted.id, "Deleted record");
        Ok(())
    }
}
