//! Record types and the record reflector.
//!
//! Every record type exposes its identifier and its `fields` payload through
//! the [`Record`] trait. The helpers in this module extract and validate
//! those members before they are put on the wire.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::error::SchemaError;
use crate::fields::{Fields, kind_of};

/// A record that can be stored in a table.
///
/// Implementors serialize and deserialize with the server shape
/// `{"id": ..., "createdTime": ..., "fields": {...}}`.
///
/// The server leaves empty and `false` fields out of its responses. Payload
/// types read through [`Table::get`](crate::Table::get) or
/// [`Table::list`](crate::Table::list) should carry `#[serde(default)]` so
/// those records still decode.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// The caller-defined payload, matching the table's field schema.
    type Fields: Serialize + DeserializeOwned + Send + Sync;

    /// The server-assigned identifier; empty before creation.
    fn id(&self) -> &str;

    /// The record payload.
    fn fields(&self) -> &Self::Fields;

    /// Mutable access to the record payload.
    fn fields_mut(&mut self) -> &mut Self::Fields;
}

/// A record with a typed `fields` payload.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tabula_core::TableRecord;
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// #[serde(default)]
/// struct Task {
///     #[serde(rename = "Name")]
///     name: String,
/// }
///
/// let record = TableRecord::new(Task { name: "write docs".into() });
/// assert!(record.id.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord<F> {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Server-assigned creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,

    /// The record payload.
    #[serde(default)]
    pub fields: F,
}

impl<F> TableRecord<F> {
    /// Create a record that has not been stored yet.
    pub fn new(fields: F) -> Self {
        Self {
            id: String::new(),
            created_time: None,
            fields,
        }
    }
}

impl<F> Record for TableRecord<F>
where
    F: Serialize + DeserializeOwned + Default + Send + Sync,
{
    type Fields = F;

    fn id(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> &F {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }
}

/// A record without a predeclared schema.
pub type DynamicRecord = TableRecord<Fields>;

/// Request body for create and update.
#[derive(Debug, Serialize)]
struct FieldsEnvelope<'a> {
    fields: &'a Value,
}

/// Short type name used in schema error messages.
pub(crate) fn type_label<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    head.rsplit("::").next().unwrap_or(head)
}

/// Returns the identifier of a stored record.
///
/// # Errors
///
/// Returns [`SchemaError::MissingMember`] if the identifier is empty.
pub fn record_id<R: Record>(record: &R) -> std::result::Result<&str, SchemaError> {
    let id = record.id();
    if id.is_empty() {
        return Err(SchemaError::missing(type_label::<R>(), "id"));
    }
    Ok(id)
}

/// Serializes the `fields` payload of a record.
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] if the payload is not a JSON object,
/// or a codec error if serialization fails.
pub fn fields_payload<R: Record>(record: &R) -> Result<Value> {
    let value = serde_json::to_value(record.fields())?;
    if !value.is_object() {
        return Err(
            SchemaError::mismatch(type_label::<R>(), "fields", "object", kind_of(&value)).into(),
        );
    }
    Ok(value)
}

/// Decodes a server response over the current value of `record`.
///
/// Top-level members of the response replace those of the record, and the
/// members of its `fields` object are merged into the record's payload.
/// Payload members the response leaves out keep their current values.
pub(crate) fn overlay_response<R: Record>(record: &R, body: &[u8]) -> Result<R> {
    let response: Value = serde_json::from_slice(body)?;
    let merged = match (serde_json::to_value(record)?, response) {
        (Value::Object(mut current), Value::Object(mut response)) => {
            match (current.get_mut("fields"), response.remove("fields")) {
                (Some(Value::Object(fields)), Some(Value::Object(members))) => {
                    fields.extend(members);
                }
                (_, Some(other)) => {
                    current.insert("fields".to_string(), other);
                }
                (_, None) => {}
            }
            current.extend(response);
            Value::Object(current)
        }
        (_, response) => response,
    };
    Ok(serde_json::from_value(merged)?)
}

/// Builds the `{"fields": ...}` request body for a record.
pub fn fields_body<R: Record>(record: &R) -> Result<Vec<u8>> {
    let fields = fields_payload(record)?;
    Ok(serde_json::to_vec(&FieldsEnvelope { fields: &fields })?)
}
