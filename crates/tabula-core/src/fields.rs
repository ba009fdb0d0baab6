//! Ad hoc field application.
//!
//! [`Fields`] is an open name to value mapping used to fill a typed record
//! without spelling out its payload struct. Application walks the supplied
//! data rather than the record's schema, so a misspelled or unknown key is
//! reported instead of silently ignored.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::record::{Record, type_label};

/// An open mapping from field name to a dynamically typed value.
pub type Fields = Map<String, Value>;

/// Returns the JSON kind name of a value.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Applies `data` to the payload of `record`, returning schema errors.
///
/// Each supplied name must be a member of the payload, and the supplied value
/// must have the same JSON kind as the current one. A member that currently
/// serializes as `null`, or is skipped while serializing (an unset optional),
/// accepts any kind the payload type can decode. On error the record is left
/// unchanged.
pub fn try_apply_fields<R: Record>(record: &mut R, data: &Fields) -> Result<(), SchemaError> {
    let label = type_label::<R::Fields>();

    let mut shape = match serde_json::to_value(record.fields()) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(SchemaError::mismatch(label, "fields", "object", kind_of(&other)));
        }
        Err(e) => return Err(SchemaError::mismatch(label, "fields", "object", e.to_string())),
    };

    for (name, value) in data {
        if !shape.contains_key(name) {
            // Members skipped while serializing are absent from the shape.
            check_skipped_member::<R::Fields>(&shape, name, value, label)?;
            shape.insert(name.clone(), value.clone());
            continue;
        }

        if let Some(current) = shape.get_mut(name) {
            let expected = kind_of(current);
            let found = kind_of(value);
            if expected != "null" && expected != found {
                return Err(SchemaError::mismatch(label, name.as_str(), expected, found));
            }
            *current = value.clone();
        }
    }

    let updated = serde_json::from_value(Value::Object(shape))
        .map_err(|e| SchemaError::mismatch(label, "fields", label, e.to_string()))?;
    *record.fields_mut() = updated;

    Ok(())
}

/// Checks that `name` is a member of `F` that serialization skipped.
///
/// serde drops unknown keys while decoding, so the name is a member only if
/// it survives a decode and re-serialize with the value in place. A `null`
/// value cannot be told apart from an unknown key this way.
fn check_skipped_member<F>(
    shape: &Fields,
    name: &str,
    value: &Value,
    label: &str,
) -> Result<(), SchemaError>
where
    F: Serialize + DeserializeOwned,
{
    let mut candidate = shape.clone();
    candidate.insert(name.to_string(), value.clone());

    let decoded: F = match serde_json::from_value(Value::Object(candidate)) {
        Ok(decoded) => decoded,
        // `deny_unknown_fields` payloads reject the name outright.
        Err(e) if e.to_string().starts_with("unknown field") => {
            return Err(SchemaError::missing(label, name));
        }
        Err(e) => return Err(SchemaError::mismatch(label, name, label, e.to_string())),
    };

    match serde_json::to_value(&decoded) {
        Ok(Value::Object(map)) if map.contains_key(name) => Ok(()),
        _ => Err(SchemaError::missing(label, name)),
    }
}

/// Applies `data` to the payload of `record`.
///
/// # Panics
///
/// Panics if a supplied name has no matching member, or if a supplied value
/// has a different kind than the member it targets. A mismatch here is a
/// programming error in the caller's schema, not a runtime condition.
pub fn apply_fields<R: Record>(record: &mut R, data: &Fields) {
    if let Err(e) = try_apply_fields(record, data) {
        panic!("{e}");
    }
}

/// Builds a default record and applies `data` to it.
///
/// # Panics
///
/// Panics under the same conditions as [`apply_fields`].
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
/// use tabula_core::{TableRecord, new_record};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Task {
///     #[serde(rename = "Name")]
///     name: String,
/// }
///
/// let data = json!({"Name": "plan sprint"}).as_object().unwrap().clone();
/// let record: TableRecord<Task> = new_record(&data);
/// assert_eq!(record.fields.name, "plan sprint");
/// ```
pub fn new_record<R: Record + Default>(data: &Fields) -> R {
    let mut record = R::default();
    apply_fields(&mut record, data);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TableRecord;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Contact {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Age")]
        age: u32,
        #[serde(rename = "Tags")]
        tags: Vec<String>,
        #[serde(rename = "Notes")]
        notes: Option<String>,
    }

    fn data(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn applies_matching_fields() {
        let mut record = TableRecord::<Contact>::default();
        try_apply_fields(
            &mut record,
            &data(json!({"Name": "Ada", "Age": 36, "Tags": ["math"]})),
        )
        .unwrap();

        assert_eq!(record.fields.name, "Ada");
        assert_eq!(record.fields.age, 36);
        assert_eq!(record.fields.tags, vec!["math".to_string()]);
        assert_eq!(record.fields.notes, None);
    }

    #[test]
    fn unset_optional_accepts_value() {
        let mut record = TableRecord::<Contact>::default();
        try_apply_fields(&mut record, &data(json!({"Notes": "met at PyCon"}))).unwrap();
        assert_eq!(record.fields.notes.as_deref(), Some("met at PyCon"));
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Lead {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    }

    #[test]
    fn skipped_optional_accepts_value() {
        let mut record = TableRecord::<Lead>::default();
        try_apply_fields(&mut record, &data(json!({"Email": "ada@example.com"}))).unwrap();
        assert_eq!(record.fields.email.as_deref(), Some("ada@example.com"));

        let record: TableRecord<Lead> = new_record(&data(json!({"Name": "Ada", "Email": "a@b.c"})));
        assert_eq!(record.fields.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn skipped_optional_rejects_undecodable_value() {
        let mut record = TableRecord::<Lead>::default();
        let err = try_apply_fields(&mut record, &data(json!({"Email": 42}))).unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { ref member, .. } if member == "Email"));
        assert_eq!(record.fields.email, None);
    }

    #[test]
    fn unknown_key_next_to_skipped_optional_is_missing() {
        let mut record = TableRecord::<Lead>::default();
        let err = try_apply_fields(&mut record, &data(json!({"Phone": "555"}))).unwrap_err();
        assert_eq!(err.to_string(), "cannot find field Lead.Phone");
    }

    #[test]
    fn unknown_key_is_missing_member() {
        let mut record = TableRecord::<Contact>::default();
        let err = try_apply_fields(&mut record, &data(json!({"Nmae": "Ada"}))).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingMember {
                record: "Contact".to_string(),
                member: "Nmae".to_string(),
            }
        );
    }

    #[test]
    fn kind_mismatch_is_type_mismatch() {
        let mut record = TableRecord::<Contact>::default();
        let err = try_apply_fields(&mut record, &data(json!({"Age": "thirty"}))).unwrap_err();
        assert_eq!(err.to_string(), "type error setting Contact.Age: number != string");
    }

    #[test]
    fn failed_application_leaves_record_untouched() {
        let mut record = TableRecord::<Contact>::default();
        record.fields.name = "Grace".to_string();

        let result = try_apply_fields(&mut record, &data(json!({"Name": "Ada", "Bogus": 1})));
        assert!(result.is_err());
        assert_eq!(record.fields.name, "Grace");
    }

    #[test]
    fn out_of_range_number_is_type_mismatch() {
        let mut record = TableRecord::<Contact>::default();
        let err = try_apply_fields(&mut record, &data(json!({"Age": -4}))).unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { .. }));
    }

    #[test]
    #[should_panic(expected = "cannot find field Contact.Email")]
    fn apply_panics_on_unknown_key() {
        let mut record = TableRecord::<Contact>::default();
        apply_fields(&mut record, &data(json!({"Email": "ada@example.com"})));
    }

    #[test]
    #[should_panic(expected = "type error setting Contact.Tags: array != string")]
    fn apply_panics_on_kind_mismatch() {
        let mut record = TableRecord::<Contact>::default();
        apply_fields(&mut record, &data(json!({"Tags": "math"})));
    }

    #[test]
    fn new_record_builds_default_and_applies() {
        let record: TableRecord<Contact> = new_record(&data(json!({"Name": "Lin", "Age": 7})));
        assert!(record.id.is_empty());
        assert_eq!(record.fields.name, "Lin");
        assert_eq!(record.fields.age, 7);
    }

    #[test]
    fn kind_names() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(1.5)), "number");
        assert_eq!(kind_of(&json!({})), "object");
    }
}
