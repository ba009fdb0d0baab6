//! Table name type and path segment escaping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated table name (or table id).
///
/// Any printable name is accepted; it is percent-escaped as a single path
/// segment when an endpoint path is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    /// Create a new table name, validating the format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the unescaped table name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the table name escaped for use as a URL path segment.
    pub fn escaped(&self) -> String {
        escape_segment(&self.0)
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.trim().is_empty() {
            Some("table name cannot be empty")
        } else if is_dot_segment(s) {
            Some("table name cannot be a relative path segment")
        } else if s.chars().any(char::is_control) {
            Some("table name cannot contain control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidInputError::TableName {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

/// Returns true for `.` and `..`, which URL normalization removes.
pub(crate) fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Percent-escape `segment` so it stays a single URL path segment.
///
/// Dot segments cannot be escaped (`%2E%2E` normalizes to `..`); callers
/// reject them with [`is_dot_segment`] first.
pub(crate) fn escape_segment(segment: &str) -> String {
    let mut url = Url::parse("segment:/").expect("static URL is valid");
    url.path_segments_mut()
        .expect("static URL has a hierarchical path")
        .push(segment);
    url.path().trim_start_matches('/').to_string()
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TableName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TableName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_unchanged() {
        let name = TableName::new("Tasks").unwrap();
        assert_eq!(name.escaped(), "Tasks");
    }

    #[test]
    fn spaces_and_slashes_are_escaped() {
        let name = TableName::new("Q1 / Q2 plans").unwrap();
        assert_eq!(name.escaped(), "Q1%20%2F%20Q2%20plans");
    }

    #[test]
    fn query_characters_are_escaped() {
        assert_eq!(escape_segment("what?#"), "what%3F%23");
        assert_eq!(escape_segment("100%"), "100%25");
    }

    #[test]
    fn only_bare_dots_are_dot_segments() {
        assert!(is_dot_segment("."));
        assert!(is_dot_segment(".."));
        assert!(!is_dot_segment("..."));
        assert!(!is_dot_segment("v1.2"));
        assert_eq!(escape_segment("..."), "...");
    }

    #[test]
    fn unicode_is_percent_encoded() {
        assert_eq!(escape_segment("café"), "caf%C3%A9");
    }

    #[test]
    fn invalid_names() {
        assert!(TableName::new("").is_err());
        assert!(TableName::new("   ").is_err());
        assert!(TableName::new("..").is_err());
        assert!(TableName::new("a\nb").is_err());
    }
}
