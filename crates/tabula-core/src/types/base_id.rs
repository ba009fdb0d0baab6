//! Base identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated base identifier.
///
/// A base owns a set of tables; its identifier becomes one path segment of
/// every endpoint, so it may not be empty or contain separators.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseId(String);

impl BaseId {
    /// Create a new base id, validating the format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the base id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            Some("base id cannot be empty")
        } else if s.contains('/') || s.contains('?') || s.contains('#') {
            Some("base id cannot contain '/', '?' or '#'")
        } else if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some("base id must be ASCII alphanumeric")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidInputError::BaseId {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for BaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BaseId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BaseId> for String {
    fn from(base: BaseId) -> Self {
        base.0
    }
}
