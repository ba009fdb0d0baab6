//! List options.

use serde::{Deserialize, Serialize};

/// Sort direction for a list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// One sort key of a list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub direction: Direction,
}

/// Filtering and sorting parameters for listing records.
///
/// These are passed through to the transport untouched. The pagination
/// cursor is managed by [`Table::list`](crate::Table::list) and cannot be
/// set by callers.
///
/// # Example
///
/// ```
/// use tabula_core::{Direction, ListOptions};
///
/// let options = ListOptions::new()
///     .view("Open tasks")
///     .sort("Due", Direction::Asc)
///     .page_size(50);
/// assert_eq!(options.offset(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Only return these fields.
    pub fields: Vec<String>,
    /// Formula every returned record must satisfy.
    pub filter_by_formula: Option<String>,
    /// Total number of records to return across all pages.
    pub max_records: Option<u32>,
    /// Records per page.
    pub page_size: Option<u32>,
    /// Sort keys, in priority order.
    pub sort: Vec<Sort>,
    /// Name or id of the view to read from.
    pub view: Option<String>,
    offset: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn filter_by_formula(mut self, formula: impl Into<String>) -> Self {
        self.filter_by_formula = Some(formula.into());
        self
    }

    pub fn max_records(mut self, max: u32) -> Self {
        self.max_records = Some(max);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort.push(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    /// Returns the pagination cursor of the next request, if any.
    pub fn offset(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    pub(crate) fn set_offset(&mut self, offset: Option<String>) {
        self.offset = offset.filter(|o| !o.is_empty());
    }

    /// Renders the options as query parameters, in a stable order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        for field in &self.fields {
            query.push(("fields[]".to_string(), field.clone()));
        }
        if let Some(ref formula) = self.filter_by_formula {
            query.push(("filterByFormula".to_string(), formula.clone()));
        }
        if let Some(max) = self.max_records {
            query.push(("maxRecords".to_string(), max.to_string()));
        }
        if let Some(size) = self.page_size {
            query.push(("pageSize".to_string(), size.to_string()));
        }
        for (i, sort) in self.sort.iter().enumerate() {
            query.push((format!("sort[{i}][field]"), sort.field.clone()));
            query.push((
                format!("sort[{i}][direction]"),
                sort.direction.as_str().to_string(),
            ));
        }
        if let Some(ref view) = self.view {
            query.push(("view".to_string(), view.clone()));
        }
        if let Some(ref offset) = self.offset {
            query.push(("offset".to_string(), offset.clone()));
        }

        query
    }
}
