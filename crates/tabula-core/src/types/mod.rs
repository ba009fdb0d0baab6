//! Validated identifier types.
//!
//! These types enforce their format at construction time so that every
//! endpoint built from them is well formed.

mod api_url;
mod base_id;
mod table_name;

pub use api_url::{API_VERSION, ApiUrl};
pub use base_id::BaseId;
pub use table_name::TableName;

pub(crate) use table_name::{escape_segment, is_dot_segment};
