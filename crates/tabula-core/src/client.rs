//! Client entry point.

use std::sync::Arc;

use crate::Result;
use crate::table::Table;
use crate::transport::Transport;
use crate::types::TableName;

/// Hands out [`Table`] handles that share one transport.
#[derive(Debug)]
pub struct Client<T> {
    transport: Arc<T>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a handle for the named table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table name is empty or malformed.
    pub fn table(&self, name: impl Into<String>) -> Result<Table<T>> {
        let name = TableName::new(name)?;
        Ok(Table::new(name, Arc::clone(&self.transport)))
    }
}
