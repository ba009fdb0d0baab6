//! tabula-http - HTTP transport for tabula.
//!
//! # Example
//!
//! ```no_run
//! use tabula_core::{BaseId, DynamicRecord};
//! use tabula_http::{ApiKey, connect};
//!
//! # async fn example() -> tabula_core::Result<()> {
//! let client = connect(BaseId::new("appXXXXXXXXXXXXXX")?, ApiKey::new("pat..."))?;
//! let tasks = client.table("Tasks")?;
//!
//! let mut all: Vec<DynamicRecord> = Vec::new();
//! tasks.list(&mut all, None).await?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod config;
mod transport;

pub use auth::ApiKey;
pub use config::{DEFAULT_API_URL, DEFAULT_TIMEOUT, HttpConfig};
pub use transport::HttpTransport;

use tabula_core::{BaseId, Client, Result};

/// Create a client for one base using the default configuration.
pub fn connect(base: BaseId, api_key: ApiKey) -> Result<Client<HttpTransport>> {
    Ok(Client::new(HttpTransport::new(base, api_key)?))
}

/// Create a client for one base with a custom configuration.
pub fn connect_with(
    config: HttpConfig,
    base: BaseId,
    api_key: ApiKey,
) -> Result<Client<HttpTransport>> {
    Ok(Client::new(HttpTransport::with_config(config, base, api_key)?))
}
