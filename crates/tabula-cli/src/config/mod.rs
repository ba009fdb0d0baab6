//! CLI configuration: stored login plus environment overrides.

pub mod storage;

use anyhow::{Context, Result};

use tabula_core::{ApiUrl, BaseId, Client};
use tabula_http::{ApiKey, DEFAULT_API_URL, HttpConfig, HttpTransport, connect_with};

use storage::StoredConfig;

/// Overrides the stored API URL.
pub const ENV_API_URL: &str = "TABULA_API_URL";
/// Overrides the stored base id.
pub const ENV_BASE: &str = "TABULA_BASE";
/// Overrides the stored API key.
pub const ENV_API_KEY: &str = "TABULA_API_KEY";

/// Fully resolved connection settings.
#[derive(Debug)]
pub struct Resolved {
    pub api_url: ApiUrl,
    pub base: BaseId,
    pub api_key: ApiKey,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Merge environment overrides over the stored config.
pub fn resolve() -> Result<Resolved> {
    let stored = storage::load_config().context("Failed to load config")?;
    merge(stored, env_var(ENV_API_URL), env_var(ENV_BASE), env_var(ENV_API_KEY))
}

fn merge(
    stored: Option<StoredConfig>,
    api_url: Option<String>,
    base: Option<String>,
    api_key: Option<String>,
) -> Result<Resolved> {
    let api_url = api_url
        .or_else(|| stored.as_ref().map(|s| s.api_url.clone()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let base = base
        .or_else(|| stored.as_ref().map(|s| s.base.clone()))
        .context("No base configured. Run 'tabula login' first.")?;
    let api_key = api_key
        .or_else(|| stored.as_ref().map(|s| s.api_key.clone()))
        .context("No API key configured. Run 'tabula login' first.")?;

    Ok(Resolved {
        api_url: ApiUrl::new(&api_url).context("Invalid API URL")?,
        base: BaseId::new(base).context("Invalid base id")?,
        api_key: ApiKey::new(api_key),
    })
}

/// Build a client from the resolved configuration.
pub fn open_client() -> Result<Client<HttpTransport>> {
    let resolved = resolve()?;
    tracing::debug!(api_url = %resolved.api_url, base = %resolved.base, "Opening client");

    connect_with(
        HttpConfig::new(resolved.api_url),
        resolved.base,
        resolved.api_key,
    )
    .context("Failed to create client")
}
