//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use tabula_core::{ApiUrl, BaseId};
use tabula_http::{ApiKey, DEFAULT_API_URL, HttpConfig, HttpTransport};

use crate::config::storage::{self, StoredConfig};
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Base id (e.g. appXXXXXXXXXXXXXX)
    #[arg(long)]
    pub base: String,

    /// Personal access token or API key
    #[arg(long)]
    pub api_key: String,

    /// API root URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let api_url = ApiUrl::new(&args.api_url).context("Invalid API URL")?;
    let base = BaseId::new(&args.base).context("Invalid base id")?;
    let api_key = ApiKey::new(&args.api_key);

    // Building the transport checks the key can be sent as a header.
    HttpTransport::with_config(HttpConfig::new(api_url.clone()), base.clone(), api_key)
        .context("Invalid API key")?;

    storage::save_config(&StoredConfig {
        api_url: api_url.to_string(),
        base: base.to_string(),
        api_key: args.api_key,
    })
    .context("Failed to save config")?;

    output::success("Saved credentials");
    output::field("Base", base.as_str());
    output::field("API", &api_url.to_string());

    Ok(())
}
