//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let resolved = config::resolve()?;

    output::field("Base", resolved.base.as_str());
    output::field("API", &resolved.api_url.to_string());

    Ok(())
}
