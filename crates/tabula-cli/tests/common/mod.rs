#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

pub const TEST_BASE: &str = "appCliTest";
pub const TEST_KEY: &str = "pat-cli-test";

/// Run the CLI with a custom HOME directory for isolated config storage.
///
/// No API settings are passed through the environment, so the stored config
/// (or its absence) decides where requests go.
pub fn run_cli_isolated(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tabula"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env_remove("TABULA_API_URL");
    cmd.env_remove("TABULA_BASE");
    cmd.env_remove("TABULA_API_KEY");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI against a mock API given through the environment.
pub fn run_cli_with_env(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tabula"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("TABULA_API_URL", api_url);
    cmd.env("TABULA_BASE", TEST_BASE);
    cmd.env("TABULA_API_KEY", TEST_KEY);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock server keeps serving.
pub async fn run_cli_async(args: Vec<String>, home: &Path, api_url: &str) -> Output {
    let home = home.to_path_buf();
    let api_url = api_url.to_string();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli_with_env(&args, &home, &api_url)
    })
    .await
    .expect("CLI task panicked")
}

pub fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
