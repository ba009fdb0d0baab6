//! Embeds the `tabula` version string as `TABULA_VERSION`.
//!
//! Order of precedence: an explicit `TABULA_VERSION` in the build
//! environment (for packagers), then `git describe` of the workspace, then
//! the crate version.

use std::env;
use std::path::Path;
use std::process::Command;

const VERSION_VAR: &str = "TABULA_VERSION";

fn main() {
    println!("cargo:rerun-if-env-changed={VERSION_VAR}");

    // The repository root is two levels above this crate.
    let git_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../.git");
    if git_dir.exists() {
        println!("cargo:rerun-if-changed={}", git_dir.join("HEAD").display());
        println!("cargo:rerun-if-changed={}", git_dir.join("refs").display());
    }

    let version = env::var(VERSION_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env={VERSION_VAR}={version}");
}

/// `git describe` output without a leading `v`, marked `-dirty` when the
/// tree has uncommitted changes.
fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    match described.trim() {
        "" => None,
        tag => Some(tag.trim_start_matches('v').to_string()),
    }
}
