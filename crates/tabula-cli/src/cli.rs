//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::login::LoginArgs;
use crate::commands::table::TableCommand;
use crate::commands::whoami::WhoamiArgs;

/// CLI tool for reading and editing table records.
#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(author, version = env!("TABULA_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the base and API key to use
    Login(LoginArgs),

    /// Display the active configuration
    Whoami(WhoamiArgs),

    /// Record operations on a table
    Table(TableCommand),
}
