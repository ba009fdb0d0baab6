//! Subcommand implementations.

pub mod login;
pub mod table;
pub mod whoami;
