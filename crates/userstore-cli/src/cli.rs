//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Command;

/// Manage users in a userstore collection file.
#[derive(Parser, Debug)]
#[command(name = "userstore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Collection file (defaults to users.json in the platform data directory)
    #[arg(long, env = "USERSTORE_PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Write the collection file as indented JSON
    #[arg(long, global = true)]
    pub pretty_store: bool,

    #[command(subcommand)]
    pub command: Command,
}
