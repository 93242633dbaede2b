//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use userstore_core::UserStore;
use userstore_file::FileUserStore;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the collection as JSON instead of rows
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, store: &FileUserStore) -> Result<()> {
    let users = store.list().await.context("Failed to list users")?;

    if users.is_empty() {
        eprintln!("{}", "No users found.".dimmed());
        return Ok(());
    }

    if args.json || args.pretty {
        return output::json(&users, args.pretty);
    }

    for (id, user) in &users {
        output::user_row(id, user);
    }

    eprintln!();
    eprintln!("{}: {}", "Total".dimmed(), users.len());

    Ok(())
}
