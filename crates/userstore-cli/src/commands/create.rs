//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use userstore_core::{CreateUser, UserStore};
use userstore_file::FileUserStore;

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name shown for the user
    #[arg(long)]
    pub display_name: String,

    /// Contact address
    #[arg(long)]
    pub email: String,
}

pub async fn run(args: CreateArgs, store: &FileUserStore) -> Result<()> {
    let id = store
        .create(CreateUser::new(args.display_name, args.email))
        .await
        .context("Failed to create user")?;

    // Bare id first so scripts can read it
    println!("{}", id);
    output::success(&format!("Created user {}", id));

    Ok(())
}
