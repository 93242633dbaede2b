//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use userstore_core::{UserId, UserStore};
use userstore_file::FileUserStore;

use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User identifier
    pub id: String,
}

pub async fn run(args: GetArgs, store: &FileUserStore) -> Result<()> {
    let user = store
        .get(&UserId::new(args.id))
        .await
        .context("Failed to get user")?;

    output::json(&user, true)?;

    Ok(())
}
