//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use userstore_core::{UpdateUser, UserId, UserStore};
use userstore_file::FileUserStore;

use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// User identifier
    pub id: String,

    /// New display name
    #[arg(long)]
    pub display_name: String,
}

pub async fn run(args: UpdateArgs, store: &FileUserStore) -> Result<()> {
    let id = UserId::new(args.id);

    store
        .update(&id, UpdateUser::new(&args.display_name))
        .await
        .context("Failed to update user")?;

    output::success(&format!("Updated user {}", id));
    output::field("Display name", &args.display_name);

    Ok(())
}
