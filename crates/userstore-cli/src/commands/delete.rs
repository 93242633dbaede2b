//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use userstore_core::{UserId, UserStore};
use userstore_file::FileUserStore;

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User identifier
    pub id: String,
}

pub async fn run(args: DeleteArgs, store: &FileUserStore) -> Result<()> {
    let id = UserId::new(args.id);

    store.delete(&id).await.context("Failed to delete user")?;

    output::success(&format!("Deleted user {}", id));

    Ok(())
}
