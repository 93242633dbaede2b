//! Subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod update;

use anyhow::Result;
use clap::Subcommand;

use userstore_file::FileUserStore;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every user in the collection
    List(list::ListArgs),

    /// Create a new user
    Create(create::CreateArgs),

    /// Show a single user
    Get(get::GetArgs),

    /// Change a user's display name
    Update(update::UpdateArgs),

    /// Delete a user
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: Command, store: &FileUserStore) -> Result<()> {
    match cmd {
        Command::List(args) => list::run(args, store).await,
        Command::Create(args) => create::run(args, store).await,
        Command::Get(args) => get::run(args, store).await,
        Command::Update(args) => update::run(args, store).await,
        Command::Delete(args) => delete::run(args, store).await,
    }
}
