//! Resolution of the collection file the CLI operates on.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use userstore_file::{DEFAULT_FILE_NAME, FileUserStore, StoreConfig};

use crate::cli::Cli;

/// Get the default collection path in the platform data directory.
fn default_store_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "userstore").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join(DEFAULT_FILE_NAME))
}

/// Open the store named on the command line.
pub fn open(cli: &Cli) -> Result<FileUserStore> {
    let path = match &cli.store {
        Some(path) => path.clone(),
        None => default_store_path()?,
    };

    debug!(path = %path.display(), "Using collection file");

    Ok(FileUserStore::new(
        StoreConfig::new(path).pretty(cli.pretty_store),
    ))
}
