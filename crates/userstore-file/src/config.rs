//! Store configuration.

use std::path::{Path, PathBuf};

/// File name used when only a directory is known.
pub const DEFAULT_FILE_NAME: &str = "users.json";

/// Where and how a [`FileUserStore`](crate::FileUserStore) keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the collection file.
    pub path: PathBuf,

    /// Write indented JSON instead of a single line.
    pub pretty: bool,
}

impl StoreConfig {
    /// Configure a store backed by the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: false,
        }
    }

    /// Configure a store backed by [`DEFAULT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    /// Toggle pretty-printed output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
