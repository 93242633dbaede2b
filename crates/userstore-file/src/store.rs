//! Filesystem storage for user records.
//!
//! The whole collection lives in one JSON file:
//!
//! ```text
//! users.json        the collection, replaced wholesale on every mutation
//! users.json.lock   advisory lock held while a mutation is in flight
//! users.json.tmp    staging file, renamed over users.json once synced
//! ```
//!
//! Readers take no file lock: the collection file is only ever replaced by
//! rename, so a reader sees either the previous or the next collection in
//! full.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use fs2::FileExt;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use userstore_core::error::{LoadError, PersistError};
use userstore_core::{
    CreateUser, Error, Result, UpdateUser, User, UserCollection, UserId, UserStore,
};

use crate::config::StoreConfig;

fn persist_io(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| {
        Error::PersistenceFailed(PersistError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `path` with `suffix` appended to its file name.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Flat-file user store.
///
/// Every operation loads the collection from disk, works on that copy and,
/// for mutations, writes it back before returning. Operations on clones of
/// one store are serialized by a shared mutex; mutations additionally hold
/// an exclusive `flock` on the lock file so other processes (and other
/// store instances on the same path) wait their turn.
#[derive(Debug, Clone)]
pub struct FileUserStore {
    config: StoreConfig,
    guard: Arc<Mutex<()>>,
}

impl FileUserStore {
    /// Create a store from configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            guard: Arc::new(Mutex::new(())),
        }
    }

    /// Create a store backed by the file at `path` with default settings.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(StoreConfig::new(path))
    }

    /// Get the collection file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn lock_path(&self) -> PathBuf {
        sibling(self.path(), ".lock")
    }

    fn temp_path(&self) -> PathBuf {
        sibling(self.path(), ".tmp")
    }

    /// Open the lock file and take an exclusive lock on it.
    ///
    /// The lock is released when the returned file is closed.
    fn lock_exclusive(&self) -> Result<File> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(persist_io(parent))?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(persist_io(&lock_path))?;

        lock_file
            .lock_exclusive()
            .map_err(persist_io(&lock_path))?;

        Ok(lock_file)
    }

    /// Read the collection from disk.
    ///
    /// A missing file is a fresh store. A file that exists but cannot be
    /// read or parsed is an error, blank files included; it is never
    /// treated as empty.
    fn load(&self) -> Result<UserCollection> {
        let path = self.path();

        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No collection file yet, starting empty");
                return Ok(UserCollection::new());
            }
            Err(source) => {
                return Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source,
                }
                .into());
            }
        };

        serde_json::from_slice(&content).map_err(|source| {
            LoadError::Corrupt {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// Replace the collection on disk.
    ///
    /// The new content is written and synced to a staging file which is then
    /// renamed over the collection file.
    fn persist(&self, collection: &UserCollection) -> Result<()> {
        let path = self.path();
        let temp_path = self.temp_path();

        let content = if self.config.pretty {
            serde_json::to_vec_pretty(collection)
        } else {
            serde_json::to_vec(collection)
        }
        .map_err(PersistError::Encode)?;

        let staged = File::create(&temp_path).and_then(|mut file| {
            file.write_all(&content)?;
            file.sync_all()
        });

        if let Err(e) = staged {
            let _ = fs::remove_file(&temp_path);
            return Err(persist_io(&temp_path)(e));
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(persist_io(path)(e));
        }

        debug!(path = %path.display(), users = collection.len(), "Persisted collection");

        Ok(())
    }

    /// Run a read-only operation against the current collection.
    async fn read<T>(&self, op: impl FnOnce(UserCollection) -> Result<T>) -> Result<T> {
        let _guard = self.guard.lock().await;
        op(self.load()?)
    }

    /// Run one load-mutate-persist cycle.
    ///
    /// Nothing is written when `op` fails.
    async fn mutate<T>(&self, op: impl FnOnce(&mut UserCollection) -> Result<T>) -> Result<T> {
        let _guard = self.guard.lock().await;
        let lock_file = self.lock_exclusive()?;

        let mut collection = self.load()?;
        let output = op(&mut collection)?;
        self.persist(&collection)?;

        // The write already landed; closing the file releases the lock anyway.
        if let Err(e) = lock_file.unlock() {
            warn!(path = %self.lock_path().display(), error = %e, "Failed to release store lock");
        }

        Ok(output)
    }
}

#[async_trait]
impl UserStore for FileUserStore {
    #[instrument(skip(self), fields(path = %self.path().display()))]
    async fn list(&self) -> Result<BTreeMap<UserId, User>> {
        self.read(|collection| Ok(collection.into_users())).await
    }

    #[instrument(skip(self, request), fields(path = %self.path().display()))]
    async fn create(&self, request: CreateUser) -> Result<UserId> {
        let id = self
            .mutate(|collection| {
                let id = collection.allocate_id()?;
                collection.insert(id.clone(), User::new(request.display_name, request.email));
                Ok(id)
            })
            .await?;

        debug!(%id, "Created user");

        Ok(id)
    }

    #[instrument(skip(self), fields(path = %self.path().display(), %id))]
    async fn get(&self, id: &UserId) -> Result<User> {
        self.read(|collection| collection.get(id).cloned()).await
    }

    #[instrument(skip(self, request), fields(path = %self.path().display(), %id))]
    async fn update(&self, id: &UserId, request: UpdateUser) -> Result<()> {
        self.mutate(|collection| collection.rename(id, request.display_name).map(|_| ()))
            .await?;

        debug!("Updated user");

        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path().display(), %id))]
    async fn delete(&self, id: &UserId) -> Result<()> {
        self.mutate(|collection| collection.remove(id).map(|_| ()))
            .await?;

        debug!("Deleted user");

        Ok(())
    }
}
