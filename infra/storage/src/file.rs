//! File-backed [`KeyValueStore`]: one UTF-8 file per key under a canonical root.

use crate::error::{StorageError, StorageErrorExt};
use crate::key::StoreKey;
use crate::maintenance;
use crate::KeyValueStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

pub(crate) const TMP_MARKER: &str = ".signuptmp.";
const VALUE_SUFFIX: &str = "val";

/// Durable store rooted at a directory on disk.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileStore {
    /// Opens (and creates, if needed) a store rooted at `root`.
    ///
    /// The root is canonicalized, then leftover temp files from interrupted
    /// writes are removed.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the directory cannot be created or resolved.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref();
        fs::create_dir_all(root)
            .context(format!("Failed to bootstrap storage root: {}", root.display()))?;
        let root = fs::canonicalize(root)
            .context(format!("Failed to resolve storage root: {}", root.display()))?;

        maintenance::purge_tmp(&root);
        info!(path = %root.display(), "Opened file store");

        Ok(Self { root, tmp_counter: AtomicU64::new(1) })
    }

    /// The canonical root directory of this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &StoreKey) -> PathBuf {
        self.root.join(format!("{key}.{VALUE_SUFFIX}"))
    }

    fn unique_tmp_path(&self, target: &Path) -> PathBuf {
        let counter = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("entry");
        target.with_file_name(format!("{file_name}{TMP_MARKER}{}.{counter}", std::process::id()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = StoreKey::try_from(key)?;
        let path = self.path_for(&key);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io {
                source: err,
                context: Some(format!("Read failed: {}", path.display()).into()),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let key = StoreKey::try_from(key)?;
        let target = self.path_for(&key);
        let temp = self.unique_tmp_path(&target);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(value.as_bytes()).context("Write failed")?;
            file.sync_all().context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, &target) {
            let _ = fs::remove_file(&temp);
            return Err(StorageError::Io {
                source: err,
                context: Some(
                    format!("Atomic swap failed: {} -> {}", temp.display(), target.display())
                        .into(),
                ),
            });
        }

        sync_dir(&self.root);
        debug!(%key, "Value saved atomically");
        Ok(())
    }
}

fn sync_dir(path: &Path) {
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                tracing::warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}
