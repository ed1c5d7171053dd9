//! Durable key-value client storage.
//!
//! The registration flow only needs a flat string-to-string store, the same
//! contract a browser's local storage offers. Two backends implement it:
//!
//! 1. **[`MemoryStore`]**: a process-local map, used by tests and demos.
//! 2. **[`FileStore`]**: one file per key under a root directory. Writes use the
//!    "atomic swap" pattern (unique temp write + `fsync` + `rename`) so a value is
//!    either the old one or the new one after a crash, never a torn mix.
//!
//! Keys are validated through [`StoreKey`]; anything that could name a path
//! outside the root is rejected.
//!
//! # Example
//!
//! ```rust
//! use signup_storage::{FileStore, KeyValueStore, StorageError};
//!
//! # fn main() -> Result<(), StorageError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! let mut store = FileStore::open(tmp.path().join("store"))?;
//!
//! store.set("savedUsername", "alice")?;
//! assert_eq!(store.get("savedUsername")?.as_deref(), Some("alice"));
//! assert_eq!(store.get("missing")?, None);
//! # Ok(())
//! # }
//! ```

mod error;
mod file;
mod key;
mod maintenance;
mod memory;

pub use error::{StorageError, StorageErrorExt};
pub use file::FileStore;
pub use key::StoreKey;
pub use memory::MemoryStore;

/// A flat, durable string key-value store.
///
/// Implementations must return `Ok(None)` for keys that were never written;
/// absence is not an error.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for malformed keys and
    /// [`StorageError::Io`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for malformed keys and
    /// [`StorageError::Io`] when the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
