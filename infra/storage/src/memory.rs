use crate::error::StorageError;
use crate::key::StoreKey;
use crate::KeyValueStore;
use fxhash::FxHashMap;

/// Process-local store. Contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<StoreKey, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = StoreKey::try_from(key)?;
        Ok(self.entries.get(&key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let key = StoreKey::try_from(key)?;
        self.entries.insert(key, value.to_owned());
        Ok(())
    }
}
