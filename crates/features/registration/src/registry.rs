//! # Persisted Registry
//!
//! Identifiers accepted by earlier submissions and the last one used, stored under
//! two keys of a [`KeyValueStore`]:
//!
//! * `savedUsername`: the last identifier as a raw string.
//! * `registeredUsernames`: every identifier as a JSON array of strings.
//!
//! An unreadable list is copied to `registeredUsernames-unreadable` before the first
//! write replaces it.
//!
//! [`Registry::load`] is the read boundary and
//! [`Registry::record_successful_registration`] the only write.

use crate::error::{RegistrationError, RegistrationErrorExt};
use signup_domain::config::StorageConfig;
use signup_domain::constants::{IDENTIFIERS_KEY, LAST_IDENTIFIER_KEY};
use signup_storage::KeyValueStore;
use tracing::{debug, info, warn};

/// Storage keys of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryKeys {
    pub last_identifier: String,
    pub identifiers: String,
}

impl Default for RegistryKeys {
    fn default() -> Self {
        Self {
            last_identifier: LAST_IDENTIFIER_KEY.to_owned(),
            identifiers: IDENTIFIERS_KEY.to_owned(),
        }
    }
}

impl RegistryKeys {
    /// Key that receives an undecodable identifier list before it is overwritten.
    #[must_use]
    pub fn unreadable_backup(&self) -> String {
        format!("{}-unreadable", self.identifiers)
    }
}

impl From<&StorageConfig> for RegistryKeys {
    fn from(config: &StorageConfig) -> Self {
        Self {
            last_identifier: config.last_identifier_key.clone(),
            identifiers: config.identifiers_key.clone(),
        }
    }
}

/// In-memory view of the persisted registry.
///
/// `used` never holds the same identifier twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedRegistry {
    last_identifier: Option<String>,
    used: Vec<String>,
}

impl PersistedRegistry {
    /// Builds a registry, dropping repeated identifiers while keeping first-seen order.
    pub fn from_parts(
        last_identifier: Option<String>,
        identifiers: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut registry = Self { last_identifier, used: Vec::new() };
        for identifier in identifiers {
            registry.insert(identifier);
        }
        registry
    }

    /// Reads both keys from `store`. Missing keys yield an empty registry.
    ///
    /// A list value that is not a JSON array of strings is treated as missing.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Storage`] when the store itself fails.
    pub fn read_from<S>(store: &S, keys: &RegistryKeys) -> Result<Self, RegistrationError>
    where
        S: KeyValueStore + ?Sized,
    {
        Self::read_with_unreadable(store, keys).map(|(registry, _)| registry)
    }

    /// Like [`PersistedRegistry::read_from`], also returning the raw list value when
    /// it could not be decoded.
    fn read_with_unreadable<S>(
        store: &S,
        keys: &RegistryKeys,
    ) -> Result<(Self, Option<String>), RegistrationError>
    where
        S: KeyValueStore + ?Sized,
    {
        let last_identifier = store
            .get(&keys.last_identifier)
            .context("Reading last identifier")?
            .filter(|value| !value.is_empty());

        let raw = store.get(&keys.identifiers).context("Reading identifiers")?;
        let (identifiers, unreadable) = match raw {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(identifiers) => (identifiers, None),
                Err(err) => {
                    warn!(
                        key = %keys.identifiers,
                        backup = %keys.unreadable_backup(),
                        error = %err,
                        "Ignoring unreadable identifier list; it is backed up before the next write replaces it"
                    );
                    (Vec::new(), Some(raw))
                },
            },
            None => (Vec::new(), None),
        };

        Ok((Self::from_parts(last_identifier, identifiers), unreadable))
    }

    #[must_use]
    pub fn last_identifier(&self) -> Option<&str> {
        self.last_identifier.as_deref()
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.used.iter().any(|used| used == identifier)
    }

    /// Registered identifiers in the order they were first recorded.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.used
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    fn insert(&mut self, identifier: String) -> bool {
        if self.contains(&identifier) {
            return false;
        }
        self.used.push(identifier);
        true
    }
}

/// The persisted registry bound to the store it was loaded from.
#[derive(Debug)]
pub struct Registry<S> {
    store: S,
    keys: RegistryKeys,
    state: PersistedRegistry,
    unreadable: Option<String>,
}

impl<S: KeyValueStore> Registry<S> {
    /// Loads the registry once at startup.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Storage`] when the store cannot be read.
    pub fn load(store: S, keys: RegistryKeys) -> Result<Self, RegistrationError> {
        let (state, unreadable) = PersistedRegistry::read_with_unreadable(&store, &keys)?;
        info!(
            identifiers = state.len(),
            has_last = state.last_identifier.is_some(),
            "Loaded registration registry"
        );
        Ok(Self { store, keys, state, unreadable })
    }

    #[must_use]
    pub const fn state(&self) -> &PersistedRegistry {
        &self.state
    }

    /// Identifier used to pre-fill the form.
    #[must_use]
    pub fn last_identifier(&self) -> Option<&str> {
        self.state.last_identifier()
    }

    /// Persists a successful registration: the identifier is appended to the used list
    /// and the last identifier is overwritten.
    ///
    /// The list is written before the last identifier, so a failed second write never
    /// leaves a last identifier that is missing from the list. An identifier already in
    /// the list is not appended again. The in-memory state changes only after both
    /// writes succeed.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Serialize`] if the list cannot be encoded and
    /// [`RegistrationError::Storage`] if a write fails.
    pub fn record_successful_registration(
        &mut self,
        identifier: &str,
    ) -> Result<(), RegistrationError> {
        if identifier.is_empty() {
            return Err(RegistrationError::Internal {
                message: "Refusing to record an empty identifier".into(),
                context: None,
            });
        }

        let mut next = self.state.clone();
        next.last_identifier = Some(identifier.to_owned());
        if !next.insert(identifier.to_owned()) {
            debug!(identifier, "Identifier already registered, list left unchanged");
        }

        let encoded = serde_json::to_string(&next.used).context("Encoding identifier list")?;
        if let Some(raw) = &self.unreadable {
            self.store
                .set(&self.keys.unreadable_backup(), raw)
                .context("Backing up unreadable identifier list")?;
        }
        self.store.set(&self.keys.identifiers, &encoded).context("Writing identifier list")?;
        self.store
            .set(&self.keys.last_identifier, identifier)
            .context("Writing last identifier")?;

        self.state = next;
        self.unreadable = None;
        info!(identifier, total = self.state.len(), "Recorded registration");
        Ok(())
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_storage::MemoryStore;

    #[test]
    fn from_parts_drops_duplicates() {
        let registry = PersistedRegistry::from_parts(
            None,
            ["a", "b", "a", "c", "b"].into_iter().map(str::to_owned),
        );
        assert_eq!(registry.identifiers(), ["a", "b", "c"]);
    }

    #[test]
    fn empty_store_loads_empty_registry() {
        let registry = Registry::load(MemoryStore::new(), RegistryKeys::default()).unwrap();
        assert!(registry.state().is_empty());
        assert_eq!(registry.last_identifier(), None);
    }

    #[test]
    fn corrupt_list_is_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set(IDENTIFIERS_KEY, "{not json").unwrap();
        store.set(LAST_IDENTIFIER_KEY, "alice").unwrap();

        let registry = Registry::load(store, RegistryKeys::default()).unwrap();
        assert!(registry.state().is_empty());
        assert_eq!(registry.last_identifier(), Some("alice"));
    }

    #[test]
    fn unreadable_list_is_backed_up_before_replacement() {
        let mut store = MemoryStore::new();
        store.set(IDENTIFIERS_KEY, "{not json").unwrap();

        let mut registry = Registry::load(store, RegistryKeys::default()).unwrap();
        registry.record_successful_registration("alice").unwrap();
        registry.record_successful_registration("bob").unwrap();

        let store = registry.into_store();
        let backup = RegistryKeys::default().unreadable_backup();
        assert_eq!(store.get(&backup).unwrap().as_deref(), Some("{not json"));
        assert_eq!(store.get(IDENTIFIERS_KEY).unwrap().as_deref(), Some(r#"["alice","bob"]"#));
    }

    #[test]
    fn readable_list_writes_no_backup() {
        let mut registry = Registry::load(MemoryStore::new(), RegistryKeys::default()).unwrap();
        registry.record_successful_registration("alice").unwrap();

        let store = registry.into_store();
        assert_eq!(store.get(&RegistryKeys::default().unreadable_backup()).unwrap(), None);
    }

    /// Store that fails every write to one key.
    #[derive(Debug, Default)]
    struct FailingKeyStore {
        inner: MemoryStore,
        failing: &'static str,
    }

    impl KeyValueStore for FailingKeyStore {
        fn get(&self, key: &str) -> Result<Option<String>, signup_storage::StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), signup_storage::StorageError> {
            if key == self.failing {
                return Err("write refused".into());
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn failed_last_write_leaves_list_consistent() {
        let store = FailingKeyStore { failing: LAST_IDENTIFIER_KEY, ..Default::default() };
        let mut registry = Registry::load(store, RegistryKeys::default()).unwrap();

        registry.record_successful_registration("alice").expect_err("last write fails");
        assert!(registry.state().is_empty());

        let store = registry.into_store();
        assert_eq!(store.inner.get(LAST_IDENTIFIER_KEY).unwrap(), None);
        assert_eq!(store.inner.get(IDENTIFIERS_KEY).unwrap().as_deref(), Some(r#"["alice"]"#));
    }

    #[test]
    fn failed_list_write_touches_nothing() {
        let store = FailingKeyStore { failing: IDENTIFIERS_KEY, ..Default::default() };
        let mut registry = Registry::load(store, RegistryKeys::default()).unwrap();

        registry.record_successful_registration("alice").expect_err("list write fails");

        let store = registry.into_store();
        assert_eq!(store.inner.get(LAST_IDENTIFIER_KEY).unwrap(), None);
        assert_eq!(store.inner.get(IDENTIFIERS_KEY).unwrap(), None);
    }

    #[test]
    fn record_writes_both_keys() {
        let mut registry = Registry::load(MemoryStore::new(), RegistryKeys::default()).unwrap();
        registry.record_successful_registration("alice").unwrap();
        registry.record_successful_registration("bob").unwrap();

        let store = registry.into_store();
        assert_eq!(store.get(LAST_IDENTIFIER_KEY).unwrap().as_deref(), Some("bob"));
        assert_eq!(store.get(IDENTIFIERS_KEY).unwrap().as_deref(), Some(r#"["alice","bob"]"#));
    }

    #[test]
    fn recording_a_known_identifier_only_moves_last() {
        let mut registry = Registry::load(MemoryStore::new(), RegistryKeys::default()).unwrap();
        registry.record_successful_registration("alice").unwrap();
        registry.record_successful_registration("bob").unwrap();
        registry.record_successful_registration("alice").unwrap();

        assert_eq!(registry.state().identifiers(), ["alice", "bob"]);
        assert_eq!(registry.last_identifier(), Some("alice"));
    }

    #[test]
    fn empty_identifier_is_refused() {
        let mut registry = Registry::load(MemoryStore::new(), RegistryKeys::default()).unwrap();
        let err = registry.record_successful_registration("").expect_err("must refuse");
        assert!(matches!(err, RegistrationError::Internal { .. }));
        assert!(registry.state().is_empty());
    }

    #[test]
    fn custom_keys_are_honored() {
        let keys = RegistryKeys {
            last_identifier: "lastUser".to_owned(),
            identifiers: "users".to_owned(),
        };
        let mut registry = Registry::load(MemoryStore::new(), keys).unwrap();
        registry.record_successful_registration("zoe").unwrap();

        let store = registry.into_store();
        assert_eq!(store.get("lastUser").unwrap().as_deref(), Some("zoe"));
        assert_eq!(store.get(LAST_IDENTIFIER_KEY).unwrap(), None);
    }
}
