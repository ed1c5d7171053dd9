use crate::error::StorageError;
use std::fmt;

const MAX_KEY_LEN: usize = 128;

/// A validated storage key.
///
/// Keys are case-sensitive and limited to ASCII alphanumerics, `_` and `-`, so
/// every key maps to exactly one plain file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl TryFrom<&str> for StoreKey {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, StorageError> {
        if value.is_empty() {
            return Err(StorageError::InvalidKey {
                message: "EMPTY".into(),
                context: Some("Storage key cannot be empty".into()),
            });
        }

        if value.len() > MAX_KEY_LEN {
            return Err(StorageError::InvalidKey {
                message: value.to_owned().into(),
                context: Some(format!("Storage key exceeds {MAX_KEY_LEN} bytes").into()),
            });
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(StorageError::InvalidKey {
                message: value.to_owned().into(),
                context: Some("Storage key contains illegal characters".into()),
            });
        }

        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for StoreKey {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
