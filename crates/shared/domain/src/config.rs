use crate::constants::{DEFAULT_MIN_SECRET_LENGTH, IDENTIFIERS_KEY, LAST_IDENTIFIER_KEY};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the signup application.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    pub policy: PolicyConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Tunables of the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub min_secret_length: usize,
}

/// Where the persisted registry lives and under which keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub last_identifier_key: String,
    pub identifiers_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive, e.g. `warn` or `signup_registration=debug`.
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for PolicyConfig {
    fn default() -> Self {
        Self { min_secret_length: DEFAULT_MIN_SECRET_LENGTH }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".signup"),
            last_identifier_key: LAST_IDENTIFIER_KEY.to_owned(),
            identifiers_key: IDENTIFIERS_KEY.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), directory: None, json: false }
    }
}
