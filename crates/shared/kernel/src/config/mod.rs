use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "SIGNUP";

const DEFAULT_CONFIG_FILE: &str = "signup";

/// Custom error type for config loading.
#[signup_derive::signup_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering a file with environment overrides.
///
/// 1. **Base File**: settings from `path` (format picked by extension), defaulting to
///    `signup` in the working directory. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `SIGNUP__`, nested with `__`
///    (e.g., `SIGNUP__POLICY__MIN_SECRET_LENGTH` maps to `policy.min_secret_length`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use signup_kernel::config::load_config;
/// use signup_kernel::domain::config::SignupConfig;
///
/// let cfg: SignupConfig = load_config(Some("signup.toml")).unwrap_or_default();
/// assert!(cfg.policy.min_secret_length > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_owned());
    debug!(path = %path.display(), prefix = ENV_PREFIX, "Loading configuration");

    Config::builder()
        .add_source(File::from(path.as_path()))
        .add_source(env_overrides())
        .build()
        .and_then(Config::try_deserialize::<T>)
        .context(format!("Loading {}", path.display()))
}

fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__").try_parsing(true)
}
