//! Canonical strings shared by every adapter.

/// Storage key holding the last successfully registered identifier.
pub const LAST_IDENTIFIER_KEY: &str = "savedUsername";

/// Storage key holding the JSON list of every registered identifier.
pub const IDENTIFIERS_KEY: &str = "registeredUsernames";

/// Minimum secret length when no configuration overrides it.
pub const DEFAULT_MIN_SECRET_LENGTH: usize = 10;

/// Notice shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Registration successful!";
