use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
///
/// Rule failures are never errors; they travel as
/// [`ValidationResult`](signup_domain::ValidationResult) values. This type only covers
/// the persistence boundary.
#[signup_derive::signup_error]
pub enum RegistrationError {
    /// The backing key-value store failed.
    #[error("Registry storage error{}: {source}", format_context(.context))]
    Storage { source: signup_storage::StorageError, context: Option<Cow<'static, str>> },

    /// The identifier list could not be encoded.
    #[error("Registry serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
