use crate::field::FieldKind;
use std::borrow::Cow;
use std::fmt;

/// A failed validation rule. Each variant renders one fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    IdentifierRequired,
    IdentifierTaken,
    EmailRequired,
    EmailMalformed,
    SecretRequired,
    /// Shorter than the configured minimum, carried for the message.
    SecretTooShort { min: usize },
    SecretMissingUppercase,
    SecretMissingLowercase,
    SecretMissingDigit,
    SecretMissingSpecial,
    ConfirmationRequired,
    ConfirmationMismatch,
}

impl Violation {
    /// The field this rule belongs to.
    #[must_use]
    pub const fn field(self) -> FieldKind {
        match self {
            Self::IdentifierRequired | Self::IdentifierTaken => FieldKind::Identifier,
            Self::EmailRequired | Self::EmailMalformed => FieldKind::Email,
            Self::SecretRequired
            | Self::SecretTooShort { .. }
            | Self::SecretMissingUppercase
            | Self::SecretMissingLowercase
            | Self::SecretMissingDigit
            | Self::SecretMissingSpecial => FieldKind::Secret,
            Self::ConfirmationRequired | Self::ConfirmationMismatch => {
                FieldKind::SecretConfirmation
            },
        }
    }

    /// User-facing text. These strings are part of the public contract.
    #[must_use]
    pub fn message(self) -> Cow<'static, str> {
        match self {
            Self::IdentifierRequired => "Username is required".into(),
            Self::IdentifierTaken => "This username is already taken. Please choose another.".into(),
            Self::EmailRequired => "Email is required.".into(),
            Self::EmailMalformed => "Please enter a valid email address.".into(),
            Self::SecretRequired => "Password is required.".into(),
            Self::SecretTooShort { min } => {
                format!("Password must be at least {min} characters long.").into()
            },
            Self::SecretMissingUppercase => {
                "Password must include at least one uppercase letter.".into()
            },
            Self::SecretMissingLowercase => {
                "Password must include at least one lowercase letter.".into()
            },
            Self::SecretMissingDigit => "Password must include at least one number.".into(),
            Self::SecretMissingSpecial => {
                "Password must include at least one special character.".into()
            },
            Self::ConfirmationRequired => "Please confirm your password.".into(),
            Self::ConfirmationMismatch => "Passwords do not match.".into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of one validator call. Valid results carry an empty message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct ValidationResult {
    violation: Option<Violation>,
}

impl ValidationResult {
    pub const VALID: Self = Self { violation: None };

    pub const fn fail(violation: Violation) -> Self {
        Self { violation: Some(violation) }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    #[must_use]
    pub const fn violation(&self) -> Option<Violation> {
        self.violation
    }

    /// Message to display; empty when valid, which clears a previous message.
    #[must_use]
    pub fn message(&self) -> Cow<'static, str> {
        self.violation.map_or(Cow::Borrowed(""), Violation::message)
    }
}

impl From<Result<(), Violation>> for ValidationResult {
    fn from(value: Result<(), Violation>) -> Self {
        Self { violation: value.err() }
    }
}
