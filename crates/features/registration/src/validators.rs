//! # Field Validators
//!
//! One pure function per form field. Each evaluates its rules in a fixed order and
//! stops at the first failure, so a field only ever reports one message at a time.
//!
//! | Field | Rules, in order |
//! |---|---|
//! | identifier | required (after trimming), not already registered |
//! | email | required, address grammar with a dotted domain |
//! | secret | required, minimum length, uppercase, lowercase, digit, special character |
//! | confirmation | required, equals the current secret |
//!
//! Validators never fail with an error. Malformed input is simply invalid.

use crate::registry::PersistedRegistry;
use signup_domain::config::PolicyConfig;
use signup_domain::{FieldKind, RegistrationInput, ValidationResult, Violation};

/// Runs the validator for `field` against a snapshot of the whole form.
pub fn validate_field(
    field: FieldKind,
    input: &RegistrationInput,
    registry: &PersistedRegistry,
    policy: &PolicyConfig,
) -> ValidationResult {
    match field {
        FieldKind::Identifier => validate_identifier(&input.identifier, registry),
        FieldKind::Email => validate_email(&input.email),
        FieldKind::Secret => validate_secret(&input.secret, policy),
        FieldKind::SecretConfirmation => {
            validate_confirmation(&input.secret_confirmation, &input.secret)
        },
    }
}

/// Identifier must be non-blank and unused. Membership is an exact,
/// case-sensitive match on the trimmed value.
pub fn validate_identifier(value: &str, registry: &PersistedRegistry) -> ValidationResult {
    let check = || {
        let identifier = value.trim();
        if identifier.is_empty() {
            return Err(Violation::IdentifierRequired);
        }
        if registry.contains(identifier) {
            return Err(Violation::IdentifierTaken);
        }
        Ok(())
    };
    check().into()
}

/// Email must be present and well formed.
///
/// Surrounding whitespace is ignored, the way an email input sanitizes its value.
pub fn validate_email(value: &str) -> ValidationResult {
    let check = || {
        let email = value.trim();
        if email.is_empty() {
            return Err(Violation::EmailRequired);
        }
        if !is_email_address(email) {
            return Err(Violation::EmailMalformed);
        }
        Ok(())
    };
    check().into()
}

/// Secret strength rules. Length counts characters, not bytes.
pub fn validate_secret(value: &str, policy: &PolicyConfig) -> ValidationResult {
    let check = || {
        if value.is_empty() {
            return Err(Violation::SecretRequired);
        }
        if value.chars().count() < policy.min_secret_length {
            return Err(Violation::SecretTooShort { min: policy.min_secret_length });
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(Violation::SecretMissingUppercase);
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(Violation::SecretMissingLowercase);
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return Err(Violation::SecretMissingDigit);
        }
        if value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Violation::SecretMissingSpecial);
        }
        Ok(())
    };
    check().into()
}

/// Confirmation must be present and byte-for-byte equal to the secret.
pub fn validate_confirmation(value: &str, secret: &str) -> ValidationResult {
    let check = || {
        if value.is_empty() {
            return Err(Violation::ConfirmationRequired);
        }
        if value != secret {
            return Err(Violation::ConfirmationMismatch);
        }
        Ok(())
    };
    check().into()
}

// Local-part characters allowed besides ASCII alphanumerics.
const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_LABEL_LEN: usize = 63;

/// `local@domain` where the domain has at least two dot-separated labels.
fn is_email_address(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local.chars().all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c));

    local_ok && domain.contains('.') && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
