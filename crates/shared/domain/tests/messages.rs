use signup_domain::constants::SUCCESS_MESSAGE;
use signup_domain::{FieldKind, ValidationResult, Violation};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn messages_match_the_published_texts() {
    let table = [
        (Violation::IdentifierRequired, "Username is required"),
        (Violation::IdentifierTaken, "This username is already taken. Please choose another."),
        (Violation::EmailRequired, "Email is required."),
        (Violation::EmailMalformed, "Please enter a valid email address."),
        (Violation::SecretRequired, "Password is required."),
        (Violation::SecretTooShort { min: 10 }, "Password must be at least 10 characters long."),
        (Violation::SecretMissingUppercase, "Password must include at least one uppercase letter."),
        (Violation::SecretMissingLowercase, "Password must include at least one lowercase letter."),
        (Violation::SecretMissingDigit, "Password must include at least one number."),
        (Violation::SecretMissingSpecial, "Password must include at least one special character."),
        (Violation::ConfirmationRequired, "Please confirm your password."),
        (Violation::ConfirmationMismatch, "Passwords do not match."),
    ];

    for (violation, text) in table {
        assert_eq!(violation.message(), text);
        assert_eq!(violation.to_string(), text);
    }
    assert_eq!(SUCCESS_MESSAGE, "Registration successful!");
}

#[test]
fn violations_report_their_field() {
    assert_eq!(Violation::IdentifierTaken.field(), FieldKind::Identifier);
    assert_eq!(Violation::EmailMalformed.field(), FieldKind::Email);
    assert_eq!(Violation::SecretTooShort { min: 3 }.field(), FieldKind::Secret);
    assert_eq!(Violation::ConfirmationMismatch.field(), FieldKind::SecretConfirmation);
}

#[test]
fn valid_result_has_empty_message() {
    assert!(ValidationResult::VALID.is_valid());
    assert_eq!(ValidationResult::VALID.message(), "");

    let failed = ValidationResult::fail(Violation::EmailRequired);
    assert!(!failed.is_valid());
    assert_eq!(failed.violation(), Some(Violation::EmailRequired));
}

#[test]
fn field_order_is_the_focus_priority() {
    let iterated: Vec<FieldKind> = FieldKind::iter().collect();
    assert_eq!(iterated, FieldKind::ORDER);
    assert!(FieldKind::Identifier < FieldKind::SecretConfirmation);
}

#[test]
fn field_names_parse_from_form_ids() {
    assert_eq!(FieldKind::from_str("username").unwrap(), FieldKind::Identifier);
    assert_eq!(FieldKind::from_str("email").unwrap(), FieldKind::Email);
    assert_eq!(FieldKind::from_str("password").unwrap(), FieldKind::Secret);
    assert_eq!(FieldKind::from_str("confirmPassword").unwrap(), FieldKind::SecretConfirmation);
    assert_eq!(FieldKind::Identifier.to_string(), "username");
    assert!(FieldKind::from_str("nickname").is_err());
}
