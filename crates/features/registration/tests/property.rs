use proptest::prelude::*;
use signup_domain::Violation;
use signup_domain::config::PolicyConfig;
use signup_registration::validators::{
    validate_confirmation, validate_email, validate_identifier, validate_secret,
};
use signup_registration::{PersistedRegistry, Registry, RegistryKeys};
use signup_storage::{KeyValueStore, MemoryStore};

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,24}"
}

proptest! {
    #[test]
    fn unused_identifiers_are_valid(
        candidate in identifier(),
        used in proptest::collection::vec(identifier(), 0..8),
    ) {
        prop_assume!(!used.contains(&candidate));
        let registry = PersistedRegistry::from_parts(None, used);
        prop_assert!(validate_identifier(&candidate, &registry).is_valid());
    }

    #[test]
    fn used_identifiers_are_always_taken(
        used in proptest::collection::vec(identifier(), 1..8),
        pick in any::<proptest::sample::Index>(),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let chosen = pick.get(&used).clone();
        let registry = PersistedRegistry::from_parts(None, used);
        let padded = format!("{left}{chosen}{right}");
        prop_assert_eq!(
            validate_identifier(&padded, &registry).violation(),
            Some(Violation::IdentifierTaken)
        );
    }

    #[test]
    fn strings_without_at_sign_are_not_emails(value in "[^@]{1,40}") {
        prop_assert!(!validate_email(&value).is_valid());
    }

    #[test]
    fn undotted_domains_are_not_emails(local in "[a-z0-9]{1,12}", domain in "[a-z0-9]{1,12}") {
        let email = format!("{local}@{domain}");
        prop_assert_eq!(validate_email(&email).violation(), Some(Violation::EmailMalformed));
    }

    #[test]
    fn short_secrets_fail_on_length(secret in "[A-Za-z0-9!?#]{1,9}") {
        prop_assert_eq!(
            validate_secret(&secret, &PolicyConfig::default()).violation(),
            Some(Violation::SecretTooShort { min: 10 })
        );
    }

    #[test]
    fn complete_secrets_pass(body in "[a-z]{7,20}", digit in "[0-9]", special in "[!@#$%^&*]") {
        let secret = format!("A{body}{digit}{special}");
        prop_assert!(validate_secret(&secret, &PolicyConfig::default()).is_valid());
        prop_assert!(validate_confirmation(&secret, &secret).is_valid());
    }

    #[test]
    fn confirmation_differs_means_mismatch(secret in "[ -~]{1,20}", other in "[ -~]{1,20}") {
        prop_assume!(secret != other);
        prop_assert_eq!(
            validate_confirmation(&other, &secret).violation(),
            Some(Violation::ConfirmationMismatch)
        );
    }

    #[test]
    fn loading_twice_yields_identical_contents(
        used in proptest::collection::vec(identifier(), 0..8),
        last in proptest::option::of(identifier()),
    ) {
        let mut store = MemoryStore::new();
        store.set("registeredUsernames", &serde_json::to_string(&used).unwrap()).unwrap();
        if let Some(last) = &last {
            store.set("savedUsername", last).unwrap();
        }

        let first = PersistedRegistry::read_from(&store, &RegistryKeys::default()).unwrap();
        let second = Registry::load(&mut store, RegistryKeys::default()).unwrap();
        prop_assert_eq!(&first, second.state());
        prop_assert_eq!(first.last_identifier(), last.as_deref());
    }
}
