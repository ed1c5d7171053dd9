use signup_domain::config::{PolicyConfig, SignupConfig, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let policy = PolicyConfig::default();
    assert_eq!(policy.min_secret_length, 10);

    let storage = StorageConfig::default();
    assert_eq!(storage.last_identifier_key, "savedUsername");
    assert_eq!(storage.identifiers_key, "registeredUsernames");
    assert_eq!(storage.data_dir, std::path::PathBuf::from(".signup"));

    let cfg = SignupConfig::default();
    assert_eq!(cfg.logging.level, "warn");
    assert!(!cfg.logging.json);
    assert!(cfg.logging.directory.is_none());
}

#[test]
fn signup_config_deserializes_partially() {
    let raw = json!({
        "policy": { "min_secret_length": 12 },
        "storage": { "data_dir": "/tmp/signup" }
    });

    let cfg: SignupConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.policy.min_secret_length, 12);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/tmp/signup"));
    assert_eq!(cfg.storage.identifiers_key, "registeredUsernames");
    assert_eq!(cfg.logging.level, "warn");
}
