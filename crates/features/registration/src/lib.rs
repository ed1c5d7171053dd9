//! Registration feature slice.
//!
//! * [`validators`]: the four pure field rules.
//! * [`registry`]: previously used identifiers plus the last one, backed by a
//!   [`KeyValueStore`](signup_storage::KeyValueStore).
//! * [`form`]: [`RegistrationForm`], which runs validators on input and submit and
//!   drives a [`FormView`].
//!
//! ```rust
//! use signup_domain::FieldKind;
//! use signup_domain::config::PolicyConfig;
//! use signup_registration::{InMemoryView, Registry, RegistryKeys, RegistrationForm, SubmitOutcome};
//! use signup_storage::MemoryStore;
//!
//! let registry = Registry::load(MemoryStore::new(), RegistryKeys::default()).unwrap();
//! let mut form = RegistrationForm::open(InMemoryView::default(), registry, PolicyConfig::default());
//!
//! form.input(FieldKind::Identifier, "alice");
//! form.input(FieldKind::Email, "alice@example.com");
//! form.input(FieldKind::Secret, "Abcdefgh1!");
//! form.input(FieldKind::SecretConfirmation, "Abcdefgh1!");
//!
//! let outcome = form.submit().unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Registered { .. }));
//! assert_eq!(form.registry().last_identifier(), Some("alice"));
//! ```

mod error;
pub mod form;
pub mod registry;
pub mod validators;
pub mod view;

pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::form::{Dispatched, RegistrationForm, SubmitOutcome};
pub use crate::registry::{PersistedRegistry, Registry, RegistryKeys};
pub use crate::view::{FormEvent, FormView, InMemoryView};
