//! # Validation Orchestrator
//!
//! [`RegistrationForm`] owns the view, the registry and the policy. Views call
//! [`RegistrationForm::validate_field`] on every input change and
//! [`RegistrationForm::submit`] on submission, or route both through
//! [`RegistrationForm::dispatch`].
//!
//! Everything runs synchronously inside the call; there is no background work.

use crate::error::RegistrationError;
use crate::registry::Registry;
use crate::validators;
use crate::view::{FormEvent, FormView};
use signup_domain::config::PolicyConfig;
use signup_domain::constants::SUCCESS_MESSAGE;
use signup_domain::{FieldKind, RegistrationInput, ValidationResult, Violation};
use signup_storage::KeyValueStore;
use tracing::{debug, info};

/// Result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All four fields passed and the identifier was persisted.
    Registered { identifier: String },
    /// At least one field failed. `focus` is the first failing field in form order;
    /// `failures` lists every failure in that same order.
    Rejected { focus: FieldKind, failures: Vec<Violation> },
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}

/// What [`RegistrationForm::dispatch`] did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Validated { field: FieldKind, valid: bool },
    Submitted(SubmitOutcome),
}

/// The registration form controller.
#[derive(Debug)]
pub struct RegistrationForm<V, S> {
    view: V,
    registry: Registry<S>,
    policy: PolicyConfig,
}

impl<V: FormView, S: KeyValueStore> RegistrationForm<V, S> {
    /// Binds the form to a view and pre-fills the identifier with the last one used.
    pub fn open(mut view: V, registry: Registry<S>, policy: PolicyConfig) -> Self {
        if let Some(last) = registry.last_identifier() {
            view.set_field_value(FieldKind::Identifier, last);
            debug!(identifier = last, "Pre-filled identifier from registry");
        }
        Self { view, registry, policy }
    }

    /// Routes a view event to the matching operation.
    ///
    /// # Errors
    /// Propagates [`RegistrationError`] from [`RegistrationForm::submit`].
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Dispatched, RegistrationError> {
        match event {
            FormEvent::Input(field) => {
                Ok(Dispatched::Validated { field, valid: self.validate_field(field) })
            },
            FormEvent::Submit => self.submit().map(Dispatched::Submitted),
        }
    }

    /// Writes `value` into the view, then handles it as an input event.
    pub fn input(&mut self, field: FieldKind, value: &str) -> bool {
        self.view.set_field_value(field, value);
        self.validate_field(field)
    }

    /// Validates one field against the view's current values and shows the message.
    ///
    /// A secret change also re-validates the confirmation, since its validity
    /// depends on the secret. The reverse does not hold. The return value is the
    /// validity of `field` alone.
    pub fn validate_field(&mut self, field: FieldKind) -> bool {
        let input = self.snapshot();
        let valid = self.check(field, &input).is_valid();

        if field == FieldKind::Secret {
            let _ = self.check(FieldKind::SecretConfirmation, &input);
        }
        valid
    }

    /// Validates all four fields in form order and either persists the identifier
    /// or moves focus to the first failing field.
    ///
    /// On success the view gets a success notice, a reset and cleared messages.
    ///
    /// # Errors
    /// Returns [`RegistrationError`] only when persisting the registry fails; the
    /// view is left untouched beyond the per-field messages in that case.
    pub fn submit(&mut self) -> Result<SubmitOutcome, RegistrationError> {
        let input = self.snapshot();

        let failures: Vec<Violation> = FieldKind::ORDER
            .into_iter()
            .filter_map(|field| self.check(field, &input).violation())
            .collect();

        if let Some(first) = failures.first() {
            let focus = first.field();
            self.view.focus_field(focus);
            debug!(%focus, failed = failures.len(), "Submission rejected");
            return Ok(SubmitOutcome::Rejected { focus, failures });
        }

        let identifier = input.identifier.trim().to_owned();
        self.registry.record_successful_registration(&identifier)?;

        self.view.notify_success(SUCCESS_MESSAGE);
        self.view.reset_form();
        for field in FieldKind::ORDER {
            self.view.set_error_message(field, "");
        }

        info!(identifier = %identifier, "Registration submitted");
        Ok(SubmitOutcome::Registered { identifier })
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    pub fn into_parts(self) -> (V, Registry<S>) {
        (self.view, self.registry)
    }

    fn snapshot(&self) -> RegistrationInput {
        let mut input = RegistrationInput::default();
        for field in FieldKind::ORDER {
            input.set(field, self.view.field_value(field));
        }
        input
    }

    fn check(&mut self, field: FieldKind, input: &RegistrationInput) -> ValidationResult {
        let result = validators::validate_field(field, input, self.registry.state(), &self.policy);
        if let Some(violation) = result.violation() {
            debug!(%field, ?violation, "Field rejected");
        }
        self.view.set_error_message(field, &result.message());
        result
    }
}
