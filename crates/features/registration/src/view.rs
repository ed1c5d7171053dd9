//! Presentation adapter seam.
//!
//! The orchestrator never renders anything itself. It reads values and pushes
//! messages, focus and notices through [`FormView`]; a terminal, a GUI binding or a
//! test harness implements it.

use fxhash::FxHashMap;
use signup_domain::{FieldKind, RegistrationInput};

/// Everything the orchestrator needs from whoever displays the form.
pub trait FormView {
    /// Current raw value of `field`. Empty string when blank.
    fn field_value(&self, field: FieldKind) -> String;

    fn set_field_value(&mut self, field: FieldKind, value: &str);

    /// Shows `message` next to `field`; an empty message clears it.
    fn set_error_message(&mut self, field: FieldKind, message: &str);

    fn focus_field(&mut self, field: FieldKind);

    /// Clears every field value.
    fn reset_form(&mut self);

    fn notify_success(&mut self, message: &str);
}

impl<V: FormView + ?Sized> FormView for &mut V {
    fn field_value(&self, field: FieldKind) -> String {
        (**self).field_value(field)
    }

    fn set_field_value(&mut self, field: FieldKind, value: &str) {
        (**self).set_field_value(field, value);
    }

    fn set_error_message(&mut self, field: FieldKind, message: &str) {
        (**self).set_error_message(field, message);
    }

    fn focus_field(&mut self, field: FieldKind) {
        (**self).focus_field(field);
    }

    fn reset_form(&mut self) {
        (**self).reset_form();
    }

    fn notify_success(&mut self, message: &str) {
        (**self).notify_success(message);
    }
}

/// Events a view forwards to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a field changed; the view already holds the new value.
    Input(FieldKind),
    /// The user asked to submit. The view must not run any default submission.
    Submit,
}

/// Headless [`FormView`] that keeps everything in memory.
///
/// Used by the terminal shell and by tests to observe what the orchestrator asked for.
#[derive(Debug, Clone, Default)]
pub struct InMemoryView {
    values: RegistrationInput,
    errors: FxHashMap<FieldKind, String>,
    focused: Option<FieldKind>,
    notices: Vec<String>,
    resets: usize,
}

impl InMemoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn values(&self) -> &RegistrationInput {
        &self.values
    }

    /// Message currently shown for `field`; empty when none.
    #[must_use]
    pub fn error_message(&self, field: FieldKind) -> &str {
        self.errors.get(&field).map_or("", String::as_str)
    }

    /// Fields with a non-empty message, in form order.
    pub fn errors(&self) -> impl Iterator<Item = (FieldKind, &str)> + '_ {
        FieldKind::ORDER.into_iter().filter_map(|field| {
            let message = self.error_message(field);
            (!message.is_empty()).then_some((field, message))
        })
    }

    #[must_use]
    pub const fn focused(&self) -> Option<FieldKind> {
        self.focused
    }

    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// How many times the form has been reset.
    #[must_use]
    pub const fn resets(&self) -> usize {
        self.resets
    }
}

impl FormView for InMemoryView {
    fn field_value(&self, field: FieldKind) -> String {
        self.values.get(field).to_owned()
    }

    fn set_field_value(&mut self, field: FieldKind, value: &str) {
        self.values.set(field, value);
    }

    fn set_error_message(&mut self, field: FieldKind, message: &str) {
        if message.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message.to_owned());
        }
    }

    fn focus_field(&mut self, field: FieldKind) {
        self.focused = Some(field);
    }

    fn reset_form(&mut self) {
        self.values = RegistrationInput::default();
        self.focused = None;
        self.resets += 1;
    }

    fn notify_success(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }
}
