use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One input of the registration form.
///
/// Variant order is the submission order and the focus priority.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldKind {
    #[strum(to_string = "username", serialize = "identifier")]
    #[serde(rename = "username")]
    Identifier,
    Email,
    #[strum(to_string = "password", serialize = "secret")]
    #[serde(rename = "password")]
    Secret,
    #[strum(to_string = "confirmPassword", serialize = "confirm", serialize = "confirmation")]
    #[serde(rename = "confirmPassword")]
    SecretConfirmation,
}

impl FieldKind {
    /// Fixed validation order; the first failing field in it receives focus.
    pub const ORDER: [Self; 4] = [Self::Identifier, Self::Email, Self::Secret, Self::SecretConfirmation];
}

/// Snapshot of the four raw form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub identifier: String,
    pub email: String,
    pub secret: String,
    pub secret_confirmation: String,
}

impl RegistrationInput {
    #[must_use]
    pub fn get(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Identifier => &self.identifier,
            FieldKind::Email => &self.email,
            FieldKind::Secret => &self.secret,
            FieldKind::SecretConfirmation => &self.secret_confirmation,
        }
    }

    pub fn set(&mut self, field: FieldKind, value: impl Into<String>) {
        let slot = match field {
            FieldKind::Identifier => &mut self.identifier,
            FieldKind::Email => &mut self.email,
            FieldKind::Secret => &mut self.secret,
            FieldKind::SecretConfirmation => &mut self.secret_confirmation,
        };
        *slot = value.into();
    }
}
