//! # Domain Models
//!
//! Pure data types for the registration form with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O and no rule evaluation, just data, canonical texts and config shapes.

pub mod config;
pub mod constants;
pub mod field;
pub mod validation;

pub use field::{FieldKind, RegistrationInput};
pub use validation::{ValidationResult, Violation};
