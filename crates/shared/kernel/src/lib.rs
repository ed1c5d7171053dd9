//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,ignore
//! use signup_kernel::config::load_config;
//! use signup_kernel::domain::config::SignupConfig;
//!
//! let cfg: SignupConfig = load_config(Some("signup.toml")).unwrap_or_default();
//! ```

pub mod config;

pub use signup_domain as domain;
