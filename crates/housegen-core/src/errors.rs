//! Cross-cutting error types for housegen.
//!
//! Crate-specific errors (`ConfigError`, `LandmarkError`, `StoreError`) live in
//! their own crates. The CLI converges everything through `anyhow`.

use thiserror::Error;

/// Errors that can be raised while constructing core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A wire string did not match any variant of a closed enum.
    #[error("Invalid {kind} value: '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
