//! The module contains the errors the ledger can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when an insert candidate is rejected.
//!
//! [`Validation`]: LedgerError::Validation
use thiserror::Error;

/// A rejected field together with the reason it was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Ledger custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// The insert candidate was rejected. Carries every offending field;
    /// nothing was stored.
    #[error("invalid guest data")]
    Validation(Vec<FieldError>),
}
