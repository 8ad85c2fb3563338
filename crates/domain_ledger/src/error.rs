//! Ledger domain errors

use core_kernel::{Amount, AmountError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validation message attached to a form field
///
/// `field` uses the dotted path the form layer binds to, e.g.
/// `lines.2.account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No template with this identifier
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Two templates share an identifier
    #[error("Duplicate template id: {0}")]
    DuplicateTemplate(String),

    /// Template definition is malformed
    #[error("Invalid template {id}: {reason}")]
    InvalidTemplate { id: String, reason: String },

    /// Debits and credits differ
    #[error("Unbalanced entry: debits={debits}, credits={credits}")]
    UnbalancedEntry { debits: Amount, credits: Amount },

    /// Entry would drop below the minimum number of lines
    #[error("A journal entry needs at least {required} lines, found {actual}")]
    MinimumLines { required: usize, actual: usize },

    /// Line index out of range
    #[error("No journal line at index {0}")]
    LineNotFound(usize),

    /// Form failed validation
    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Amount(#[from] AmountError),
}

impl LedgerError {
    pub fn invalid_template(id: impl Into<String>, reason: impl Into<String>) -> Self {
        LedgerError::InvalidTemplate {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            LedgerError::Validation(errors) => errors,
            _ => &[],
        }
    }
}
