//! Error types for estimator-core.

use std::fmt;

use thiserror::Error;

/// A single form field that failed validation, with the reason it was
/// rejected. Callers use the field name to highlight the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Errors produced by the quote engine.
///
/// Every variant is returned as a value, never thrown across a component
/// boundary, and every error path leaves the ledger and catalog unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    /// One or more required form fields are missing or out of range. The
    /// rule that raised it produced no items; the caller re-prompts the
    /// same form.
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// A business rule was violated (distinct from a missing field); the
    /// message is user-facing.
    #[error("{0}")]
    DomainConstraint(String),

    /// A catalog lookup for an unknown option id. The form should only ever
    /// offer catalog-listed options, so this is an integration fault and is
    /// fatal to the operation.
    #[error("unknown catalog option: {0}")]
    OptionNotFound(String),

    /// Required client fields are missing at submission time. Blocks the
    /// submission path only; ledger items are untouched.
    #[error("client details incomplete: missing {}", .0.join(", "))]
    ClientIncomplete(Vec<&'static str>),

    /// A line item with this id already exists in the ledger. Existing
    /// items are never silently rewritten or merged.
    #[error("duplicate line item id: {0}")]
    DuplicateItem(String),

    /// Submission was attempted with no items on the quote.
    #[error("cannot submit an empty quote")]
    EmptyQuote,
}

impl QuoteError {
    /// Shorthand for a single-field validation error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        QuoteError::Validation(vec![FieldError::new(field, reason)])
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
