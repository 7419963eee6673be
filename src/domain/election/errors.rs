//! Errors raised while resolving a page request to its canonical form.

use thiserror::Error;

/// Terminal resolution failures.
///
/// Both variants are client-input errors. They are never retried and the
/// HTTP boundary renders them as "not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown state: {0}")]
    UnknownState(String),
}

impl ResolutionError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ResolutionError::NotFound(what.into())
    }
}
