//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
}
