//! Error types for opslog.

use thiserror::Error;

use crate::backend::LogKind;

/// Result type alias using opslog's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for opslog operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A formatter asked for a record kind that has no spec in the active
    /// call context. This is a programming error (formatting outside a
    /// façade call), not a data-quality issue: a spec that is present but
    /// partially empty resolves via defaults instead.
    #[error("no {0} spec present in the active call context")]
    MissingRequiredSpec(LogKind),

    /// Invalid input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
