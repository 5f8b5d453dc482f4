//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `TriageError` into
//! them via `From` impls, so construction-time failures surface unchanged.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `triage-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Invalid construction parameters.  Never clamped, always rejected.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `triage-*` crates.
pub type TriageResult<T> = Result<T, TriageError>;
