//! Spatial-subsystem error type.

use thiserror::Error;

use triage_core::{AgentId, CellId};

/// Errors produced by `triage-spatial`.
///
/// `NotPlaced` and `Desync` are invariant violations: the grid and an
/// agent's stored position disagree.  They indicate a defect in the caller,
/// never a recoverable runtime condition.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} are zero or too large")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("agent {0} is not placed on the grid")]
    NotPlaced(AgentId),

    #[error("agent {agent} records {cell} but is not registered there")]
    Desync { agent: AgentId, cell: CellId },
}

pub type GridResult<T> = Result<T, GridError>;
