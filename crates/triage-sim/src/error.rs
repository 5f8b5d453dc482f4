use thiserror::Error;

use triage_core::{Tick, TriageError};
use triage_spatial::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] TriageError),

    #[error("grid invariant violated: {0}")]
    Grid(#[from] GridError),

    #[error("simulation aborted during tick {tick}; the model can no longer be stepped")]
    Poisoned { tick: Tick },
}

pub type SimResult<T> = Result<T, SimError>;
