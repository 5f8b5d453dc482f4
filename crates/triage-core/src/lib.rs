//! `triage-core`: foundational types for the triage grid simulation.
//!
//! This crate is a dependency of every other `triage-*` crate.  It has no
//! `triage-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`pos`]         | `GridPos`, toroidal wrapping and distances            |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (the single seeded randomness source)        |
//! | [`config`]      | `TriageConfig`, `DecayRule`                           |
//! | [`error`]       | `TriageError`, `TriageResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DecayRule, TriageConfig, MAX_INJURY, MIN_INJURY};
pub use error::{TriageError, TriageResult};
pub use ids::{AgentId, CellId};
pub use pos::GridPos;
pub use rng::SimRng;
pub use time::Tick;
