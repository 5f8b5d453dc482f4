//! `triage-spatial`: toroidal grid, neighbourhood queries, and path planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `SpatialGrid` (multi-occupancy torus)                       |
//! | [`planner`] | `PathPlanner` trait, `GridPath`, `PathNode`, `AStarPlanner` |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::SpatialGrid;
pub use planner::{AStarPlanner, GridPath, PathNode, PathPlanner};
