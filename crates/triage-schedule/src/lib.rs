//! `triage-schedule`: per-tick agent activation order.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`activation`]  | `RandomActivation`                                    |
//!
//! # Activation model
//!
//! Every tick, every agent is activated exactly once.  The order is a fresh
//! uniform permutation drawn from the simulation's `SimRng`, independent of
//! the previous tick's order:
//!
//! ```text
//! order = shuffle(copy(population))
//! for agent in order: step(agent)      // sequential; later agents see
//!                                      // earlier agents' effects
//! ```

pub mod activation;

#[cfg(test)]
mod tests;

pub use activation::RandomActivation;
