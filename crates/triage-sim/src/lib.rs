//! `triage-sim`: tick loop orchestrator for the triage grid simulation.
//!
//! # Tick loop
//!
//! ```text
//! step():
//!   1. Measure   efficiency report from the pre-tick state; observers see
//!                it, plus a snapshot every output_interval_ticks.
//!   2. Order     RandomActivation shuffles the whole population.
//!   3. Activate  each agent steps once, sequentially, in that order:
//!                  Patient → decay / die
//!                  Doctor  → triage, plan (A*), move one cell, treat
//!                Later agents see earlier agents' effects.
//!   4. Advance   tick += 1.
//! ```
//!
//! A failure inside step 3 aborts the tick and poisons the model; every later
//! `step` returns [`SimError::Poisoned`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use triage_core::TriageConfig;
//! use triage_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(TriageConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("efficiency: {:.2}", sim.efficiency());
//! ```

pub mod builder;
pub mod doctor;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use builder::{SimBuilder, Spawn};
pub use doctor::DoctorOutcome;
pub use error::{SimError, SimResult};
pub use metrics::EfficiencyReport;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
