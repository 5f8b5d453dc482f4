//! `triage-output`: metric collection and export for the triage simulation.
//!
//! | Type                 | Role                                                     |
//! |----------------------|----------------------------------------------------------|
//! | [`MetricsCollector`] | In-memory observer: efficiency series + patient TTL rows |
//! | [`SimOutputObserver`]| Observer that streams rows into any [`OutputWriter`]     |
//! | [`CsvWriter`]        | `efficiency.csv`, `patient_ttl.csv`                      |
//!
//! Only metrics leave the model; run state is never persisted.
//!
//! # Usage
//!
//! ```rust,ignore
//! use triage_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod collector;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use collector::MetricsCollector;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EfficiencyRow, PatientTtlRow};
pub use writer::OutputWriter;
