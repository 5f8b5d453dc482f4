//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use triage_agent::AgentStore;
use triage_core::Tick;
use triage_sim::{EfficiencyReport, SimObserver};
use triage_spatial::SpatialGrid;

use crate::row::{EfficiencyRow, PatientTtlRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams the efficiency series and patient
/// snapshots into any [`OutputWriter`].
///
/// Observer callbacks return nothing, so the first writer error is stored
/// and later writes are still attempted.  Check
/// [`take_error`][Self::take_error] once the run returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, tick: Tick, report: &EfficiencyReport) {
        let result = self.writer.write_efficiency(&EfficiencyRow::new(tick, report));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, _grid: &SpatialGrid) {
        let rows = PatientTtlRow::collect(tick, agents);
        if !rows.is_empty() {
            let result = self.writer.write_patients(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
