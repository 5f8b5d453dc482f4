//! Simulation observer trait for progress reporting and data collection.

use triage_agent::AgentStore;
use triage_core::Tick;
use triage_spatial::SpatialGrid;

use crate::EfficiencyReport;

/// Callbacks invoked by [`Sim::step_observed`][crate::Sim::step_observed] and
/// the `run` helpers.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_start(&mut self, tick: Tick, report: &EfficiencyReport) {
///         println!("{tick}: efficiency {:.2}", report.efficiency);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any agent steps, with the metric measured on the
    /// pre-tick state.
    fn on_tick_start(&mut self, _tick: Tick, _report: &EfficiencyReport) {}

    /// Called right after `on_tick_start` every `output_interval_ticks`
    /// ticks, with read-only access to the pre-tick population.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _grid: &SpatialGrid) {}

    /// Called after every agent has stepped.  `stepped` is the number of
    /// activations this tick.
    fn on_tick_end(&mut self, _tick: Tick, _stepped: usize) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
