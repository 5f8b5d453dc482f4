//! In-memory data collection.

use triage_agent::AgentStore;
use triage_core::{AgentId, Tick};
use triage_sim::{EfficiencyReport, SimObserver};
use triage_spatial::SpatialGrid;

use crate::row::{EfficiencyRow, PatientTtlRow};

/// Keeps the per-tick efficiency series and every patient snapshot row.
#[derive(Debug, Default, Clone)]
pub struct MetricsCollector {
    efficiency: Vec<EfficiencyRow>,
    patients:   Vec<PatientTtlRow>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per observed tick, in tick order.
    pub fn efficiency(&self) -> &[EfficiencyRow] {
        &self.efficiency
    }

    pub fn patient_rows(&self) -> &[PatientTtlRow] {
        &self.patients
    }

    /// Most recent efficiency value, if any tick was observed.
    pub fn latest_efficiency(&self) -> Option<f64> {
        self.efficiency.last().map(|row| row.efficiency)
    }

    /// `(tick, ttl)` for one patient across all snapshots.
    pub fn ttl_history(&self, agent: AgentId) -> Vec<(u64, i32)> {
        self.patients
            .iter()
            .filter(|row| row.agent_id == agent.0)
            .map(|row| (row.tick, row.ttl))
            .collect()
    }
}

impl SimObserver for MetricsCollector {
    fn on_tick_start(&mut self, tick: Tick, report: &EfficiencyReport) {
        self.efficiency.push(EfficiencyRow::new(tick, report));
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, _grid: &SpatialGrid) {
        self.patients.extend(PatientTtlRow::collect(tick, agents));
    }
}
