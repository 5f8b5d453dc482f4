//! Plain data rows produced by the collectors.

use triage_agent::AgentStore;
use triage_core::Tick;
use triage_sim::EfficiencyReport;

/// The efficiency metric at the start of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyRow {
    pub tick:       u64,
    pub efficiency: f64,
    pub saved:      u64,
    pub dead:       u64,
    pub alive:      u64,
}

impl EfficiencyRow {
    pub fn new(tick: Tick, report: &EfficiencyReport) -> Self {
        Self {
            tick:       tick.0,
            efficiency: report.efficiency,
            saved:      report.saved as u64,
            dead:       report.dead as u64,
            alive:      report.alive as u64,
        }
    }
}

/// One patient's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientTtlRow {
    pub agent_id:     u32,
    pub tick:         u64,
    pub injury_level: u8,
    pub ttl:          i32,
    pub alive:        bool,
}

impl PatientTtlRow {
    /// One row per patient in `agents`, ascending id.  Doctors are skipped.
    pub fn collect(tick: Tick, agents: &AgentStore) -> Vec<Self> {
        agents
            .patients()
            .map(|(id, patient)| Self {
                agent_id:     id.0,
                tick:         tick.0,
                injury_level: patient.injury_level(),
                ttl:          patient.ttl(),
                alive:        patient.is_alive(),
            })
            .collect()
    }
}
