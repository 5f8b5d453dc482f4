//! Doctor-efficiency metric.
//!
//! ```text
//! efficiency = saved / (dead + saved)   if dead > 0
//!            = 1                        otherwise
//! ```
//!
//! `saved` counts living patients whose TTL is exactly the healed value;
//! `dead` counts dead patients.  Recomputed from scratch on every call.

use triage_agent::{AgentStore, PatientState};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EfficiencyReport {
    pub saved:      usize,
    pub dead:       usize,
    /// Living patients, saved or not.
    pub alive:      usize,
    /// Always in `[0, 1]`.
    pub efficiency: f64,
}

impl EfficiencyReport {
    /// Count `agents` and derive the efficiency value.
    pub fn measure(agents: &AgentStore, healed_ttl: i32) -> Self {
        let mut saved = 0;
        let mut dead = 0;
        let mut alive = 0;
        for (_, patient) in agents.patients() {
            if !patient.is_alive() {
                dead += 1;
                continue;
            }
            alive += 1;
            if is_saved(patient, healed_ttl) {
                saved += 1;
            }
        }
        Self { saved, dead, alive, efficiency: efficiency(saved, dead) }
    }
}

#[inline]
fn is_saved(patient: &PatientState, healed_ttl: i32) -> bool {
    patient.ttl() == healed_ttl
}

/// `saved / (dead + saved)`, or 1 while nobody has died.
pub fn efficiency(saved: usize, dead: usize) -> f64 {
    if dead == 0 {
        1.0
    } else {
        saved as f64 / (dead + saved) as f64
    }
}
