//! Top-level simulation configuration.
//!
//! `TriageConfig` carries every tunable of a run.  It is plain data: the
//! application crate builds it (or deserialises it with the `serde` feature)
//! and hands it to `SimBuilder`, which calls [`TriageConfig::validate`]
//! before allocating anything.

use crate::{TriageError, TriageResult};

/// Lowest injury level drawn for a new patient.
pub const MIN_INJURY: u8 = 1;
/// Highest injury level drawn for a new patient.
pub const MAX_INJURY: u8 = 10;

// ── DecayRule ─────────────────────────────────────────────────────────────────

/// How much TTL a living patient loses per step, as a function of its
/// injury level.  All variants are non-negative.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecayRule {
    /// `injury / 2`, truncated.
    #[default]
    HalfInjury,
    /// `injury`.
    FullInjury,
    /// `injury * numerator / denominator`, truncated.
    Scaled { numerator: u32, denominator: u32 },
}

impl DecayRule {
    /// TTL lost in one step by a patient with `injury`.
    #[inline]
    pub fn amount(self, injury: u8) -> i32 {
        let injury = injury as i64;
        let amount = match self {
            DecayRule::HalfInjury => injury / 2,
            DecayRule::FullInjury => injury,
            DecayRule::Scaled { numerator, denominator } => {
                injury * numerator as i64 / denominator.max(1) as i64
            }
        };
        amount.min(i32::MAX as i64) as i32
    }
}

// ── TriageConfig ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriageConfig {
    /// Grid width in cells.  Must be > 0.
    pub width: u32,

    /// Grid height in cells.  Must be > 0.
    pub height: u32,

    /// Doctors created at construction.
    pub doctor_count: u32,

    /// Patients created at construction.
    pub patient_count: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Chebyshev radius a doctor scans when choosing a patient.  The default
    /// covers the whole default board.
    pub search_radius: u32,

    /// `K` in `ttl = K / injury`.  Must be > 0.
    pub ttl_constant: i32,

    /// TTL given by a treatment.  A living patient with exactly this TTL
    /// counts as saved.  Must be > 0.
    pub healed_ttl: i32,

    /// Per-step TTL decrement.
    pub decay: DecayRule,

    /// Doctor movement speed.  Carried for presentation; movement is always
    /// one cell per tick.
    pub doctor_speed: u32,

    /// Observer snapshot cadence in ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            width:                 15,
            height:                15,
            doctor_count:          2,
            patient_count:         2,
            seed:                  42,
            total_ticks:           100,
            search_radius:         15,
            ttl_constant:          99,
            healed_ttl:            100,
            decay:                 DecayRule::HalfInjury,
            doctor_speed:          5,
            output_interval_ticks: 1,
        }
    }
}

impl TriageConfig {
    /// Number of grid cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total population size.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.doctor_count as usize + self.patient_count as usize
    }

    /// Initial TTL of a patient with `injury`.
    #[inline]
    pub fn initial_ttl(&self, injury: u8) -> i32 {
        self.ttl_constant / injury.max(MIN_INJURY) as i32
    }

    /// Reject invalid parameters.  Nothing is clamped.
    pub fn validate(&self) -> TriageResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TriageError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(TriageError::Config(format!(
                "grid dimensions {}x{} exceed the coordinate range",
                self.width, self.height
            )));
        }
        if self.cell_count() >= u32::MAX as usize {
            return Err(TriageError::Config(format!(
                "grid of {}x{} cells overflows the cell id space",
                self.width, self.height
            )));
        }
        if self.agent_count() >= u32::MAX as usize {
            return Err(TriageError::Config(format!(
                "population of {} agents overflows the agent id space",
                self.agent_count()
            )));
        }
        if self.ttl_constant <= 0 {
            return Err(TriageError::Config(format!(
                "ttl_constant must be positive, got {}",
                self.ttl_constant
            )));
        }
        if self.healed_ttl <= 0 {
            return Err(TriageError::Config(format!(
                "healed_ttl must be positive, got {}",
                self.healed_ttl
            )));
        }
        if let DecayRule::Scaled { denominator: 0, .. } = self.decay {
            return Err(TriageError::Config(
                "scaled decay denominator must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
