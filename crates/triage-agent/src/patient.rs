//! Patient decay/death state machine.
//!
//! ```text
//!            ttl -= decay(injury), still > 0
//!          ┌──────┐
//!          ▼      │
//!        Alive ───┘ ── ttl <= 0 ──▶ Dead (injury := 0; absorbing)
//! ```
//!
//! A patient dies on the step its TTL reaches zero or below, or on its first
//! step if it was created with no TTL left.  Fields are private:
//! the only mutations are [`PatientState::step`] and [`PatientState::heal`],
//! which between them guarantee TTL never rises except by treatment and
//! never changes once `Dead`.

use triage_core::{DecayRule, TriageConfig};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vitality {
    Alive,
    Dead,
}

/// What one step did to a patient.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PatientEvent {
    /// TTL reduced to `ttl`.
    Decayed { ttl: i32 },
    /// TTL had run out; the patient is now dead.
    Died,
    /// Already dead; nothing changed.
    Inert,
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientState {
    injury_level: u8,
    ttl:          i32,
    vitality:     Vitality,
}

impl PatientState {
    /// A living patient with explicit injury and TTL.
    pub fn new(injury_level: u8, ttl: i32) -> Self {
        Self { injury_level, ttl, vitality: Vitality::Alive }
    }

    /// A living patient whose TTL is derived from `injury_level` per `config`.
    pub fn from_injury(injury_level: u8, config: &TriageConfig) -> Self {
        Self::new(injury_level, config.initial_ttl(injury_level))
    }

    #[inline]
    pub fn injury_level(&self) -> u8 {
        self.injury_level
    }

    #[inline]
    pub fn ttl(&self) -> i32 {
        self.ttl
    }

    #[inline]
    pub fn vitality(&self) -> Vitality {
        self.vitality
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.vitality == Vitality::Alive
    }

    /// Advance one tick.
    pub fn step(&mut self, decay: DecayRule) -> PatientEvent {
        match self.vitality {
            Vitality::Dead => PatientEvent::Inert,
            Vitality::Alive if self.ttl <= 0 => self.die(),
            Vitality::Alive => {
                self.ttl = self.ttl.saturating_sub(decay.amount(self.injury_level));
                if self.ttl <= 0 {
                    self.die()
                } else {
                    PatientEvent::Decayed { ttl: self.ttl }
                }
            }
        }
    }

    fn die(&mut self) -> PatientEvent {
        self.injury_level = 0;
        self.vitality = Vitality::Dead;
        PatientEvent::Died
    }

    /// Fully heal: injury 0, TTL `healed_ttl`.  Returns `false` and changes
    /// nothing if the patient is dead.
    pub fn heal(&mut self, healed_ttl: i32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.injury_level = 0;
        self.ttl = healed_ttl;
        true
    }

    /// Colour band for renderers: TTL 1–10 → 1, 11–20 → 2, …, 91–100 → 10.
    /// `None` when dead or outside 1..=100.
    pub fn ttl_decile(&self) -> Option<u8> {
        if !self.is_alive() || !(1..=100).contains(&self.ttl) {
            return None;
        }
        Some(((self.ttl - 1) / 10 + 1) as u8)
    }
}
