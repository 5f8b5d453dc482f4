//! The closed set of agent variants.

use crate::PatientState;

/// Payload-free discriminant of [`AgentKind`], for display and filtering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentRole {
    Patient,
    Doctor,
}

impl AgentRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentRole::Patient => "patient",
            AgentRole::Doctor  => "doctor",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Doctors carry no health state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoctorState {
    /// Nominal movement speed.  Movement is one cell per tick regardless.
    pub speed: u32,
}

/// Per-variant agent state.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Patient(PatientState),
    Doctor(DoctorState),
}

impl AgentKind {
    #[inline]
    pub fn role(&self) -> AgentRole {
        match self {
            AgentKind::Patient(_) => AgentRole::Patient,
            AgentKind::Doctor(_)  => AgentRole::Doctor,
        }
    }

    #[inline]
    pub fn as_patient(&self) -> Option<&PatientState> {
        match self {
            AgentKind::Patient(p) => Some(p),
            AgentKind::Doctor(_)  => None,
        }
    }

    #[inline]
    pub fn as_patient_mut(&mut self) -> Option<&mut PatientState> {
        match self {
            AgentKind::Patient(p) => Some(p),
            AgentKind::Doctor(_)  => None,
        }
    }

    /// `true` for a patient that has not died.
    #[inline]
    pub fn is_living_patient(&self) -> bool {
        self.as_patient().is_some_and(PatientState::is_alive)
    }
}
