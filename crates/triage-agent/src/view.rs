//! Read-only per-agent introspection for presentation layers.

use triage_core::{AgentId, GridPos};

use crate::{AgentKind, AgentRole, PatientState};

/// Borrowed view of one agent: identity, position, and variant state.
#[derive(Copy, Clone, Debug)]
pub struct AgentView<'a> {
    pub id:   AgentId,
    pub pos:  GridPos,
    pub kind: &'a AgentKind,
}

impl<'a> AgentView<'a> {
    #[inline]
    pub fn role(&self) -> AgentRole {
        self.kind.role()
    }

    /// Patient state, or `None` for a doctor.
    #[inline]
    pub fn patient(&self) -> Option<&'a PatientState> {
        self.kind.as_patient()
    }
}
