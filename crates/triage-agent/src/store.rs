//! `AgentStore`: every agent of a run, indexed by `AgentId`.
//!
//! Agents are pushed once at construction and never removed, so an
//! `AgentId` is both a stable identity and a direct `Vec` index.  Dead
//! patients stay in the store, inert.  Positions are not kept here: the
//! spatial grid is the single owner of where each agent stands.

use triage_core::AgentId;

use crate::{AgentKind, AgentRole, PatientState};

#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    kinds: Vec<AgentKind>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { kinds: Vec::with_capacity(capacity) }
    }

    /// Append an agent and return its id (the next index).
    pub fn push(&mut self, kind: AgentKind) -> AgentId {
        let id = AgentId(self.kinds.len() as u32);
        self.kinds.push(kind);
        id
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.kinds.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn kind(&self, agent: AgentId) -> Option<&AgentKind> {
        self.kinds.get(agent.index())
    }

    #[inline]
    pub fn kind_mut(&mut self, agent: AgentId) -> Option<&mut AgentKind> {
        self.kinds.get_mut(agent.index())
    }

    #[inline]
    pub fn role(&self, agent: AgentId) -> Option<AgentRole> {
        self.kind(agent).map(AgentKind::role)
    }

    #[inline]
    pub fn patient(&self, agent: AgentId) -> Option<&PatientState> {
        self.kind(agent).and_then(AgentKind::as_patient)
    }

    #[inline]
    pub fn patient_mut(&mut self, agent: AgentId) -> Option<&mut PatientState> {
        self.kind_mut(agent).and_then(AgentKind::as_patient_mut)
    }

    /// `true` if `agent` exists and is a patient that has not died.
    #[inline]
    pub fn is_living_patient(&self, agent: AgentId) -> bool {
        self.kind(agent).is_some_and(AgentKind::is_living_patient)
    }

    /// All patients with their ids, ascending.
    pub fn patients(&self) -> impl Iterator<Item = (AgentId, &PatientState)> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter_map(|(i, k)| k.as_patient().map(|p| (AgentId(i as u32), p)))
    }

    /// Number of agents with `role`.
    pub fn count_role(&self, role: AgentRole) -> usize {
        self.kinds.iter().filter(|k| k.role() == role).count()
    }
}
