//! `RandomActivation`: shuffle-then-iterate scheduler.
//!
//! The scheduler only decides order.  Stepping is done by the caller, which
//! owns the agents and the grid, so no agent state is borrowed across the
//! whole tick.

use triage_core::{AgentId, SimRng, Tick};

#[derive(Clone, Debug, Default)]
pub struct RandomActivation {
    /// Every scheduled agent, in insertion order.  Dead agents stay here.
    agents: Vec<AgentId>,
    /// Ticks for which an order has been handed out.
    steps:  u64,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule every agent in `agents`, in order.
    pub fn from_agents(agents: impl IntoIterator<Item = AgentId>) -> Self {
        Self { agents: agents.into_iter().collect(), steps: 0 }
    }

    /// Add `agent` to the population.
    pub fn add(&mut self, agent: AgentId) {
        self.agents.push(agent);
    }

    /// Number of scheduled agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The scheduled population in insertion order.
    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    /// Number of orders handed out so far, as a tick.
    pub fn steps(&self) -> Tick {
        Tick(self.steps)
    }

    /// Activation order for the next tick: a copy of the population shuffled
    /// with `rng`.  Each call advances the step counter.
    pub fn next_order(&mut self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order = self.agents.clone();
        rng.shuffle(&mut order);
        self.steps += 1;
        order
    }
}
