//! The `Sim` struct and its tick loop.

use triage_agent::{AgentKind, AgentStore, AgentView, PatientEvent};
use triage_core::{AgentId, SimRng, Tick, TriageConfig, TriageError};
use triage_schedule::RandomActivation;
use triage_spatial::{GridError, PathPlanner, SpatialGrid};

use crate::{doctor, DoctorOutcome, EfficiencyReport, SimError, SimObserver, SimResult};

/// What one agent activation did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AgentOutcome {
    Patient(PatientEvent),
    Doctor(DoctorOutcome),
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation model: grid, population, scheduler, and the single RNG.
///
/// State is only reachable read-only from outside; the one way to mutate it
/// is [`step`](Self::step) (or the observed/run variants built on it).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathPlanner> {
    pub(crate) config:   TriageConfig,
    pub(crate) tick:     Tick,
    pub(crate) agents:   AgentStore,
    pub(crate) grid:     SpatialGrid,
    pub(crate) schedule: RandomActivation,
    pub(crate) rng:      SimRng,
    pub(crate) planner:  P,
    /// Set when a tick aborted part-way; the model refuses further steps.
    pub(crate) poisoned: Option<Tick>,
}

impl<P: PathPlanner> Sim<P> {
    pub(crate) fn from_parts(
        config:   TriageConfig,
        tick:     Tick,
        agents:   AgentStore,
        grid:     SpatialGrid,
        schedule: RandomActivation,
        rng:      SimRng,
        planner:  P,
    ) -> Self {
        Self { config, tick, agents, grid, schedule, rng, planner, poisoned: None }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance exactly one tick.
    pub fn step(&mut self) -> SimResult<()> {
        self.step_observed(&mut crate::NoopObserver)
    }

    /// Advance one tick, reporting to `observer`.
    pub fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if let Some(tick) = self.poisoned {
            return Err(SimError::Poisoned { tick });
        }
        let now = self.tick;

        let report = self.efficiency_report();
        observer.on_tick_start(now, &report);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents, &self.grid);
        }

        let order = self.schedule.next_order(&mut self.rng);
        for &agent in &order {
            if let Err(e) = self.step_agent(agent) {
                log::error!("tick {now} aborted while stepping {agent}: {e}");
                self.poisoned = Some(now);
                return Err(e);
            }
        }

        observer.on_tick_end(now, order.len());
        self.tick = now.next();
        Ok(())
    }

    /// Run exactly `n` ticks from the current position.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer)?;
        }
        Ok(())
    }

    /// Run from the current tick to `config.total_ticks`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick.0 < self.config.total_ticks {
            self.step_observed(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    #[inline]
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// `true` once a tick has aborted.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }

    /// Read-only view of one agent.
    pub fn agent(&self, id: AgentId) -> Option<AgentView<'_>> {
        let kind = self.agents.kind(id)?;
        let pos = self.grid.position(id)?;
        Some(AgentView { id, pos, kind })
    }

    /// Views of every agent, ascending id.
    pub fn views(&self) -> impl Iterator<Item = AgentView<'_>> + '_ {
        self.agents.agent_ids().filter_map(|id| self.agent(id))
    }

    /// Efficiency counts for the current state.
    pub fn efficiency_report(&self) -> EfficiencyReport {
        EfficiencyReport::measure(&self.agents, self.config.healed_ttl)
    }

    /// Current doctor efficiency, in `[0, 1]`.
    pub fn efficiency(&self) -> f64 {
        self.efficiency_report().efficiency
    }

    // ── Agent activation ──────────────────────────────────────────────────

    pub(crate) fn step_agent(&mut self, agent: AgentId) -> SimResult<AgentOutcome> {
        match self.agents.kind_mut(agent) {
            Some(AgentKind::Patient(patient)) => {
                let event = patient.step(self.config.decay);
                if event == PatientEvent::Died {
                    let pos = self.grid.position(agent).ok_or(GridError::NotPlaced(agent))?;
                    log::debug!("{agent} died at {pos} during tick {}", self.tick);
                }
                Ok(AgentOutcome::Patient(event))
            }
            Some(AgentKind::Doctor(_)) => {
                let outcome = doctor::step(
                    agent,
                    &mut self.grid,
                    &mut self.agents,
                    &mut self.rng,
                    &self.planner,
                    &self.config,
                )?;
                Ok(AgentOutcome::Doctor(outcome))
            }
            None => Err(TriageError::AgentNotFound(agent).into()),
        }
    }
}
