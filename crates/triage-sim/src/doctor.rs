//! Doctor behaviour: triage, one-step movement, treatment.
//!
//! A doctor's step runs in this order, recomputing everything from the live
//! grid (nothing is cached between ticks):
//!
//! 1. **Triage**: among living patients within `search_radius`, pick the
//!    highest injury level; ties go to the lowest `AgentId`.  No candidate
//!    means the doctor does nothing this tick.
//! 2. **Plan**: A* (or the configured planner) from the doctor's cell to the
//!    target's cell.  Living patients other than the target are obstacles.
//! 3. **Move**: one cell along the path.  No path, or already on the
//!    target's cell, means no movement.
//! 4. **Treat**: pick one co-located agent uniformly at random.  A living
//!    patient is fully healed; a doctor or a dead patient is unaffected.

use std::cmp::Reverse;

use triage_agent::AgentStore;
use triage_core::{AgentId, GridPos, SimRng, TriageConfig};
use triage_spatial::{GridError, GridPath, PathPlanner, SpatialGrid};

use crate::SimResult;

/// What a doctor did in one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctorOutcome {
    /// Patient chosen by triage.
    pub target:  Option<AgentId>,
    /// Cell moved into, if the doctor moved.
    pub moved:   Option<GridPos>,
    /// Patient healed this step.
    pub treated: Option<AgentId>,
}

/// Run one doctor step against the live world.
pub fn step<P: PathPlanner + ?Sized>(
    doctor:  AgentId,
    grid:    &mut SpatialGrid,
    agents:  &mut AgentStore,
    rng:     &mut SimRng,
    planner: &P,
    config:  &TriageConfig,
) -> SimResult<DoctorOutcome> {
    let mut outcome = DoctorOutcome::default();
    let here = grid.position(doctor).ok_or(GridError::NotPlaced(doctor))?;

    let Some(target) = select_target(here, grid, agents, config.search_radius) else {
        log::trace!("{doctor} at {here}: no patient to triage");
        return Ok(outcome);
    };
    outcome.target = Some(target);

    let goal = grid.position(target).ok_or(GridError::NotPlaced(target))?;
    match plan_route(here, target, goal, grid, agents, planner) {
        Some(path) => {
            if let Some(next) = path.next_step() {
                outcome.moved = Some(grid.move_agent(doctor, next)?);
            }
        }
        None => log::trace!("{doctor} at {here}: no path to {target} at {goal}"),
    }

    outcome.treated = treat(doctor, grid, agents, rng, config.healed_ttl)?;
    Ok(outcome)
}

/// The living patient within `radius` of `from` with the highest injury
/// level, ties broken by ascending id.
pub fn select_target(
    from:   GridPos,
    grid:   &SpatialGrid,
    agents: &AgentStore,
    radius: u32,
) -> Option<AgentId> {
    let cells = grid.neighborhood(from, radius, true);
    grid.contents_of(&cells)
        .into_iter()
        .filter_map(|id| {
            let patient = agents.patient(id)?;
            patient.is_alive().then(|| (patient.injury_level(), Reverse(id)))
        })
        .max()
        .map(|(_, Reverse(id))| id)
}

/// Plan from `from` to `goal`, treating every living patient except `target`
/// as an obstacle.
pub fn plan_route<P: PathPlanner + ?Sized>(
    from:    GridPos,
    target:  AgentId,
    goal:    GridPos,
    grid:    &SpatialGrid,
    agents:  &AgentStore,
    planner: &P,
) -> Option<GridPath> {
    let blocked = |cell: GridPos| {
        grid.agents_at(cell)
            .iter()
            .any(|&other| other != target && agents.is_living_patient(other))
    };
    planner.plan(grid, from, goal, &blocked)
}

/// Pick one agent sharing the doctor's cell and heal it.  Returns the healed
/// patient, or `None` if the cell held nobody else or the pick could not be
/// healed.
pub fn treat(
    doctor:     AgentId,
    grid:       &SpatialGrid,
    agents:     &mut AgentStore,
    rng:        &mut SimRng,
    healed_ttl: i32,
) -> SimResult<Option<AgentId>> {
    let here = grid.position(doctor).ok_or(GridError::NotPlaced(doctor))?;
    let mates: Vec<AgentId> = grid
        .agents_at(here)
        .iter()
        .copied()
        .filter(|&a| a != doctor)
        .collect();

    let Some(&chosen) = rng.choose(&mates) else {
        return Ok(None);
    };
    let healed = agents
        .patient_mut(chosen)
        .is_some_and(|patient| patient.heal(healed_ttl));
    if healed {
        log::debug!("{doctor} treated {chosen} at {here}");
        Ok(Some(chosen))
    } else {
        Ok(None)
    }
}
