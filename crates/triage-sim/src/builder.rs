//! Fluent builder for constructing a [`Sim`].

use triage_agent::{AgentKind, AgentStore, DoctorState, PatientState};
use triage_core::{GridPos, SimRng, Tick, TriageConfig, TriageError, MAX_INJURY, MIN_INJURY};
use triage_schedule::RandomActivation;
use triage_spatial::{AStarPlanner, PathPlanner, SpatialGrid};

use crate::{Sim, SimResult};

/// One agent of an explicit population.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Spawn {
    /// A living patient.  `ttl` overrides the injury-derived initial TTL.
    Patient { pos: GridPos, injury: u8, ttl: Option<i32> },
    Doctor { pos: GridPos },
}

impl Spawn {
    pub fn patient(pos: impl Into<GridPos>, injury: u8) -> Self {
        Spawn::Patient { pos: pos.into(), injury, ttl: None }
    }

    pub fn patient_with_ttl(pos: impl Into<GridPos>, injury: u8, ttl: i32) -> Self {
        Spawn::Patient { pos: pos.into(), injury, ttl: Some(ttl) }
    }

    pub fn doctor(pos: impl Into<GridPos>) -> Self {
        Spawn::Doctor { pos: pos.into() }
    }
}

/// Fluent builder for [`Sim<P>`].
///
/// # Population
///
/// By default the population is drawn at random from the config's seed:
/// `patient_count` patients first (injury, then x, then y per patient), then
/// `doctor_count` doctors (x, then y).  Patients get ids `0..P`, doctors
/// `P..P+D`.
///
/// [`population`](Self::population) replaces the random draw with an
/// explicit list; ids follow list order and the config's counts are updated
/// to match.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .population(vec![Spawn::doctor((0, 0)), Spawn::patient((5, 0), 1)])
///     .build()?;
/// ```
pub struct SimBuilder<P: PathPlanner = AStarPlanner> {
    config:     TriageConfig,
    population: Option<Vec<Spawn>>,
    planner:    P,
}

impl SimBuilder<AStarPlanner> {
    /// Create a builder using the default A* planner.
    pub fn new(config: TriageConfig) -> Self {
        Self { config, population: None, planner: AStarPlanner }
    }
}

impl<P: PathPlanner> SimBuilder<P> {
    /// Supply an explicit population instead of a random one.
    pub fn population(mut self, spawns: Vec<Spawn>) -> Self {
        self.population = Some(spawns);
        self
    }

    /// Replace the path planner.
    pub fn planner<Q: PathPlanner>(self, planner: Q) -> SimBuilder<Q> {
        SimBuilder { config: self.config, population: self.population, planner }
    }

    /// Validate the config, create and place the population, and return a
    /// ready-to-step [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let mut config = self.config;
        if let Some(spawns) = &self.population {
            let patients = spawns.iter().filter(|s| matches!(s, Spawn::Patient { .. })).count();
            config.patient_count = count_u32(patients)?;
            config.doctor_count = count_u32(spawns.len() - patients)?;
        }
        config.validate()?;

        let mut rng = SimRng::new(config.seed);
        let spawns = match self.population {
            Some(spawns) => spawns,
            None => random_population(&config, &mut rng),
        };

        let mut grid = SpatialGrid::new(config.width, config.height)?;
        let mut agents = AgentStore::with_capacity(spawns.len());
        for spawn in spawns {
            match spawn {
                Spawn::Patient { pos, injury, ttl } => {
                    if !(MIN_INJURY..=MAX_INJURY).contains(&injury) {
                        return Err(TriageError::Config(format!(
                            "injury level {injury} outside {MIN_INJURY}..={MAX_INJURY}"
                        ))
                        .into());
                    }
                    let state = match ttl {
                        Some(ttl) => PatientState::new(injury, ttl),
                        None => PatientState::from_injury(injury, &config),
                    };
                    let id = agents.push(AgentKind::Patient(state));
                    grid.place(id, pos);
                }
                Spawn::Doctor { pos } => {
                    let id = agents.push(AgentKind::Doctor(DoctorState { speed: config.doctor_speed }));
                    grid.place(id, pos);
                }
            }
        }

        let schedule = RandomActivation::from_agents(agents.agent_ids());

        log::info!(
            "built {}x{} ward: {} patients, {} doctors, seed {}",
            config.width,
            config.height,
            config.patient_count,
            config.doctor_count,
            config.seed
        );

        Ok(Sim::from_parts(config, Tick::ZERO, agents, grid, schedule, rng, self.planner))
    }
}

fn count_u32(n: usize) -> SimResult<u32> {
    u32::try_from(n)
        .map_err(|_| TriageError::Config(format!("population of {n} agents is too large")).into())
}

fn random_population(config: &TriageConfig, rng: &mut SimRng) -> Vec<Spawn> {
    let mut spawns = Vec::with_capacity(config.agent_count());
    let (w, h) = (config.width as i32, config.height as i32);
    for _ in 0..config.patient_count {
        let injury = rng.gen_range(MIN_INJURY..=MAX_INJURY);
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        spawns.push(Spawn::patient((x, y), injury));
    }
    for _ in 0..config.doctor_count {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        spawns.push(Spawn::doctor((x, y)));
    }
    spawns
}
