//! Fluent builder for constructing a [`Sim`].

use swarm_agent::AgentStore;
use swarm_core::{SimClock, SimConfig};
use swarm_spatial::GridHash;
use swarm_spawn::SpawnController;
use swarm_species::SwarmConfig;

use crate::{Sim, SimError, SimResult, WorkerPool};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: timestep, total ticks, cell size, thread count, …
/// - [`SwarmConfig`]: from [`swarm_species::SwarmConfigBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                  |
/// |------------------------|------------------------------------------|
/// | `.spawn_on_start(b)`   | `false`: no agents until `request_spawn` |
/// | `.agents(store)`       | Empty `AgentStore`                       |
///
/// # Example
///
/// ```rust,ignore
/// let swarm = SwarmConfigBuilder::new() /* … */ .build()?;
/// let mut sim = SimBuilder::new(config, swarm)
///     .spawn_on_start(true)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:         SimConfig,
    swarm:          SwarmConfig,
    agents:         Option<AgentStore>,
    spawn_on_start: bool,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, swarm: SwarmConfig) -> Self {
        Self {
            config,
            swarm,
            agents:         None,
            spawn_on_start: false,
        }
    }

    /// Queue a spawn request so the first tick builds the population.
    pub fn spawn_on_start(mut self, yes: bool) -> Self {
        self.spawn_on_start = yes;
        self
    }

    /// Start from an existing population instead of an empty one.
    ///
    /// Every agent's species must exist in the swarm configuration.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Validate inputs, build the worker pool, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let hasher = GridHash::new(self.config.cell_size)?;

        // ── Species table consistency ─────────────────────────────────────
        let species_count = self.swarm.spawn.len();
        if self.swarm.matrix.species_count() != species_count {
            return Err(SimError::SpeciesCountMismatch {
                expected: species_count,
                got:      self.swarm.matrix.species_count(),
                what:     "interaction matrix",
            });
        }
        if self.swarm.settings.total_species_count != species_count {
            return Err(SimError::SpeciesCountMismatch {
                expected: species_count,
                got:      self.swarm.settings.total_species_count,
                what:     "global settings",
            });
        }

        let agents = self.agents.unwrap_or_default();
        if let Some((slot, &species)) = agents
            .species
            .iter()
            .enumerate()
            .find(|(_, s)| s.index() >= species_count)
        {
            return Err(SimError::UnknownSpecies { slot, species });
        }

        let pool = WorkerPool::new(self.config.num_threads)?;

        let mut spawner = SpawnController::new();
        if self.spawn_on_start {
            spawner.request();
        }

        Ok(Sim {
            clock:   SimClock::new(),
            config:  self.config,
            agents,
            swarm:   self.swarm,
            spawner,
            hasher,
            pool,
        })
    }
}
