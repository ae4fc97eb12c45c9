//! Spawn request state machine and the destroy-then-recreate step.

use swarm_agent::{AgentStore, SpawnSetup};
use swarm_core::SpeciesId;
use swarm_species::SwarmConfig;

use crate::initialize_new_agents;

/// Externally visible controller state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SpawnState {
    #[default]
    Idle,
    /// A request has been observed and will be handled at the next tick
    /// boundary.
    SpawnPending,
}

/// Outcome of one processed spawn request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Agents released by the reset.
    pub destroyed: usize,
    /// Agents created and placed.
    pub spawned: usize,
    /// Species with `count > 0` whose template was missing or invalid.
    pub skipped: Vec<SpeciesId>,
    /// Seed the placement pass was run with.
    pub base_seed: u32,
}

// ── SpawnController ───────────────────────────────────────────────────────────

/// Single-shot spawn signal plus the processing that consumes it.
///
/// Requests do not queue: raising the signal while one is already pending
/// has no further effect.
#[derive(Debug, Default)]
pub struct SpawnController {
    state: SpawnState,
}

impl SpawnController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> SpawnState {
        self.state
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state == SpawnState::SpawnPending
    }

    /// Raise the spawn signal.
    pub fn request(&mut self) {
        self.state = SpawnState::SpawnPending;
    }

    /// If a request is pending, rebuild the population and return to idle.
    ///
    /// Returns `None` (and leaves `store` untouched) when idle.
    pub fn process_pending(
        &mut self,
        store:     &mut AgentStore,
        config:    &SwarmConfig,
        base_seed: u32,
    ) -> Option<SpawnReport> {
        if !self.is_pending() {
            return None;
        }
        let report = respawn(store, config, base_seed);
        self.state = SpawnState::Idle;
        Some(report)
    }
}

// ── Reset + allocate ──────────────────────────────────────────────────────────

/// Replace the whole population according to `config`.
///
/// Species with `count == 0` are passed over silently; species with a
/// positive count but no valid template are listed in
/// [`SpawnReport::skipped`].  Runs the placement pass before returning, so
/// no slot is left flagged `newly_spawned`.
pub fn respawn(store: &mut AgentStore, config: &SwarmConfig, base_seed: u32) -> SpawnReport {
    let destroyed = store.clear();
    store.reserve(config.total_population());

    let mut skipped = Vec::new();
    for (index, spawn) in config.spawn.iter().enumerate() {
        if spawn.count == 0 {
            continue;
        }
        let species = SpeciesId(index as u16);
        let Some(template) = config.species_template(species) else {
            skipped.push(species);
            continue;
        };
        let setup = SpawnSetup {
            center:        spawn.spawn_center,
            radius:        spawn.spawn_radius,
            initial_speed: spawn.initial_random_velocity,
        };
        store.allocate(species, spawn.count as usize, template.max_speed, setup);
    }

    let spawned = initialize_new_agents(store, base_seed);
    SpawnReport { destroyed, spawned, skipped, base_seed }
}
