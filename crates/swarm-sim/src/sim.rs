//! The `Sim` struct and its tick loop.

use tracing::{debug, info, warn};

use swarm_agent::AgentStore;
use swarm_core::{SimClock, SimConfig, SwarmError, Tick, base_seed_from_elapsed, non_zero_seed};
use swarm_spatial::{GridHash, SpatialHashGrid};
use swarm_spawn::{SpawnController, SpawnReport};
use swarm_species::{InteractionMatrix, SwarmConfig};
use swarm_steering::{FlockSnapshot, ForceSolver, integrate};

use crate::{NoopObserver, SimObserver, SimResult, TickSummary, WorkerPool};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick runs, in order and each to completion:
///
/// 1. **Spawn** (only if requested): full population reset and seeded
///    placement.  No movement work is in flight while it runs.
/// 2. **Phase A**: build a fresh [`SpatialHashGrid`] from a snapshot of the
///    agents.
/// 3. **Phase B**: for every agent, compute its steering force against the
///    snapshot and the grid, then integrate.  Each task writes only its own
///    agent.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (timestep, total ticks, cell size, …).
    pub config: SimConfig,

    /// Current tick and elapsed simulated seconds.
    pub clock: SimClock,

    /// Agent state (SoA arrays).  Read it between ticks for rendering.
    pub agents: AgentStore,

    /// Immutable species configuration.
    pub swarm: SwarmConfig,

    /// Holds the pending/idle spawn signal.
    pub spawner: SpawnController,

    pub(crate) hasher: GridHash,
    pub(crate) pool:   WorkerPool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Raise the spawn signal.  It is handled at the start of the next tick,
    /// before that tick's movement phases.
    pub fn request_spawn(&mut self) {
        self.spawner.request();
    }

    /// Run the simulation from the current tick to `config.end_tick()`,
    /// using `config.delta_time` for every tick.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.process_tick(self.config.delta_time, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(self.config.delta_time, observer)?;
        }
        Ok(())
    }

    /// Run a single tick covering `dt` seconds, without observer callbacks.
    pub fn step(&mut self, dt: f32) -> SimResult<TickSummary> {
        self.process_tick(dt, &mut NoopObserver)
    }

    /// The base seed a spawn processed right now would use.
    pub fn spawn_seed(&self) -> u32 {
        match self.config.spawn_seed {
            Some(seed) => non_zero_seed(seed),
            None => base_seed_from_elapsed(self.clock.elapsed_secs),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> SimResult<TickSummary> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SwarmError::InvalidDeltaTime(dt).into());
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Spawn phase (exclusive) ───────────────────────────────────────
        let spawned = match self.process_spawn_request(now) {
            Some(report) => {
                observer.on_spawn(now, &report);
                report.spawned
            }
            None => 0,
        };

        // ── Movement phases A and B ───────────────────────────────────────
        let agents = &mut self.agents;
        let matrix = &self.swarm.matrix;
        let hasher = self.hasher;
        let occupied_cells = self.pool.install(|| move_agents(agents, matrix, hasher, dt));

        self.clock.advance(dt);

        let summary = TickSummary {
            tick:           now,
            elapsed_secs:   self.clock.elapsed_secs,
            agent_count:    self.agents.count,
            spawned,
            occupied_cells,
        };
        debug!(
            tick = now.0,
            agents = summary.agent_count,
            cells = occupied_cells,
            "tick complete",
        );
        observer.on_tick_end(&summary);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
        Ok(summary)
    }

    /// Handle a pending spawn request, if any.
    fn process_spawn_request(&mut self, now: Tick) -> Option<SpawnReport> {
        if !self.spawner.is_pending() {
            return None;
        }
        let base_seed = self.spawn_seed();

        let spawner = &mut self.spawner;
        let agents = &mut self.agents;
        let swarm = &self.swarm;
        let report = self
            .pool
            .install(|| spawner.process_pending(agents, swarm, base_seed))?;

        for &species in &report.skipped {
            warn!(tick = now.0, %species, "species has no valid template; skipped");
        }
        info!(
            tick = now.0,
            destroyed = report.destroyed,
            spawned = report.spawned,
            base_seed = report.base_seed,
            "population respawned",
        );
        Some(report)
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// Phase A then Phase B for the whole population.  Returns the number of
/// occupied grid buckets.
fn move_agents(
    agents: &mut AgentStore,
    matrix: &InteractionMatrix,
    hasher: GridHash,
    dt:     f32,
) -> usize {
    if agents.is_empty() {
        return 0;
    }

    let snapshot = FlockSnapshot::capture(agents);

    // ── Phase A: hash build ───────────────────────────────────────────────
    let grid = SpatialHashGrid::build(hasher, &snapshot.positions);
    let occupied = grid.bucket_count();

    // ── Phase B: force + integrate ────────────────────────────────────────
    //
    // Reads go to `snapshot` and `grid` only; each task writes one slot.
    let solver = ForceSolver::new(&snapshot, &grid, matrix);
    let max_speed = snapshot.max_speed.as_slice();

    #[cfg(not(feature = "parallel"))]
    {
        agents
            .position
            .iter_mut()
            .zip(agents.velocity.iter_mut())
            .zip(agents.orientation.iter_mut())
            .enumerate()
            .for_each(|(slot, ((pos, vel), rot))| {
                let force = solver.force_on(slot);
                integrate(pos, vel, rot, force, max_speed[slot], dt);
            });
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        agents
            .position
            .par_iter_mut()
            .zip(agents.velocity.par_iter_mut())
            .zip(agents.orientation.par_iter_mut())
            .enumerate()
            .for_each(|(slot, ((pos, vel), rot))| {
                let force = solver.force_on(slot);
                integrate(pos, vel, rot, force, max_speed[slot], dt);
            });
    }

    occupied
}
