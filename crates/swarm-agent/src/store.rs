//! Core agent storage: `AgentStore` (SoA data) and `SpawnSetup`.
//!
//! # Why Structure-of-Arrays?
//!
//! The movement phase reads positions and velocities of *other* agents far
//! more often than it touches any single agent's full record.  Keeping each
//! field in its own `Vec` lets the force solver capture a compact snapshot
//! with a handful of `memcpy`s and lets the integrator hand out disjoint
//! `&mut` slices to Rayon without any locking:
//!
//! ```ignore
//! store.position
//!     .par_iter_mut()
//!     .zip(store.velocity.par_iter_mut())
//!     .enumerate()
//!     .for_each(|(slot, (pos, vel))| { /* exclusive write to one agent */ });
//! ```

use std::ops::Range;

use swarm_core::{AgentId, Quat, SpeciesId, Vec3};

// ── SpawnSetup ────────────────────────────────────────────────────────────────

/// Per-agent spawn parameters, copied from the species' spawn config when the
/// slot is allocated and consumed by the initialisation pass.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnSetup {
    /// Centre of the spawn sphere.
    pub center: Vec3,
    /// Radius of the spawn sphere.
    pub radius: f32,
    /// Magnitude of the random initial velocity.
    pub initial_speed: f32,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; a *slot* (`usize`) indexes
/// all of them.  Slots are dense and only valid for the current population;
/// use [`AgentStore::slot_of`] to go from a stable [`AgentId`] back to a slot.
#[derive(Debug, Default)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Opaque identity of the agent in each slot.  Strictly ascending.
    pub id: Vec<AgentId>,

    // ── Motion state ──────────────────────────────────────────────────────
    pub position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    /// Facing rotation, updated by the integrator while the agent moves.
    pub orientation: Vec<Quat>,

    // ── Species parameters ────────────────────────────────────────────────
    pub species: Vec<SpeciesId>,
    pub max_speed: Vec<f32>,

    // ── Spawn bookkeeping ─────────────────────────────────────────────────
    /// `true` until the spawn initialisation pass has placed the agent.
    pub newly_spawned: Vec<bool>,
    pub spawn_setup: Vec<SpawnSetup>,

    /// Next id to hand out.  Survives [`clear`](Self::clear).
    pub(crate) next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all live `AgentId`s in slot order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.id.iter().copied()
    }

    /// Slot currently holding `agent`, or `None` if it is not alive.
    pub fn slot_of(&self, agent: AgentId) -> Option<usize> {
        self.id.binary_search(&agent).ok()
    }

    /// Number of agents still waiting for the initialisation pass.
    pub fn newly_spawned_count(&self) -> usize {
        self.newly_spawned.iter().filter(|&&n| n).count()
    }

    // ── Population lifecycle ──────────────────────────────────────────────

    /// Release every slot.  Returns how many agents were destroyed.
    ///
    /// Capacity is retained so the following [`allocate`](Self::allocate)
    /// calls do not reallocate when the population size is unchanged.
    pub fn clear(&mut self) -> usize {
        let destroyed = self.count;
        self.count = 0;
        self.id.clear();
        self.position.clear();
        self.velocity.clear();
        self.orientation.clear();
        self.species.clear();
        self.max_speed.clear();
        self.newly_spawned.clear();
        self.spawn_setup.clear();
        destroyed
    }

    /// Bulk-allocate `n` newly spawned agents of one species.
    ///
    /// New slots start at the origin with zero velocity and identity
    /// orientation; the spawn initialisation pass fills in the real values
    /// from `setup`.  Returns the range of slots that were appended.
    ///
    /// # Panics
    /// Panics if the batch would exhaust the id space, i.e. hand out
    /// [`AgentId::INVALID`] or wrap back to already used ids.
    pub fn allocate(
        &mut self,
        species:   SpeciesId,
        n:         usize,
        max_speed: f32,
        setup:     SpawnSetup,
    ) -> Range<usize> {
        let start = self.count;
        let first_id = self.next_id;
        let end_id = match u32::try_from(n).ok().and_then(|n| first_id.checked_add(n)) {
            Some(end) => end,
            None => panic!("agent id space exhausted: {n} agents requested after id {first_id}"),
        };

        self.id.extend((first_id..end_id).map(AgentId));
        self.position.resize(start + n, Vec3::ZERO);
        self.velocity.resize(start + n, Vec3::ZERO);
        self.orientation.resize(start + n, Quat::IDENTITY);
        self.species.resize(start + n, species);
        self.max_speed.resize(start + n, max_speed);
        self.newly_spawned.resize(start + n, true);
        self.spawn_setup.resize(start + n, setup);

        self.next_id = end_id;
        self.count = start + n;
        start..self.count
    }

    /// Reserve room for `additional` more agents in every array.
    pub fn reserve(&mut self, additional: usize) {
        self.id.reserve(additional);
        self.position.reserve(additional);
        self.velocity.reserve(additional);
        self.orientation.reserve(additional);
        self.species.reserve(additional);
        self.max_speed.reserve(additional);
        self.newly_spawned.reserve(additional);
        self.spawn_setup.reserve(additional);
    }
}
