//! Immutable pre-tick copy of the agent fields the force solver reads.

use swarm_agent::AgentStore;
use swarm_core::{SpeciesId, Vec3};

/// Positions, velocities, species and speed limits of every agent, indexed
/// by slot.
///
/// Captured once per tick before any agent is written.  All four vectors
/// have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlockSnapshot {
    pub positions:  Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub species:    Vec<SpeciesId>,
    pub max_speed:  Vec<f32>,
}

impl FlockSnapshot {
    /// Copy the current motion state out of `store`.
    pub fn capture(store: &AgentStore) -> Self {
        Self {
            positions:  store.position.clone(),
            velocities: store.velocity.clone(),
            species:    store.species.clone(),
            max_speed:  store.max_speed.clone(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
