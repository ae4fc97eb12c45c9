//! Per-species template and spawn parameters.

use swarm_core::{TemplateId, Vec3};

/// An agent template: the behavioural constants every agent of a species
/// inherits at spawn time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesDefinition {
    pub name: String,
    pub max_speed: f32,
}

impl SpeciesDefinition {
    pub fn new(name: impl Into<String>, max_speed: f32) -> Self {
        Self { name: name.into(), max_speed }
    }
}

/// How many agents of one species to create and where to put them.
///
/// One entry per species, in species-index order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesSpawnConfig {
    /// Template to instantiate.  `None` (or an id not in the template table)
    /// makes the species invalid; spawning skips it.
    pub template: Option<TemplateId>,
    pub count: u32,
    /// Magnitude of each agent's random initial velocity.
    pub initial_random_velocity: f32,
    pub spawn_radius: f32,
    pub spawn_center: Vec3,
}

impl Default for SpeciesSpawnConfig {
    fn default() -> Self {
        Self {
            template:                None,
            count:                   0,
            initial_random_velocity: 0.0,
            spawn_radius:            0.0,
            spawn_center:            Vec3::ZERO,
        }
    }
}
