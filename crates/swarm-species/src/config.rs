//! The read-only configuration snapshot consumed by the spawn controller and
//! the force solver.

use swarm_core::{SpeciesId, TemplateId};

use crate::{GlobalSettings, InteractionMatrix, SpeciesDefinition, SpeciesSpawnConfig};

/// Immutable species configuration.
///
/// Construct with [`SwarmConfigBuilder`][crate::SwarmConfigBuilder].  Fields
/// are public for reading; the invariants below hold for every value the
/// builder returns:
///
/// - `spawn.len() == settings.total_species_count`
/// - `matrix.species_count() == settings.total_species_count`
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    pub templates: Vec<SpeciesDefinition>,
    pub spawn:     Vec<SpeciesSpawnConfig>,
    pub matrix:    InteractionMatrix,
    pub settings:  GlobalSettings,
}

impl SwarmConfig {
    #[inline]
    pub fn species_count(&self) -> usize {
        self.settings.total_species_count
    }

    /// Look up a template.  `None` for ids outside the template table.
    pub fn template(&self, id: TemplateId) -> Option<&SpeciesDefinition> {
        self.templates.get(id.index())
    }

    /// Template of a species, if it has a valid one.
    pub fn species_template(&self, species: SpeciesId) -> Option<&SpeciesDefinition> {
        self.spawn
            .get(species.index())
            .and_then(|s| s.template)
            .and_then(|t| self.template(t))
    }

    /// Agents a spawn would create, counting only species with a valid
    /// template.
    pub fn total_population(&self) -> usize {
        self.spawn
            .iter()
            .filter(|s| s.template.and_then(|t| self.template(t)).is_some())
            .map(|s| s.count as usize)
            .sum()
    }
}
