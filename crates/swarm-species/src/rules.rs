//! Directional per-species-pair interaction rules.
//!
//! Rules are stored as a flat, row-major `species × species` matrix:
//!
//! ```text
//!                target 0   target 1   target 2
//!   source 0   [   0    ,     1    ,     2    ]
//!   source 1   [   3    ,     4    ,     5    ]
//!   source 2   [   6    ,     7    ,     8    ]
//! ```
//!
//! `rule(a, b)` answers "how does species `a` react to a neighbour of species
//! `b`".  The matrix is not symmetric in general.

use swarm_core::SpeciesId;

use crate::{SpeciesError, SpeciesResult};

/// Radii and weights governing how one species steers around another.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionRule {
    /// Neighbours closer than this push the agent away.
    pub separation_radius: f32,
    /// Neighbours closer than this contribute to cohesion and alignment.
    pub flocking_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
}

impl InteractionRule {
    /// The all-zero rule: no reaction at all.
    pub const NONE: InteractionRule = InteractionRule {
        separation_radius: 0.0,
        flocking_radius:   0.0,
        separation_weight: 0.0,
        alignment_weight:  0.0,
        cohesion_weight:   0.0,
    };
}

/// Row-major `species × species` rule table.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionMatrix {
    species_count: usize,
    rules: Vec<InteractionRule>,
}

impl InteractionMatrix {
    /// Wrap a flattened rule list, checking it has exactly `species_count²`
    /// entries.
    pub fn new(species_count: usize, rules: Vec<InteractionRule>) -> SpeciesResult<Self> {
        let expected = species_count * species_count;
        if rules.len() != expected {
            return Err(SpeciesError::MatrixSize {
                species: species_count,
                expected,
                got: rules.len(),
            });
        }
        Ok(Self { species_count, rules })
    }

    /// Every pair (including self-pairs) uses the same `rule`.
    pub fn uniform(species_count: usize, rule: InteractionRule) -> Self {
        Self {
            species_count,
            rules: vec![rule; species_count * species_count],
        }
    }

    #[inline]
    pub fn species_count(&self) -> usize {
        self.species_count
    }

    /// How `source` reacts to `target`.
    ///
    /// # Panics
    /// Panics if either id is `>= species_count`.
    #[inline]
    pub fn rule(&self, source: SpeciesId, target: SpeciesId) -> &InteractionRule {
        &self.rules[source.index() * self.species_count + target.index()]
    }

    /// Mutable access to one directional rule.
    #[inline]
    pub fn rule_mut(&mut self, source: SpeciesId, target: SpeciesId) -> &mut InteractionRule {
        &mut self.rules[source.index() * self.species_count + target.index()]
    }

    /// The flattened row-major table.
    pub fn as_slice(&self) -> &[InteractionRule] {
        &self.rules
    }
}

/// Settings shared by every agent for the whole run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalSettings {
    /// Number of species.  Always equals the interaction matrix dimension.
    pub total_species_count: usize,
}
