use swarm_core::{SpeciesId, SwarmError};
use swarm_spatial::SpatialError;
use swarm_species::SpeciesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{what} covers {got} species but the spawn table has {expected}")]
    SpeciesCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent in slot {slot} has species {species}, outside the configured table")]
    UnknownSpecies {
        slot:    usize,
        species: SpeciesId,
    },

    #[error(transparent)]
    Swarm(#[from] SwarmError),

    #[error("spatial grid error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("species configuration error: {0}")]
    Species(#[from] SpeciesError),

    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
