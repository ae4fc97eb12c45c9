use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeciesError {
    #[error("interaction matrix has {got} rules, expected {expected} ({species}² species)")]
    MatrixSize {
        species:  usize,
        expected: usize,
        got:      usize,
    },

    #[error("{0} species exceeds the supported maximum")]
    TooManySpecies(usize),

    #[error("species {species}: {what} must be finite and non-negative, got {value}")]
    InvalidSpawnParameter {
        species: usize,
        what:    &'static str,
        value:   f32,
    },

    #[error("rule {source_species}→{target_species}: invalid {what} {value}")]
    InvalidRule {
        source_species: usize,
        target_species: usize,
        what:           &'static str,
        value:          f32,
    },

    #[error("template {template:?}: max speed must be finite and non-negative, got {value}")]
    InvalidMaxSpeed {
        template: String,
        value:    f32,
    },
}

pub type SpeciesResult<T> = Result<T, SpeciesError>;
