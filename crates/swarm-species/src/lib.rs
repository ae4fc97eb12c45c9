//! `swarm-species`: immutable species configuration handed to the core.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`species`] | `SpeciesDefinition` (template), `SpeciesSpawnConfig`            |
//! | [`rules`]   | `InteractionRule`, `InteractionMatrix`, `GlobalSettings`        |
//! | [`config`]  | `SwarmConfig`: the read-only snapshot used at runtime          |
//! | [`builder`] | `SwarmConfigBuilder`, `SpeciesSetup`                            |
//! | [`error`]   | `SpeciesError`, `SpeciesResult<T>`                              |
//!
//! # Invariant
//!
//! `SwarmConfig::matrix` always holds exactly `species_count²` rules.  The
//! builder enforces it; the force solver relies on it without re-checking.

pub mod builder;
pub mod config;
pub mod error;
pub mod rules;
pub mod species;


pub use builder::{SpeciesSetup, SwarmConfigBuilder};
pub use config::SwarmConfig;
pub use error::{SpeciesError, SpeciesResult};
pub use rules::{GlobalSettings, InteractionMatrix, InteractionRule};
pub use species::{SpeciesDefinition, SpeciesSpawnConfig};
