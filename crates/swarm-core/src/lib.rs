//! `swarm-core` — foundational types for the swarm flocking framework.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It has no
//! `swarm-*` dependencies and few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `SpeciesId`, `TemplateId`                  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent spawn sampling), spawn seeds    |
//! | [`error`]       | `SwarmError`, `SwarmResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SwarmError, SwarmResult};
pub use ids::{AgentId, SpeciesId, TemplateId};
pub use rng::{AgentRng, base_seed_from_elapsed, non_zero_seed};
pub use time::{SimClock, SimConfig, Tick};

/// Re-exported so downstream crates agree on a single `glam` version.
pub use glam::{IVec3, Mat3, Quat, Vec3};
