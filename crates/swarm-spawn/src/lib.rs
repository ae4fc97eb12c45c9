//! `swarm-spawn` — population (re)build on request.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`controller`] | `SpawnController`, `SpawnState`, `SpawnReport`, `respawn` |
//! | [`init`]       | `initialize_new_agents`: the seeded placement pass      |
//!
//! A spawn is always a full reset: every existing agent is released, then
//! each valid species allocates its quota in one batch.  The placement pass
//! that follows touches only slots flagged `newly_spawned` and clears the
//! flag when done.

pub mod controller;
pub mod init;

#[cfg(test)]
mod tests;

pub use controller::{SpawnController, SpawnReport, SpawnState, respawn};
pub use init::initialize_new_agents;
