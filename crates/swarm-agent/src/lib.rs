//! `swarm-agent` — Structure-of-Arrays agent storage for the swarm framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `SpawnSetup`                    |
//!
//! Agents live in flat, contiguous arrays with no inter-agent references.
//! The population is only ever replaced wholesale: [`AgentStore::clear`]
//! releases every slot and [`AgentStore::allocate`] appends a batch of
//! newly spawned slots for one species.

pub mod store;

#[cfg(test)]
mod tests;

pub use store::{AgentStore, SpawnSetup};
