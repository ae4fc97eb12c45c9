//! `swarm-sim` — tick loop orchestrator for the swarm flocking framework.
//!
//! # Tick phases
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Spawn     — if a request is pending: release every agent, allocate
//!                 each species' quota, run the seeded placement pass.
//!                 Runs to completion before any movement work starts.
//!   ② Snapshot  — copy positions, velocities, species, max speeds.
//!   ③ Phase A   — build the spatial hash grid from the snapshot
//!                 (parallel fold/reduce with the `parallel` feature).
//!   ④ Phase B   — per agent: force from snapshot + grid, then integrate
//!                 into that agent's own position/velocity/orientation.
//!                 The grid is dropped when this phase ends.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs phases ①, ③ and ④ on a Rayon pool (default on).  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use swarm_core::SimConfig;
//! use swarm_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, swarm).spawn_on_start(true).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pool;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use pool::WorkerPool;
pub use sim::Sim;
