//! `swarm-steering` — Reynolds-style flocking forces and motion integration.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`snapshot`]  | `FlockSnapshot`: read-only copy of the state forces read   |
//! | [`force`]     | `ForceSolver`, `NeighborSums`, `Accumulator`               |
//! | [`integrate`] | `integrate`, `look_rotation`                               |
//!
//! # Read/write split
//!
//! Forces are always computed against a [`FlockSnapshot`] captured before the
//! movement phase starts.  The integrator writes only to the agent it was
//! handed, so the movement phase can run one task per agent with no locking
//! and no task ever observes another task's writes from the same tick.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `ForceSolver::solve_all` runs on Rayon (default on).       |

pub mod force;
pub mod integrate;
pub mod snapshot;


pub use force::{Accumulator, COINCIDENT_DIST_SQ, ForceSolver, NeighborSums};
pub use integrate::{ORIENT_SPEED_SQ_THRESHOLD, integrate, look_rotation};
pub use snapshot::FlockSnapshot;
