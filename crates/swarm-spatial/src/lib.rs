//! `swarm-spatial` — uniform-cell spatial hashing for neighbour queries.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`grid`]  | `GridHash` (cell coordinates + hashing), `SpatialHashGrid`   |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds the grid with Rayon (default on).                  |
//!
//! The grid is rebuilt from scratch every tick and dropped when the movement
//! phase ends.  Nothing is incrementally inserted or removed.

pub mod error;
pub mod grid;


pub use error::{SpatialError, SpatialResult};
pub use grid::{GridHash, SpatialHashGrid};
