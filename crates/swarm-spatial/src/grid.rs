//! Uniform-cell spatial hash grid.
//!
//! # Layout
//!
//! Space is divided into cubes of edge `cell_size`.  A position maps to the
//! integer cell `floor(position / cell_size)`, and each cell maps to a single
//! `i32` hash by XOR-ing its coordinates multiplied by three large primes.
//! The grid stores `hash → Vec<slot>` buckets in an `FxHashMap`.
//!
//! Distinct cells can share a hash.  Buckets therefore hold a *superset* of
//! the agents in a cell; callers must filter candidates by exact distance.
//!
//! # Parallel build
//!
//! With the `parallel` feature each Rayon worker folds its share of agents
//! into a private map, and the partial maps are merged pairwise.  No locks,
//! no shared writes.  Buckets are sorted by slot afterwards so that the
//! iteration order seen by callers does not depend on how the work was split.

use rustc_hash::FxHashMap;

use swarm_core::{IVec3, Vec3};

use crate::{SpatialError, SpatialResult};

const PRIME_X: i32 = 73_856_093;
const PRIME_Y: i32 = 19_349_663;
const PRIME_Z: i32 = 83_492_791;

type Buckets = FxHashMap<i32, Vec<u32>>;

// ── GridHash ──────────────────────────────────────────────────────────────────

/// Maps world positions to integer cells and cells to hash keys.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridHash {
    cell_size: f32,
}

impl GridHash {
    pub fn new(cell_size: f32) -> SpatialResult<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SpatialError::InvalidCellSize(cell_size));
        }
        Ok(Self { cell_size })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Componentwise `floor(position / cell_size)`.
    #[inline]
    pub fn cell_coord(&self, position: Vec3) -> IVec3 {
        (position / self.cell_size).floor().as_ivec3()
    }

    /// Hash a cell coordinate.  Arithmetic wraps on overflow.
    #[inline]
    pub fn hash(cell: IVec3) -> i32 {
        cell.x.wrapping_mul(PRIME_X) ^ cell.y.wrapping_mul(PRIME_Y) ^ cell.z.wrapping_mul(PRIME_Z)
    }

    #[inline]
    pub fn hash_position(&self, position: Vec3) -> i32 {
        Self::hash(self.cell_coord(position))
    }
}

// ── SpatialHashGrid ───────────────────────────────────────────────────────────

/// Multi-valued `cell hash → agent slot` index, built once per tick.
#[derive(Debug)]
pub struct SpatialHashGrid {
    hasher:  GridHash,
    buckets: Buckets,
    len:     usize,
}

impl SpatialHashGrid {
    /// Build a grid from a snapshot of agent positions.
    ///
    /// Slot `i` of `positions` is inserted under the hash of its cell.
    pub fn build(hasher: GridHash, positions: &[Vec3]) -> Self {
        #[cfg(not(feature = "parallel"))]
        let buckets = {
            let mut map = Buckets::default();
            for (slot, &p) in positions.iter().enumerate() {
                map.entry(hasher.hash_position(p)).or_default().push(slot as u32);
            }
            map
        };

        #[cfg(feature = "parallel")]
        let buckets = {
            use rayon::prelude::*;

            let mut map = positions
                .par_iter()
                .enumerate()
                .fold(Buckets::default, |mut map, (slot, &p)| {
                    map.entry(hasher.hash_position(p)).or_default().push(slot as u32);
                    map
                })
                .reduce(Buckets::default, merge_buckets);

            map.par_iter_mut().for_each(|(_, bucket)| bucket.sort_unstable());
            map
        };

        Self { hasher, buckets, len: positions.len() }
    }

    #[inline]
    pub fn hasher(&self) -> &GridHash {
        &self.hasher
    }

    /// Total number of inserted entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct hash buckets in use.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// All slots inserted under `cell`'s hash.
    ///
    /// May include agents from other cells that collide on the same hash.
    #[inline]
    pub fn query(&self, cell: IVec3) -> &[u32] {
        self.buckets
            .get(&GridHash::hash(cell))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Call `f` with every candidate slot in the 3×3×3 block of cells around
    /// `center`.
    ///
    /// Each of the 27 cells is looked up independently, so a bucket reached
    /// through two colliding cells is visited twice.
    pub fn for_each_in_neighborhood<F>(&self, center: IVec3, mut f: F)
    where
        F: FnMut(usize),
    {
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let cell = center.wrapping_add(IVec3::new(dx, dy, dz));
                    for &slot in self.query(cell) {
                        f(slot as usize);
                    }
                }
            }
        }
    }
}

/// Merge two partial bucket maps, moving the smaller into the larger.
#[cfg(feature = "parallel")]
fn merge_buckets(mut a: Buckets, mut b: Buckets) -> Buckets {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    for (hash, mut slots) in b {
        a.entry(hash).or_default().append(&mut slots);
    }
    a
}
