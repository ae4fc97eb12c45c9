//! Per-agent steering force from cohesion, alignment and separation.
//!
//! # Algorithm
//!
//! For agent `i` the solver scans the 27 grid cells around `i`'s cell.  For
//! every candidate `j` it looks up the directional rule
//! `matrix.rule(species[i], species[j])` and, by exact squared distance:
//!
//! - inside `flocking_radius`: adds `j`'s position to the cohesion sum and
//!   `j`'s velocity to the alignment sum (each only if its weight is
//!   positive);
//! - inside `separation_radius` (checked independently): adds
//!   `(p_i - p_j) / dist²` to the separation sum if its weight is positive.
//!
//! Every active behaviour then contributes
//! `(desired - v_i) * (weight_sum / count)`, where `desired` points along the
//! averaged vector at the agent's top speed.  Dividing the weight sum by the
//! count keeps a behaviour's influence bounded in dense crowds.
//!
//! Radius comparisons are strict: a neighbour exactly on the radius is
//! ignored.  Candidates closer than [`COINCIDENT_DIST_SQ`] (including `i`
//! itself) are skipped.

use swarm_core::Vec3;
use swarm_spatial::SpatialHashGrid;
use swarm_species::InteractionMatrix;

use crate::FlockSnapshot;

/// Candidates closer than this squared distance are treated as the agent
/// itself.
pub const COINCIDENT_DIST_SQ: f32 = 0.001;

// ── Accumulators ──────────────────────────────────────────────────────────────

/// Running sum for one behaviour.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Accumulator {
    pub sum:        Vec3,
    pub count:      u32,
    pub weight_sum: f32,
}

impl Accumulator {
    #[inline]
    fn add(&mut self, value: Vec3, weight: f32) {
        self.sum += value;
        self.count += 1;
        self.weight_sum += weight;
    }

    /// Mean of the accumulated vectors, or `None` if nothing was added.
    #[inline]
    pub fn mean(&self) -> Option<Vec3> {
        (self.count > 0).then(|| self.sum / self.count as f32)
    }

    /// `(desired - velocity) * (weight_sum / count)`, with `desired` of
    /// length `max_speed` along `direction`.
    #[inline]
    fn steer(&self, direction: Vec3, velocity: Vec3, max_speed: f32) -> Vec3 {
        let desired = direction.normalize_or_zero() * max_speed;
        (desired - velocity) * (self.weight_sum / self.count as f32)
    }
}

/// The three accumulators gathered for one agent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NeighborSums {
    /// Sum of neighbour positions.
    pub cohesion:   Accumulator,
    /// Sum of neighbour velocities.
    pub alignment:  Accumulator,
    /// Sum of inverse-distance push vectors away from neighbours.
    pub separation: Accumulator,
}

// ── ForceSolver ───────────────────────────────────────────────────────────────

/// Read-only view over everything the force computation needs.
///
/// Cheap to construct; holds only borrows.  Safe to share across Rayon
/// workers because nothing it references is written during the movement
/// phase.
#[derive(Copy, Clone)]
pub struct ForceSolver<'a> {
    snapshot: &'a FlockSnapshot,
    grid:     &'a SpatialHashGrid,
    matrix:   &'a InteractionMatrix,
}

impl<'a> ForceSolver<'a> {
    /// `grid` must have been built from `snapshot.positions`, and `matrix`
    /// must cover every species id in the snapshot.
    pub fn new(
        snapshot: &'a FlockSnapshot,
        grid:     &'a SpatialHashGrid,
        matrix:   &'a InteractionMatrix,
    ) -> Self {
        Self { snapshot, grid, matrix }
    }

    /// Scan the neighbourhood of slot `i` and gather its raw sums.
    ///
    /// # Panics
    /// Panics if `i` is out of range for the snapshot.
    pub fn accumulate(&self, i: usize) -> NeighborSums {
        let snap = self.snapshot;
        let my_pos = snap.positions[i];
        let my_species = snap.species[i];
        let cell = self.grid.hasher().cell_coord(my_pos);

        let mut sums = NeighborSums::default();
        self.grid.for_each_in_neighborhood(cell, |j| {
            let other_pos = snap.positions[j];
            let offset = my_pos - other_pos;
            let dist_sq = offset.length_squared();
            if dist_sq < COINCIDENT_DIST_SQ {
                return;
            }

            let rule = self.matrix.rule(my_species, snap.species[j]);

            if dist_sq < rule.flocking_radius * rule.flocking_radius {
                if rule.cohesion_weight > 0.0 {
                    sums.cohesion.add(other_pos, rule.cohesion_weight);
                }
                if rule.alignment_weight > 0.0 {
                    sums.alignment.add(snap.velocities[j], rule.alignment_weight);
                }
            }

            if dist_sq < rule.separation_radius * rule.separation_radius
                && rule.separation_weight > 0.0
            {
                sums.separation.add(offset / dist_sq, rule.separation_weight);
            }
        });
        sums
    }

    /// Total steering force on slot `i`.  Not clamped.
    pub fn force_on(&self, i: usize) -> Vec3 {
        let sums = self.accumulate(i);
        let my_pos = self.snapshot.positions[i];
        let my_vel = self.snapshot.velocities[i];
        let max_speed = self.snapshot.max_speed[i];

        let mut force = Vec3::ZERO;
        if let Some(center) = sums.cohesion.mean() {
            force += sums.cohesion.steer(center - my_pos, my_vel, max_speed);
        }
        if let Some(heading) = sums.alignment.mean() {
            force += sums.alignment.steer(heading, my_vel, max_speed);
        }
        if let Some(push) = sums.separation.mean() {
            force += sums.separation.steer(push, my_vel, max_speed);
        }
        force
    }

    /// Forces for every slot, in slot order.
    pub fn solve_all(&self) -> Vec<Vec3> {
        let n = self.snapshot.len();

        #[cfg(not(feature = "parallel"))]
        {
            (0..n).map(|i| self.force_on(i)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..n).into_par_iter().map(|i| self.force_on(i)).collect()
        }
    }
}
