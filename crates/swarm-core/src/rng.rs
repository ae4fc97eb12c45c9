//! Deterministic per-agent RNG used by the spawn initialisation pass.
//!
//! # Determinism strategy
//!
//! A spawn request derives one 32-bit *base seed* from elapsed simulation
//! time (see [`base_seed_from_elapsed`]).  Each newly spawned agent then gets
//! its own independent `SmallRng` seeded by:
//!
//!   seed = base_seed XOR (index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.
//!
//! - Agents never share RNG state, so the pass can run on any number of
//!   workers in any order.
//! - The same base seed and the same population layout always reproduce
//!   the same initial positions and velocities.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Elapsed seconds are scaled to milliseconds before truncation.
const SEED_TIME_SCALE: f64 = 1_000.0;

/// Derive a spawn base seed from elapsed simulation seconds.
///
/// The scaled time is truncated to an integer and incremented by one so the
/// seed is never zero.  A truncated value of `u32::MAX` wraps to zero on the
/// increment; that case is pinned to `1` instead.
pub fn base_seed_from_elapsed(elapsed_secs: f64) -> u32 {
    let truncated = (elapsed_secs.max(0.0) * SEED_TIME_SCALE) as u32;
    non_zero_seed(truncated)
}

/// Apply the `+1` non-zero rule to an explicit seed.
#[inline]
pub fn non_zero_seed(raw: u32) -> u32 {
    match raw.wrapping_add(1) {
        0 => 1,
        s => s,
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// One is created per newly spawned agent inside the initialisation pass and
/// dropped when the pass ends; nothing random persists between ticks.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from a spawn base seed and the agent's index
    /// among the spawned population.
    pub fn from_index(base_seed: u32, index: u32) -> Self {
        let seed = base_seed as u64 ^ (index as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform float in `[0, max)`; returns `0.0` when `max <= 0`.
    #[inline]
    pub fn next_f32_below(&mut self, max: f32) -> f32 {
        if max > 0.0 {
            self.0.gen_range(0.0..max)
        } else {
            0.0
        }
    }

    /// A unit vector drawn uniformly from the surface of the unit sphere.
    ///
    /// Samples `z` uniformly in `[-1, 1]` and an azimuth uniformly in
    /// `[0, 2π)` (Archimedes' hat-box theorem).
    pub fn unit_direction(&mut self) -> Vec3 {
        let z: f32 = self.0.gen_range(-1.0..=1.0);
        let phi: f32 = self.0.gen_range(0.0..std::f32::consts::TAU);
        let r = (1.0 - z * z).max(0.0).sqrt();
        let (sin, cos) = phi.sin_cos();
        Vec3::new(r * cos, r * sin, z)
    }
}
