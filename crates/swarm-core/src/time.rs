//! Simulation time model.
//!
//! # Design
//!
//! A tick is one discrete update covering hash build, force solve, and
//! integration for every agent.  Ticks are counted by an integer `Tick`;
//! the variable-length timestep each tick covers is accumulated by
//! `SimClock` into elapsed simulated seconds, which the spawn controller uses
//! to derive its base seed.

use std::fmt;

use crate::{SwarmError, SwarmResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the simulated seconds elapsed since tick 0.
///
/// Elapsed time is held as `f64` so that long runs of small `f32` timesteps
/// do not lose precision.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by [`SimClock::advance`] each iteration.
    pub current_tick: Tick,
    /// Sum of all timesteps applied so far, in seconds.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick covering `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt as f64;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Default uniform cell edge length for the spatial hash grid.
pub const DEFAULT_CELL_SIZE: f32 = 3.0;

/// Default timestep: one 60 Hz frame.
pub const DEFAULT_DELTA_TIME: f32 = 1.0 / 60.0;

/// Top-level run configuration.
///
/// Species data lives separately in `swarm_species::SwarmConfig`; this
/// struct only holds knobs of the tick loop itself.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds covered by one tick when driven through `Sim::run`.
    pub delta_time: f32,

    /// Total ticks to simulate in `Sim::run`.
    pub total_ticks: u64,

    /// Spatial hash cell edge length.  Constant for the whole run.
    pub cell_size: f32,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a snapshot every N ticks.  `0` disables snapshots.
    pub output_interval_ticks: u64,

    /// Fixed spawn base seed.  `None` derives it from elapsed time.
    /// The non-zero rule is applied either way.
    pub spawn_seed: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            delta_time:            DEFAULT_DELTA_TIME,
            total_ticks:           0,
            cell_size:             DEFAULT_CELL_SIZE,
            num_threads:           None,
            output_interval_ticks: 0,
            spawn_seed:            None,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject values the tick loop cannot run with.
    pub fn validate(&self) -> SwarmResult<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(SwarmError::InvalidCellSize(self.cell_size));
        }
        if !self.delta_time.is_finite() || self.delta_time < 0.0 {
            return Err(SwarmError::InvalidDeltaTime(self.delta_time));
        }
        if self.num_threads == Some(0) {
            return Err(SwarmError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
