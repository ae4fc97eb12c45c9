//! Simulation observer trait for progress reporting and data collection.

use swarm_agent::AgentStore;
use swarm_core::Tick;
use swarm_spawn::SpawnReport;

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub tick: Tick,
    /// Simulated seconds elapsed at the end of the tick.
    pub elapsed_secs: f64,
    /// Population after the tick.
    pub agent_count: usize,
    /// Agents created by a spawn processed at the start of this tick.
    pub spawned: usize,
    /// Distinct hash buckets the grid used this tick.
    pub occupied_cells: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {} agents", summary.tick, summary.agent_count);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a pending spawn request has been processed, before the
    /// movement phases of the same tick.
    fn on_spawn(&mut self, _tick: Tick, _report: &SpawnReport) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after movement, with read-only access to every agent.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
