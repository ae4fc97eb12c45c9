//! Plain data row types written by output backends.

use swarm_agent::AgentStore;
use swarm_core::{Quat, Tick, Vec3};
use swarm_sim::TickSummary;

/// One agent's transform and velocity at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:        u64,
    pub agent_id:    u32,
    pub species:     u16,
    pub position:    Vec3,
    pub velocity:    Vec3,
    pub orientation: Quat,
}

impl AgentSnapshotRow {
    /// Rows for every live agent, in slot order.
    pub fn collect(tick: Tick, agents: &AgentStore) -> Vec<Self> {
        (0..agents.count)
            .map(|i| AgentSnapshotRow {
                tick:        tick.0,
                agent_id:    agents.id[i].0,
                species:     agents.species[i].0,
                position:    agents.position[i],
                velocity:    agents.velocity[i],
                orientation: agents.orientation[i],
            })
            .collect()
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub sim_time_secs: f64,
    pub agent_count:   u64,
    pub spawned:       u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:          s.tick.0,
            sim_time_secs: s.elapsed_secs,
            agent_count:   s.agent_count as u64,
            spawned:       s.spawned as u64,
        }
    }
}
