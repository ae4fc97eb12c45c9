//! Seeded placement of newly spawned agents.
//!
//! Each flagged slot gets its own [`AgentRng`] seeded from the base seed and
//! the slot index, then:
//!
//! - `radius ~ U(0, spawn_radius)` and a uniform unit direction give
//!   `position = center + direction * radius`;
//! - a second, independent direction gives
//!   `velocity = direction * initial_speed`.
//!
//! The radius is drawn linearly, so density is higher near the centre than a
//! volume-uniform sample would give.

use swarm_agent::{AgentStore, SpawnSetup};
use swarm_core::{AgentRng, Vec3};

/// Place every slot still flagged `newly_spawned` and clear the flag.
///
/// Returns how many agents were placed.  Results depend only on
/// `base_seed`, the slot index and the slot's [`SpawnSetup`], never on
/// worker count or scheduling.
pub fn initialize_new_agents(store: &mut AgentStore, base_seed: u32) -> usize {
    #[cfg(not(feature = "parallel"))]
    {
        store
            .position
            .iter_mut()
            .zip(store.velocity.iter_mut())
            .zip(store.newly_spawned.iter_mut())
            .zip(store.spawn_setup.iter())
            .enumerate()
            .filter(|(_, (((_, _), flag), _))| **flag)
            .map(|(slot, (((pos, vel), flag), setup))| {
                place(slot, pos, vel, flag, setup, base_seed);
                1usize
            })
            .sum()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        store
            .position
            .par_iter_mut()
            .zip(store.velocity.par_iter_mut())
            .zip(store.newly_spawned.par_iter_mut())
            .zip(store.spawn_setup.par_iter())
            .enumerate()
            .filter(|(_, (((_, _), flag), _))| **flag)
            .map(|(slot, (((pos, vel), flag), setup))| {
                place(slot, pos, vel, flag, setup, base_seed);
                1usize
            })
            .sum()
    }
}

#[inline]
fn place(
    slot:      usize,
    position:  &mut Vec3,
    velocity:  &mut Vec3,
    flag:      &mut bool,
    setup:     &SpawnSetup,
    base_seed: u32,
) {
    let mut rng = AgentRng::from_index(base_seed, slot as u32);

    let radius = rng.next_f32_below(setup.radius);
    *position = setup.center + rng.unit_direction() * radius;
    *velocity = rng.unit_direction() * setup.initial_speed;
    *flag = false;
}
