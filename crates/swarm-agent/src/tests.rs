//! Unit tests for swarm-agent.

#[cfg(test)]
mod store {
    use swarm_core::{AgentId, Quat, SpeciesId, Vec3};

    use crate::{AgentStore, SpawnSetup};

    fn setup() -> SpawnSetup {
        SpawnSetup { center: Vec3::new(1.0, 2.0, 3.0), radius: 5.0, initial_speed: 2.0 }
    }

    #[test]
    fn empty_store() {
        let store = AgentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.newly_spawned_count(), 0);
    }

    #[test]
    fn allocate_fills_every_array() {
        let mut store = AgentStore::new();
        let range = store.allocate(SpeciesId(1), 4, 7.5, setup());
        assert_eq!(range, 0..4);
        assert_eq!(store.count, 4);
        assert_eq!(store.position.len(), 4);
        assert_eq!(store.velocity[3], Vec3::ZERO);
        assert_eq!(store.orientation[0], Quat::IDENTITY);
        assert_eq!(store.species[2], SpeciesId(1));
        assert_eq!(store.max_speed[1], 7.5);
        assert_eq!(store.spawn_setup[0], setup());
        assert_eq!(store.newly_spawned_count(), 4);
    }

    #[test]
    fn consecutive_batches_append() {
        let mut store = AgentStore::new();
        store.allocate(SpeciesId(0), 2, 1.0, setup());
        let second = store.allocate(SpeciesId(1), 3, 2.0, setup());
        assert_eq!(second, 2..5);
        assert_eq!(store.species[1], SpeciesId(0));
        assert_eq!(store.species[2], SpeciesId(1));
    }

    #[test]
    fn clear_releases_all_slots() {
        let mut store = AgentStore::new();
        store.allocate(SpeciesId(0), 6, 1.0, setup());
        assert_eq!(store.clear(), 6);
        assert!(store.is_empty());
        assert!(store.id.is_empty());
        assert!(store.spawn_setup.is_empty());
    }

    #[test]
    fn ids_are_never_reused_across_resets() {
        let mut store = AgentStore::new();
        store.allocate(SpeciesId(0), 3, 1.0, setup());
        let first: Vec<AgentId> = store.agent_ids().collect();
        store.clear();
        store.allocate(SpeciesId(0), 3, 1.0, setup());
        let second: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(first, vec![AgentId(0), AgentId(1), AgentId(2)]);
        assert_eq!(second, vec![AgentId(3), AgentId(4), AgentId(5)]);
    }

    #[test]
    fn ids_run_up_to_the_sentinel() {
        let mut store = AgentStore::new();
        store.next_id = u32::MAX - 2;
        store.allocate(SpeciesId(0), 2, 1.0, setup());
        assert_eq!(store.id, vec![AgentId(u32::MAX - 2), AgentId(u32::MAX - 1)]);
        assert_eq!(store.slot_of(AgentId(u32::MAX - 1)), Some(1));
        assert!(!store.id.contains(&AgentId::INVALID));
    }

    #[test]
    #[should_panic(expected = "agent id space exhausted")]
    fn exhausted_id_space_panics() {
        let mut store = AgentStore::new();
        store.next_id = u32::MAX - 2;
        store.allocate(SpeciesId(0), 2, 1.0, setup());
        store.clear();
        store.allocate(SpeciesId(0), 1, 1.0, setup());
    }

    #[test]
    fn slot_lookup() {
        let mut store = AgentStore::new();
        store.allocate(SpeciesId(0), 2, 1.0, setup());
        store.clear();
        store.allocate(SpeciesId(0), 4, 1.0, setup());
        assert_eq!(store.slot_of(AgentId(4)), Some(2));
        assert_eq!(store.slot_of(AgentId(0)), None, "destroyed agent has no slot");
    }
}
