//! Unit tests for swarm-spawn.

#[cfg(test)]
mod helpers {
    use swarm_core::Vec3;
    use swarm_species::{SpeciesDefinition, SpeciesSetup, SwarmConfig, SwarmConfigBuilder};

    /// One species of `count` agents in a sphere of `radius` at the origin.
    pub fn single_species(count: u32, radius: f32, speed: f32) -> SwarmConfig {
        let mut b = SwarmConfigBuilder::new();
        let t = b.add_template(SpeciesDefinition::new("boid", 4.0));
        b.add_species(
            SpeciesSetup::new(Some(t), count)
                .spawn_sphere(Vec3::ZERO, radius)
                .initial_speed(speed),
        );
        b.build().unwrap()
    }
}

#[cfg(test)]
mod respawn {
    use swarm_agent::AgentStore;
    use swarm_core::{AgentId, SpeciesId, Vec3};
    use swarm_species::{SpeciesDefinition, SpeciesSetup, SwarmConfigBuilder};

    use super::helpers::single_species;
    use crate::respawn;

    #[test]
    fn hundred_agents_inside_radius() {
        let config = single_species(100, 10.0, 2.0);
        let mut store = AgentStore::new();
        let report = respawn(&mut store, &config, 1);

        assert_eq!(report.spawned, 100);
        assert_eq!(report.destroyed, 0);
        assert!(report.skipped.is_empty());
        assert_eq!(store.count, 100);
        assert_eq!(store.newly_spawned_count(), 0);
        for p in &store.position {
            assert!(p.length() <= 10.0 + 1e-4, "agent outside spawn sphere: {p}");
        }
        for v in &store.velocity {
            assert!((v.length() - 2.0).abs() < 1e-4);
        }
        assert!(store.max_speed.iter().all(|&s| s == 4.0));
    }

    #[test]
    fn same_seed_same_population() {
        let config = single_species(500, 25.0, 3.0);
        let mut a = AgentStore::new();
        let mut b = AgentStore::new();
        respawn(&mut a, &config, 2_501);
        respawn(&mut b, &config, 2_501);
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);

        let mut c = AgentStore::new();
        respawn(&mut c, &config, 2_502);
        assert_ne!(a.position, c.position);
    }

    #[test]
    fn agents_get_distinct_positions() {
        let config = single_species(50, 10.0, 1.0);
        let mut store = AgentStore::new();
        respawn(&mut store, &config, 7);
        assert_ne!(store.position[0], store.position[1]);
        assert_ne!(store.velocity[0], store.velocity[1]);
    }

    #[test]
    fn zero_radius_spawns_at_center() {
        let mut b = SwarmConfigBuilder::new();
        let t = b.add_template(SpeciesDefinition::new("boid", 1.0));
        let center = Vec3::new(5.0, -2.0, 1.0);
        b.add_species(SpeciesSetup::new(Some(t), 10).spawn_sphere(center, 0.0));
        let config = b.build().unwrap();

        let mut store = AgentStore::new();
        respawn(&mut store, &config, 1);
        assert!(store.position.iter().all(|&p| p == center));
        assert!(store.velocity.iter().all(|&v| v == Vec3::ZERO));
    }

    #[test]
    fn invalid_template_is_skipped() {
        let mut b = SwarmConfigBuilder::new();
        let t = b.add_template(SpeciesDefinition::new("boid", 1.0));
        b.add_species(SpeciesSetup::new(None, 10));
        b.add_species(SpeciesSetup::new(Some(t), 5));
        b.add_species(SpeciesSetup::new(None, 0));
        let config = b.build().unwrap();

        let mut store = AgentStore::new();
        let report = respawn(&mut store, &config, 1);
        assert_eq!(report.skipped, vec![SpeciesId(0)]);
        assert_eq!(report.spawned, 5);
        assert!(store.species.iter().all(|&s| s == SpeciesId(1)));
    }

    #[test]
    fn zero_population_is_valid() {
        let config = single_species(0, 10.0, 1.0);
        let mut store = AgentStore::new();
        let report = respawn(&mut store, &config, 1);
        assert_eq!(report.spawned, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn respawn_replaces_population_with_fresh_ids() {
        let config = single_species(3, 1.0, 1.0);
        let mut store = AgentStore::new();
        respawn(&mut store, &config, 1);
        let report = respawn(&mut store, &config, 1);
        assert_eq!(report.destroyed, 3);
        assert_eq!(store.count, 3);
        assert_eq!(store.id, vec![AgentId(3), AgentId(4), AgentId(5)]);
    }
}

#[cfg(test)]
mod controller {
    use swarm_agent::AgentStore;

    use super::helpers::single_species;
    use crate::{SpawnController, SpawnState};

    #[test]
    fn idle_controller_does_nothing() {
        let config = single_species(10, 1.0, 1.0);
        let mut store = AgentStore::new();
        let mut ctl = SpawnController::new();
        assert_eq!(ctl.state(), SpawnState::Idle);
        assert!(ctl.process_pending(&mut store, &config, 1).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn request_is_consumed_once() {
        let config = single_species(10, 1.0, 1.0);
        let mut store = AgentStore::new();
        let mut ctl = SpawnController::new();

        ctl.request();
        ctl.request();
        assert!(ctl.is_pending());

        let report = ctl.process_pending(&mut store, &config, 9).unwrap();
        assert_eq!(report.spawned, 10);
        assert_eq!(report.base_seed, 9);
        assert_eq!(ctl.state(), SpawnState::Idle);
        assert!(ctl.process_pending(&mut store, &config, 9).is_none());
        assert_eq!(store.count, 10);
    }

    #[test]
    fn pending_request_only_clears_by_processing() {
        let config = single_species(4, 1.0, 1.0);
        let mut store = AgentStore::new();
        let mut ctl = SpawnController::new();

        ctl.request();
        assert!(ctl.is_pending());
        assert!(ctl.is_pending());
        assert!(store.is_empty());

        let report = ctl.process_pending(&mut store, &config, 3).unwrap();
        assert_eq!(report.spawned, 4);
        assert_eq!(ctl.state(), SpawnState::Idle);
    }
}
