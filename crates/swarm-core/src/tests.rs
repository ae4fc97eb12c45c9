//! Unit tests for swarm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, SpeciesId, TemplateId};

    #[test]
    fn index_roundtrip() {
        let id = SpeciesId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(SpeciesId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn species_id_rejects_overflow() {
        assert!(SpeciesId::try_from(70_000usize).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(SpeciesId::INVALID.0, u16::MAX);
        assert_eq!(TemplateId::default(), TemplateId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, SwarmError, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_accumulates_elapsed() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cell_size, 3.0);
    }

    #[test]
    fn zero_cell_size_rejected() {
        let cfg = SimConfig { cell_size: 0.0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(SwarmError::InvalidCellSize(_))));
    }

    #[test]
    fn negative_delta_time_rejected() {
        let cfg = SimConfig { delta_time: -0.1, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(SwarmError::InvalidDeltaTime(_))));
    }

    #[test]
    fn zero_threads_rejected() {
        let cfg = SimConfig { num_threads: Some(0), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn end_tick() {
        let cfg = SimConfig { total_ticks: 120, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(120));
    }
}

#[cfg(test)]
mod rng {
    use crate::AgentRng;
    use crate::rng::{base_seed_from_elapsed, non_zero_seed};

    #[test]
    fn seed_never_zero() {
        assert_eq!(base_seed_from_elapsed(0.0), 1);
        assert_eq!(non_zero_seed(0), 1);
        assert_eq!(non_zero_seed(u32::MAX), 1);
    }

    #[test]
    fn seed_scales_elapsed_to_millis() {
        assert_eq!(base_seed_from_elapsed(2.5), 2_501);
        // Truncation, not rounding.
        assert_eq!(base_seed_from_elapsed(0.0019), 2);
    }

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::from_index(12345, 0);
        let mut r2 = AgentRng::from_index(12345, 0);
        for _ in 0..100 {
            assert_eq!(r1.next_f32_below(5.0), r2.next_f32_below(5.0));
            assert_eq!(r1.unit_direction(), r2.unit_direction());
        }
    }

    #[test]
    fn different_indices_differ() {
        let mut r0 = AgentRng::from_index(1, 0);
        let mut r1 = AgentRng::from_index(1, 1);
        let a = r0.unit_direction();
        let b = r1.unit_direction();
        assert_ne!(a, b, "streams for adjacent indices should diverge");
    }

    #[test]
    fn unit_direction_has_unit_length() {
        let mut rng = AgentRng::from_index(7, 3);
        for _ in 0..1000 {
            let d = rng.unit_direction();
            assert!((d.length() - 1.0).abs() < 1e-4, "got |d| = {}", d.length());
        }
    }

    #[test]
    fn next_f32_below_in_bounds() {
        let mut rng = AgentRng::from_index(0, 0);
        for _ in 0..1000 {
            let v = rng.next_f32_below(10.0);
            assert!((0.0..10.0).contains(&v));
        }
        assert_eq!(rng.next_f32_below(0.0), 0.0);
    }
}
