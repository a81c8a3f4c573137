//! Unit tests for flock-agent.

#[cfg(test)]
mod size {
    use flock_core::UnitScale;

    use crate::AgentSize;

    #[test]
    fn half_extents() {
        let s = AgentSize::new(1.0, 0.5);
        assert_eq!(s.half_width(), 0.5);
        assert_eq!(s.half_height(), 0.25);
    }

    #[test]
    fn from_pixels_uses_scale() {
        let s = AgentSize::from_pixels(108.0, 54.0, UnitScale::default());
        assert_eq!(s, AgentSize::new(1.0, 0.5));
        assert!(AgentSize::default().width > 0.0);
    }
}

#[cfg(test)]
mod direction {
    use flock_core::{AgentId, AgentRng, Vec2};

    use crate::sample_direction;

    #[test]
    fn never_zero_over_many_draws() {
        for seed in 0..50u64 {
            for agent in 0..40u32 {
                let mut rng = AgentRng::new(seed, AgentId(agent));
                let dir = sample_direction(&mut rng, 100);
                assert!(dir.length() > 0.0, "seed {seed} agent {agent} produced zero");
                assert!(dir.length() <= 1.0 + 1e-6);
            }
        }
    }

    #[test]
    fn zero_attempts_falls_back() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(sample_direction(&mut rng, 0), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn diagonals_are_normalized() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let mut saw_diagonal = false;
        for _ in 0..200 {
            let d = sample_direction(&mut rng, 100);
            if d.x != 0.0 && d.y != 0.0 {
                saw_diagonal = true;
                assert!((d.length() - 1.0).abs() < 1e-6);
            }
        }
        assert!(saw_diagonal);
    }
}

#[cfg(test)]
mod builder {
    use flock_core::{AgentId, AgentRng, Vec2};

    use crate::{AgentBuilder, AgentSize, CohesionState, ShakeState, SpawnParams};

    #[test]
    fn defaults_applied() {
        let params = SpawnParams::default();
        let mut rng = AgentRng::new(1, AgentId(0));
        let agent = AgentBuilder::new(Vec2::new(2.0, 3.0)).build(AgentId(0), &params, &mut rng);

        assert_eq!(agent.position, Vec2::new(2.0, 3.0));
        assert_eq!(agent.size(), params.default_size);
        assert_eq!(agent.shake, ShakeState::Settled);
        assert_eq!(agent.cohesion, CohesionState::Settled);
        assert!(agent.shake_timer.is_elapsed(), "first shake fires on the first tick");
        assert_eq!(agent.cohesion_timer.remaining(), 3.0);
        assert_eq!(agent.heading, 0.0);
    }

    #[test]
    fn random_velocity_uses_base_speed() {
        let params = SpawnParams::default();
        for i in 0..100 {
            let mut rng = AgentRng::new(5, AgentId(i));
            let agent = AgentBuilder::new(Vec2::ZERO).build(AgentId(i), &params, &mut rng);
            let v = agent.velocity;
            assert!(v != Vec2::ZERO);
            assert!(v.x.abs() <= 3.0 && v.y.abs() <= 3.0);
        }
    }

    #[test]
    fn explicit_velocity_and_heading() {
        let params = SpawnParams::default();
        let mut rng = AgentRng::new(1, AgentId(0));
        let agent = AgentBuilder::new(Vec2::ZERO)
            .velocity(Vec2::new(3.0, 0.0))
            .heading(1.0)
            .build(AgentId(0), &params, &mut rng);
        assert_eq!(agent.velocity, Vec2::new(3.0, 0.0));
        assert_eq!(agent.heading, 1.0);
    }

    #[test]
    fn non_positive_size_falls_back_per_axis() {
        let params = SpawnParams::default();
        let mut rng = AgentRng::new(1, AgentId(0));
        let agent = AgentBuilder::new(Vec2::ZERO)
            .size(AgentSize::new(0.0, 2.0))
            .build(AgentId(0), &params, &mut rng);
        assert_eq!(agent.size().width, params.default_size.width);
        assert_eq!(agent.size().height, 2.0);
    }
}

#[cfg(test)]
mod store {
    use flock_core::{AgentId, Vec2};

    use crate::{AgentBuilder, AgentRngs, AgentStore, SpawnParams};

    fn spawn_n(store: &mut AgentStore, rngs: &mut AgentRngs, n: usize) -> Vec<AgentId> {
        let params = SpawnParams::default();
        (0..n)
            .map(|i| store.spawn(rngs, AgentBuilder::new(Vec2::new(i as f32, 0.0)), &params))
            .collect()
    }

    #[test]
    fn spawn_assigns_increasing_ids() {
        let mut store = AgentStore::new();
        let mut rngs = AgentRngs::new(42);
        let ids = spawn_n(&mut store, &mut rngs, 3);
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
        assert_eq!(store.len(), 3);
        assert_eq!(rngs.len(), 3);
    }

    #[test]
    fn lookup_by_id() {
        let mut store = AgentStore::new();
        let mut rngs = AgentRngs::new(42);
        spawn_n(&mut store, &mut rngs, 4);
        assert_eq!(store.slot_of(AgentId(2)), Some(2));
        assert_eq!(store.get(AgentId(3)).unwrap().position, Vec2::new(3.0, 0.0));
        assert!(store.get(AgentId(9)).is_none());

        store.get_mut(AgentId(1)).unwrap().position = Vec2::new(7.0, 7.0);
        assert_eq!(store.as_slice()[1].position, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn clear_keeps_id_counter() {
        let mut store = AgentStore::new();
        let mut rngs = AgentRngs::new(42);
        spawn_n(&mut store, &mut rngs, 5);
        store.clear(&mut rngs);
        assert!(store.is_empty());
        assert!(rngs.is_empty());
        assert_eq!(store.next_id(), AgentId(5));

        let ids = spawn_n(&mut store, &mut rngs, 2);
        assert_eq!(ids, vec![AgentId(5), AgentId(6)]);
        assert_eq!(store.slot_of(AgentId(6)), Some(1));
        assert!(store.get(AgentId(0)).is_none());
    }

    #[test]
    fn same_seed_same_population() {
        let run = || {
            let mut store = AgentStore::new();
            let mut rngs = AgentRngs::new(99);
            spawn_n(&mut store, &mut rngs, 10);
            store.iter().map(|a| a.velocity).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
