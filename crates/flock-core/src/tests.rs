//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn ordering_and_next() {
        assert!(AgentId(0) < AgentId(1));
        assert_eq!(AgentId(4).next(), AgentId(5));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::FRAC_PI_2;

    use crate::{Bounds, UnitScale, Vec2};

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(Vec2::splat(3.0).scale(Vec2::new(-1.0, 0.0)), Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert!((v.normalized().length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn lerp_is_unclamped() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.25), Vec2::new(2.5, 0.0));
        assert_eq!(a.lerp(b, 1.5), Vec2::new(15.0, 0.0));
    }

    #[test]
    fn angle_roundtrip() {
        let v = Vec2::from_angle(FRAC_PI_2);
        assert!(v.x.abs() < 1e-6 && (v.y - 1.0).abs() < 1e-6);
        assert!((v.angle() - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.angle(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn bounds_validity_and_containment() {
        let b = Bounds::new(10.0, 5.0);
        assert!(b.is_valid());
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(!b.contains(Vec2::new(10.0, 1.0)));
        assert!(!b.contains(Vec2::new(1.0, -0.1)));
        assert!(!Bounds::new(0.0, 5.0).is_valid());
        assert!(!Bounds::new(f32::NAN, 5.0).is_valid());
    }

    #[test]
    fn unit_scale_default() {
        let s = UnitScale::default();
        assert_eq!(s.pixels_per_unit, 108.0);
        assert_eq!(s.pixels_to_units(54.0), 0.5);
    }
}

#[cfg(test)]
mod timer {
    use crate::Timer;

    #[test]
    fn advance_goes_negative() {
        let mut t = Timer::new(1.0, 0.5);
        assert!(!t.is_elapsed());
        t.advance(0.3);
        assert!(!t.is_elapsed());
        t.advance(0.3);
        assert!(t.is_elapsed());
        assert!(t.remaining() < 0.0);
    }

    #[test]
    fn zero_start_is_elapsed() {
        assert!(Timer::new(1.0, 0.0).is_elapsed());
    }

    #[test]
    fn reset_and_set() {
        let mut t = Timer::new(0.2, 0.0);
        t.reset();
        assert_eq!(t.remaining(), 0.2);
        t.set(0.0);
        assert!(t.is_elapsed());
        assert_eq!(t.duration(), 0.2);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_orders_and_displays() {
        assert!(Tick::ZERO < Tick(1));
        assert_eq!(Tick(42).to_string(), "T42");
    }

    #[test]
    fn clock_accumulates_deltas() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-9);
        assert_eq!(clock.to_string(), "T2 (0.75s)");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.unit_f32(), r2.unit_f32());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<f32> = (0..4).map(|_| r0.unit_f32()).collect();
        let b: Vec<f32> = (0..4).map(|_| r1.unit_f32()).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn unit_f32_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.unit_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn sign_and_axis_values() {
        let mut rng = AgentRng::new(9, AgentId(3));
        let (mut neg, mut pos, mut zero) = (0, 0, 0);
        for _ in 0..1000 {
            let s = rng.sign();
            assert!(s == 1.0 || s == -1.0);
            match rng.axis_with_zero() {
                v if v == 0.0 => zero += 1,
                v if v == 1.0 => pos += 1,
                v if v == -1.0 => neg += 1,
                v => panic!("unexpected axis value {v}"),
            }
        }
        assert!(neg > 0 && pos > 0 && zero > 0);
    }
}
