//! Unit tests for flock-core primitives.

#[cfg(test)]
mod vector {
    use crate::{SimRng, Vec2, Vec3, Vector};

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 1.0);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).length(), 3.0);
        assert_eq!(Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(Vec2::ZERO.try_normalize().is_none());
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
        let n = Vec3::new(0.0, 0.0, 5.0).normalize_or_zero();
        assert_eq!(n, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn clamp_length_max_preserves_direction() {
        let v = Vec2::new(30.0, 40.0).clamp_length_max(1.0);
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6 && (v.y - 0.8).abs() < 1e-6);
        let short = Vec2::new(0.1, 0.0);
        assert_eq!(short.clamp_length_max(1.0), short);
    }

    #[test]
    fn random_units_have_unit_length() {
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            let u2: Vec2 = rng.unit();
            let u3: Vec3 = rng.unit();
            assert!((u2.length() - 1.0).abs() < 1e-5);
            assert!((u3.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn axis_access() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        *v.axis_mut(2) = 9.0;
        assert_eq!(v.axis(0), 1.0);
        assert_eq!(v.axis(2), 9.0);
        assert_eq!(Vec3::unit(1), Vec3::new(0.0, 1.0, 0.0));
    }
}

#[cfg(test)]
mod bounds {
    use crate::{Bounds, SimRng, Vec2, Vec3};

    #[test]
    fn near_edge_any_face() {
        let b = Bounds::new(Vec2::new(800.0, 600.0));
        assert!(b.near_edge(Vec2::new(50.0, 300.0), 100.0));
        assert!(b.near_edge(Vec2::new(400.0, 550.0), 100.0));
        assert!(!b.near_edge(Vec2::new(400.0, 300.0), 100.0));
    }

    #[test]
    fn contains_with_tolerance() {
        let b = Bounds::new(Vec3::new(100.0, 100.0, 100.0));
        assert!(b.contains(Vec3::new(-1.0, 50.0, 101.0), 2.0));
        assert!(!b.contains(Vec3::new(-3.0, 50.0, 50.0), 2.0));
    }

    #[test]
    fn clamp_inset_collapses_when_empty() {
        let b = Bounds::new(Vec2::new(100.0, 600.0));
        let p = b.clamp_inset(Vec2::new(0.0, 0.0), 125.0);
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, 125.0);
    }

    #[test]
    fn drop_outward_only_touches_components_leaving_near_faces() {
        let b = Bounds::new(Vec3::new(800.0, 600.0, 600.0));
        let pull = Vec3::new(-1.0, 0.5, 0.3);
        // Near the low x face: the -x part goes, the rest stays.
        assert_eq!(b.drop_outward(Vec3::new(20.0, 300.0, 300.0), pull, 75.0), Vec3::new(0.0, 0.5, 0.3));
        // Near the high y and z faces: +y and +z go.
        assert_eq!(b.drop_outward(Vec3::new(400.0, 590.0, 560.0), pull, 75.0), Vec3::new(-1.0, 0.0, 0.0));
        // Inward pulls and the interior are untouched.
        assert_eq!(b.drop_outward(Vec3::new(20.0, 300.0, 300.0), -pull, 75.0), -pull);
        assert_eq!(b.drop_outward(Vec3::new(400.0, 300.0, 300.0), pull, 75.0), pull);
    }

    #[test]
    fn random_point_respects_inset() {
        let b = Bounds::new(Vec2::new(800.0, 600.0));
        let mut rng = SimRng::new(1);
        for _ in 0..200 {
            let p: Vec2 = b.random_point(75.0, rng.inner());
            assert!(p.x >= 75.0 && p.x <= 725.0);
            assert!(p.y >= 75.0 && p.y <= 525.0);
        }
    }
}

#[cfg(test)]
mod params {
    use crate::{SimulationParameters, Vec2, Vec3};

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn protected_range_must_be_below_visual() {
        let p = SimulationParameters { protected_range: 60.0, ..Default::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn speed_order_checked() {
        let p = SimulationParameters { min_speed: 4.0, ..Default::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn bounds_by_dimension() {
        let p = SimulationParameters::default();
        assert_eq!(p.bounds::<Vec2>().extent, Vec2::new(800.0, 600.0));
        assert_eq!(p.bounds::<Vec3>().extent, Vec3::new(800.0, 600.0, 600.0));
    }

    #[test]
    fn predator_speed_limits() {
        let p = SimulationParameters::default();
        assert_eq!(p.predator_speed_limits(), (1.25, 2.5));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, 3);
        let mut b = AgentRng::new(42, 3);
        for _ in 0..10 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, 0);
        let mut b = AgentRng::new(42, 1);
        let sa: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let sb: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn uniform_empty_interval() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
        let x = rng.uniform(1.0, 2.0);
        assert!((1.0..2.0).contains(&x));
    }
}

#[cfg(test)]
mod ids {
    use crate::{ObstacleId, PredatorId, Tick};

    #[test]
    fn handles() {
        assert_eq!(PredatorId(0).next(), PredatorId(1));
        assert_eq!(ObstacleId::default(), ObstacleId::INVALID);
        assert_eq!(PredatorId(7).to_string(), "PredatorId(7)");
    }

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }
}
