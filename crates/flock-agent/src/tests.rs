//! Unit tests for flock-agent.

#[cfg(test)]
mod boid {
    use flock_core::{Bounds, SimRng, Vec2, Vec3, Vector};

    use crate::Boid;

    #[test]
    fn random_boids_in_bounds_with_bounded_speed() {
        let bounds = Bounds::new(Vec2::new(800.0, 600.0));
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            let b = Boid::random(&bounds, 3.0, &mut rng);
            assert!(bounds.contains(b.position, 0.0));
            assert!(b.speed() >= 1.5 - 1e-4 && b.speed() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn at_normalizes_direction() {
        let mut rng = SimRng::new(0);
        let b = Boid::at(Vec3::new(1.0, 1.0, 1.0), 2.0, Some(Vec3::new(0.0, 10.0, 0.0)), &mut rng);
        assert_eq!(b.velocity, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn at_zero_direction_falls_back_to_x() {
        let mut rng = SimRng::new(0);
        let b = Boid::at(Vec2::ZERO, 2.5, Some(Vec2::ZERO), &mut rng);
        assert_eq!(b.velocity, Vec2::new(2.5, 0.0));
    }

    #[test]
    fn at_without_direction_is_random_at_speed() {
        let mut rng = SimRng::new(9);
        let b = Boid::at(Vec3::ZERO, 2.0, None, &mut rng);
        assert!((b.speed() - 2.0).abs() < 1e-5);
    }
}

#[cfg(test)]
mod kinematics {
    use flock_core::{AgentRng, Vec2, Vec3, Vector};

    use crate::{clamp_speed, integrate};

    #[test]
    fn too_fast_is_scaled_down() {
        let mut rng = AgentRng::new(0, 0);
        let v = clamp_speed(Vec2::new(30.0, 40.0), 2.0, 3.0, &mut rng);
        assert!((v.length() - 3.0).abs() < 1e-5);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn too_slow_is_scaled_up() {
        let mut rng = AgentRng::new(0, 0);
        let v = clamp_speed(Vec3::new(0.0, 0.0, 0.5), 2.0, 3.0, &mut rng);
        assert_eq!(v, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn in_range_is_untouched() {
        let mut rng = AgentRng::new(0, 0);
        let v = Vec2::new(2.5, 0.0);
        assert_eq!(clamp_speed(v, 2.0, 3.0, &mut rng), v);
    }

    #[test]
    fn zero_speed_gets_random_heading_at_min_speed() {
        let mut rng = AgentRng::new(1, 1);
        for _ in 0..20 {
            let v = clamp_speed(Vec2::ZERO, 2.0, 3.0, &mut rng);
            assert!((v.length() - 2.0).abs() < 1e-5);
            assert!(v.is_finite());
        }
    }

    #[test]
    fn integrate_adds_velocity() {
        assert_eq!(integrate(Vec2::new(1.0, 1.0), Vec2::new(0.5, -2.0)), Vec2::new(1.5, -1.0));
    }
}

#[cfg(test)]
mod obstacle {
    use flock_core::{Bounds, ObstacleId, SimRng, Vec2, Vector};

    use crate::{Obstacle, ObstacleSet};

    #[test]
    fn contains_and_surface_distance() {
        let o = Obstacle::new(Vec2::new(30.0, 0.0), 30.0);
        assert!(o.contains(Vec2::new(20.0, 0.0)));
        assert!(!o.contains(Vec2::new(0.0, 0.0)));
        assert_eq!(o.surface_distance(Vec2::new(0.0, 0.0)), 0.0);
        assert_eq!(o.surface_distance(Vec2::new(30.0, 10.0)), -20.0);
    }

    #[test]
    fn handles_stay_valid_after_removal() {
        let mut set = ObstacleSet::new();
        let a = set.add(Obstacle::new(Vec2::new(100.0, 100.0), 20.0));
        let b = set.add(Obstacle::new(Vec2::new(300.0, 100.0), 20.0));
        let c = set.add(Obstacle::new(Vec2::new(500.0, 100.0), 20.0));
        assert!(set.remove(b));
        assert!(!set.remove(b));
        assert_eq!(set.get(a).map(|o| o.center.x), Some(100.0));
        assert_eq!(set.get(c).map(|o| o.center.x), Some(500.0));
        let d = set.add(Obstacle::new(Vec2::new(700.0, 100.0), 20.0));
        assert_ne!(d, b);
        assert!(!set.remove(ObstacleId(999)));
    }

    #[test]
    fn clear_reports_count() {
        let mut set = ObstacleSet::new();
        set.add(Obstacle::new(Vec2::new(1.0, 1.0), 1.0));
        set.add(Obstacle::new(Vec2::new(5.0, 5.0), 1.0));
        assert_eq!(set.clear(), 2);
        assert!(set.is_empty());
        assert_eq!(set.clear(), 0);
    }

    #[test]
    fn random_obstacle_keeps_margin() {
        let bounds = Bounds::new(Vec2::new(800.0, 600.0));
        let mut rng = SimRng::new(4);
        for _ in 0..50 {
            let o = Obstacle::random(&bounds, 20.0, 50.0, 75.0, &mut rng);
            assert!(o.radius >= 20.0 && o.radius < 50.0);
            assert!(o.center.x >= 75.0 + o.radius && o.center.x <= 725.0 - o.radius);
            assert!(o.center.y >= 75.0 + o.radius && o.center.y <= 525.0 - o.radius);
        }
    }

    #[test]
    fn scatter_does_not_overlap() {
        let bounds = Bounds::new(Vec2::new(800.0, 600.0));
        let mut rng = SimRng::new(12);
        let mut set = ObstacleSet::new();
        let ids = set.scatter(6, &bounds, (20.0, 50.0), 75.0, 30.0, &mut rng);
        assert_eq!(ids.len(), set.len());
        let obs: Vec<_> = set.obstacles().copied().collect();
        for (i, a) in obs.iter().enumerate() {
            for b in &obs[i + 1..] {
                assert!(a.center.distance(b.center) >= a.radius + b.radius + 30.0);
            }
        }
    }
}

#[cfg(test)]
mod predator {
    use flock_core::{AgentRng, Bounds, PredatorId, SimRng, Vec2};

    use crate::{HuntPhase, Predator, Strategy, STRATEGY_ORDER};

    fn predator(strategy: Strategy) -> Predator<Vec2> {
        Predator::new(PredatorId(0), Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0), strategy, AgentRng::new(0, 0))
    }

    #[test]
    fn strategy_slots_wrap() {
        assert_eq!(Strategy::for_slot(0), Strategy::Center);
        assert_eq!(Strategy::for_slot(3), Strategy::Patrol);
        assert_eq!(Strategy::for_slot(7), Strategy::Straggler);
        let names: Vec<_> = STRATEGY_ORDER.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Hawk", "Falcon", "Eagle", "Kite", "Osprey"]);
    }

    #[test]
    fn only_patrol_hunters_patrol() {
        assert!(predator(Strategy::Patrol).patrol.is_some());
        assert!(predator(Strategy::Random).patrol.is_none());
        assert_eq!(predator(Strategy::Patrol).phase(), HuntPhase::Patrol);
        assert_eq!(predator(Strategy::Nearest).phase(), HuntPhase::Idle);
    }

    #[test]
    fn random_patrol_hunters_start_out_of_phase() {
        let bounds = Bounds::new(Vec2::new(800.0, 600.0));
        let mut rng = SimRng::new(3);
        let thetas: Vec<f32> = (0..8)
            .map(|i| Predator::random(PredatorId(i), &bounds, 2.5, Strategy::Patrol, &mut rng))
            .filter_map(|p| p.patrol.map(|s| s.theta))
            .collect();
        assert_eq!(thetas.len(), 8);
        assert!(thetas.iter().all(|t| (0.0..std::f32::consts::TAU).contains(t)));
        assert!(thetas.windows(2).any(|w| w[0] != w[1]));
        assert!(thetas.iter().any(|&t| t != 0.0));
    }

    #[test]
    fn cooldown_clears_target() {
        let mut p = predator(Strategy::Nearest);
        p.hunt.acquire(4);
        p.hunt.frames_since_target_switch = 20;
        assert_eq!(p.phase(), HuntPhase::Pursuing(4));
        p.hunt.start_cooldown(60);
        assert_eq!(p.phase(), HuntPhase::Cooldown);
        assert_eq!(p.hunt.target, None);
        assert_eq!(p.hunt.frames_since_target_switch, 0);
        assert_eq!(p.hunt.last_target_distance, f32::INFINITY);
    }
}
