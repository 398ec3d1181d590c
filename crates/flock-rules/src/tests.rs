//! Unit tests for the steering rules.

#[cfg(test)]
mod helpers {
    use flock_agent::{Boid, BoidStore};
    use flock_core::Vector;

    pub fn store<V: Vector>(boids: &[(V, V)]) -> BoidStore<V> {
        BoidStore::from_boids(boids.iter().map(|&(p, v)| Boid::new(p, v)))
    }

    pub fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }
}

#[cfg(test)]
mod flocking {
    use flock_core::{Vec2, Vec3, Vector};
    use flock_spatial::NeighborIndex;

    use super::helpers::{close, store};
    use crate::{alignment, cohesion, separation, Neighborhood};

    #[test]
    fn separation_sums_raw_offsets() {
        // Two crowding neighbors at distance 5 and 10, one visible at 30.
        let boids = store(&[
            (Vec2::new(100.0, 100.0), Vec2::ZERO),
            (Vec2::new(105.0, 100.0), Vec2::ZERO),
            (Vec2::new(100.0, 90.0), Vec2::ZERO),
            (Vec2::new(130.0, 100.0), Vec2::ZERO),
        ]);
        let idx = NeighborIndex::build(&boids.positions);
        let neighbors = idx.query(0, 50.0);
        let hood = Neighborhood::new(0, &neighbors, &boids);
        let d = separation(&hood, 12.0, 0.15);
        assert!(close(d.x, -5.0 * 0.15));
        assert!(close(d.y, 10.0 * 0.15));
    }

    #[test]
    fn alignment_and_cohesion_zero_without_visible_neighbors() {
        // Only a crowding neighbor (inside protected range) and one out of range.
        let boids = store(&[
            (Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)),
            (Vec2::new(105.0, 100.0), Vec2::new(0.0, 3.0)),
            (Vec2::new(300.0, 100.0), Vec2::new(0.0, 3.0)),
        ]);
        let idx = NeighborIndex::build(&boids.positions);
        let neighbors = idx.query(0, 50.0);
        let hood = Neighborhood::new(0, &neighbors, &boids);
        assert_eq!(alignment(&hood, 12.0, 50.0, 0.06), Vec2::ZERO);
        assert_eq!(cohesion(&hood, 12.0, 50.0, 0.002), Vec2::ZERO);
    }

    #[test]
    fn alignment_and_cohesion_average_visible_neighbors() {
        let boids = store(&[
            (Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)),
            (Vec2::new(120.0, 100.0), Vec2::new(0.0, 2.0)),
            (Vec2::new(100.0, 140.0), Vec2::new(2.0, 2.0)),
        ]);
        let idx = NeighborIndex::build(&boids.positions);
        let neighbors = idx.query(0, 50.0);
        let hood = Neighborhood::new(0, &neighbors, &boids);

        let a = alignment(&hood, 12.0, 50.0, 0.5);
        // mean velocity (1, 2) minus own (1, 0), halved.
        assert!(close(a.x, 0.0) && close(a.y, 1.0));

        let c = cohesion(&hood, 12.0, 50.0, 0.1);
        // mean position (110, 120) minus own (100, 100), times 0.1.
        assert!(close(c.x, 1.0) && close(c.y, 2.0));
    }

    #[test]
    fn neighbor_at_exact_visual_range_is_ignored() {
        let boids = store(&[
            (Vec2::new(0.0, 0.0), Vec2::ZERO),
            (Vec2::new(50.0, 0.0), Vec2::new(3.0, 0.0)),
        ]);
        let idx = NeighborIndex::build(&boids.positions);
        let neighbors = idx.query(0, 50.0);
        assert_eq!(neighbors, vec![1]);
        let hood = Neighborhood::new(0, &neighbors, &boids);
        assert_eq!(alignment(&hood, 12.0, 50.0, 1.0), Vec2::ZERO);
    }

    #[test]
    fn three_dimensional_cohesion() {
        let boids = store(&[
            (Vec3::new(50.0, 50.0, 50.0), Vec3::ZERO),
            (Vec3::new(50.0, 50.0, 70.0), Vec3::ZERO),
        ]);
        let idx = NeighborIndex::build(&boids.positions);
        let neighbors = idx.query(0, 50.0);
        let hood = Neighborhood::new(0, &neighbors, &boids);
        let c = cohesion(&hood, 12.0, 50.0, 0.5);
        assert_eq!(c, Vec3::new(0.0, 0.0, 10.0));
    }
}

#[cfg(test)]
mod boundary {
    use flock_core::{Bounds, Vec2, Vec3, Vector};

    use super::helpers::close;
    use crate::boundary_steering;

    #[test]
    fn zero_in_interior() {
        let b = Bounds::new(Vec2::new(800.0, 600.0));
        assert_eq!(boundary_steering(Vec2::new(400.0, 300.0), &b, 75.0, 0.2), Vec2::ZERO);
    }

    #[test]
    fn progressive_push_near_low_face() {
        let b = Bounds::new(Vec2::new(800.0, 600.0));
        let shallow = boundary_steering(Vec2::new(50.0, 300.0), &b, 75.0, 0.2);
        let deep = boundary_steering(Vec2::new(0.0, 300.0), &b, 75.0, 0.2);
        assert!(close(shallow.x, 0.2 * (1.0 + 25.0 / 75.0)));
        assert!(close(deep.x, 0.4));
        assert_eq!(deep.y, 0.0);
    }

    #[test]
    fn high_face_mirrors_low_face() {
        let b = Bounds::new(Vec3::new(800.0, 600.0, 600.0));
        let d = boundary_steering(Vec3::new(400.0, 300.0, 575.0), &b, 75.0, 0.2);
        assert_eq!(d.x, 0.0);
        assert!(close(d.z, -0.2 * (1.0 + 50.0 / 75.0)));
    }

    #[test]
    fn corner_pushes_on_both_axes() {
        let b = Bounds::new(Vec2::new(800.0, 600.0));
        let d = boundary_steering(Vec2::new(790.0, 10.0), &b, 75.0, 0.2);
        assert!(d.x < 0.0 && d.y > 0.0);
    }

    #[test]
    fn zero_margin_stays_finite() {
        let b = Bounds::new(Vec2::new(800.0, 600.0));
        let d = boundary_steering(Vec2::new(-5.0, 300.0), &b, 0.0, 0.2);
        assert!(d.is_finite());
        assert!(close(d.x, 0.2));
    }
}

#[cfg(test)]
mod avoidance {
    use flock_agent::Obstacle;
    use flock_core::{AgentRng, Vec2, Vec3, Vector};

    use super::helpers::close;
    use crate::{obstacle_avoidance, predator_avoidance};

    #[test]
    fn flee_scales_with_proximity() {
        let mut rng = AgentRng::new(0, 0);
        let d = predator_avoidance(Vec2::new(0.0, 0.0), &[Vec2::new(50.0, 0.0)], 100.0, 0.5, &mut rng);
        assert!(close(d.x, -0.25) && close(d.y, 0.0));
    }

    #[test]
    fn predator_out_of_range_is_ignored() {
        let mut rng = AgentRng::new(0, 0);
        let d = predator_avoidance(Vec2::new(0.0, 0.0), &[Vec2::new(150.0, 0.0)], 100.0, 0.5, &mut rng);
        assert_eq!(d, Vec2::ZERO);
    }

    #[test]
    fn coincident_predator_gives_random_strong_escape() {
        let mut rng = AgentRng::new(5, 2);
        let p = Vec3::new(10.0, 10.0, 10.0);
        let d = predator_avoidance(p, &[p], 100.0, 0.5, &mut rng);
        assert!(d.is_finite());
        assert!(close(d.length(), 5.0));
    }

    #[test]
    fn obstacle_at_surface_pushes_away() {
        let obstacles = [Obstacle::new(Vec2::new(30.0, 0.0), 30.0)];
        let d = obstacle_avoidance(Vec2::new(0.0, 0.0), &obstacles, 50.0, 0.5);
        assert!(d.x < 0.0);
        assert!(d.length() > 0.0);
        assert!(close(d.x, -0.5));
    }

    #[test]
    fn obstacle_inside_doubles_strength() {
        let obstacles = [Obstacle::new(Vec2::new(30.0, 0.0), 30.0)];
        let d = obstacle_avoidance(Vec2::new(20.0, 0.0), &obstacles, 50.0, 0.5);
        assert!(close(d.x, -1.0));
    }

    #[test]
    fn obstacle_ramp_and_cutoff() {
        let obstacles = [Obstacle::new(Vec2::new(0.0, 0.0), 10.0)];
        let mid = obstacle_avoidance(Vec2::new(0.0, 35.0), &obstacles, 50.0, 0.5);
        assert!(close(mid.y, 0.5 * 0.5));
        let far = obstacle_avoidance(Vec2::new(0.0, 60.0), &obstacles, 50.0, 0.5);
        assert_eq!(far, Vec2::ZERO);
    }

    #[test]
    fn obstacle_centre_has_defined_direction() {
        let obstacles = [Obstacle::new(Vec3::new(5.0, 5.0, 5.0), 10.0)];
        let d = obstacle_avoidance(Vec3::new(5.0, 5.0, 5.0), &obstacles, 50.0, 0.5);
        assert_eq!(d, Vec3::new(1.0, 0.0, 0.0));
    }
}

#[cfg(test)]
mod rule_set {
    use flock_agent::{Obstacle, ObstacleSet};
    use flock_core::{AgentRng, SimulationParameters, Vec2, Vector};
    use flock_spatial::NeighborIndex;

    use super::helpers::{close, store};
    use crate::{
        alignment, boundary_steering, cohesion, obstacle_avoidance, predator_avoidance, separation, Cohesion,
        FlockContext, Neighborhood, RuleSet,
    };

    #[test]
    fn standard_set_sums_every_rule() {
        let params = SimulationParameters::default();
        let boids = store(&[
            (Vec2::new(60.0, 300.0), Vec2::new(2.0, 0.0)),
            (Vec2::new(66.0, 300.0), Vec2::new(0.0, 2.0)),
            (Vec2::new(60.0, 330.0), Vec2::new(2.0, 2.0)),
        ]);
        let idx = NeighborIndex::build(&boids.positions);
        let predators = [Vec2::new(100.0, 300.0)];
        let mut obstacles = ObstacleSet::new();
        obstacles.add(Obstacle::new(Vec2::new(60.0, 250.0), 20.0));
        let ctx = FlockContext::new(&params, &boids, &idx, &predators, &obstacles);

        let rules = RuleSet::standard();
        assert_eq!(rules.len(), 6);
        let mut scratch = Vec::new();
        let mut rng = AgentRng::new(0, 0);
        let total = rules.steer(0, &ctx, &mut scratch, &mut rng);

        let neighbors = idx.query(0, params.visual_range);
        let hood = Neighborhood::new(0, &neighbors, &boids);
        let mut rng2 = AgentRng::new(0, 0);
        let expected = separation(&hood, 12.0, 0.15)
            + alignment(&hood, 12.0, 50.0, 0.06)
            + cohesion(&hood, 12.0, 50.0, 0.002)
            + boundary_steering(hood.position, &ctx.bounds, 75.0, 0.2)
            + predator_avoidance(hood.position, &predators, 100.0, 0.5, &mut rng2)
            + obstacle_avoidance(hood.position, obstacles.obstacles(), 50.0, 0.5);
        assert!(close(total.x, expected.x) && close(total.y, expected.y));
    }

    #[test]
    fn empty_set_is_zero() {
        let params = SimulationParameters::default();
        let boids = store(&[(Vec2::new(10.0, 10.0), Vec2::new(1.0, 1.0))]);
        let idx = NeighborIndex::build(&boids.positions);
        let obstacles = ObstacleSet::new();
        let ctx = FlockContext::new(&params, &boids, &idx, &[], &obstacles);
        let mut rng = AgentRng::new(0, 0);
        let d = RuleSet::empty().steer(0, &ctx, &mut Vec::new(), &mut rng);
        assert_eq!(d, Vec2::ZERO);
    }

    #[test]
    fn custom_set_names() {
        let rules = RuleSet::<Vec2>::empty().with(Cohesion);
        assert_eq!(rules.names(), vec!["cohesion"]);
    }
}
