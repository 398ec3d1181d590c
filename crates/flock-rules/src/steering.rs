//! Pure steering rules.
//!
//! Every function returns a velocity delta and touches nothing else.  All
//! degenerate inputs (no neighbors, zero distances, zero margins) have a
//! defined, finite result.

use flock_agent::Obstacle;
use flock_core::{AgentRng, Bounds, Vector};

use crate::neighborhood::Neighborhood;

/// Escape magnitude, as a multiple of `avoidance_strength`, for a boid that
/// sits exactly on a predator.
const DEGENERATE_ESCAPE_MULTIPLIER: f32 = 10.0;

/// Squared distances below this count as "on top of" a predator.
const DEGENERATE_DISTANCE_SQ: f32 = 1e-10;

// ── Flocking ──────────────────────────────────────────────────────────────────

/// Sum of `(self − neighbor)` over neighbors closer than `protected_range`,
/// scaled by `strength`.
///
/// Not distance-weighted: the push grows with the number of crowding
/// neighbors and with their raw offsets.
pub fn separation<V: Vector>(hood: &Neighborhood<'_, V>, protected_range: f32, strength: f32) -> V {
    let protected_sq = protected_range * protected_range;
    let mut push = V::ZERO;
    for (p, _, d2) in hood.mates() {
        if d2 < protected_sq {
            push += hood.position - p;
        }
    }
    push * strength
}

/// Mean position and velocity of the neighbors in
/// `[protected_range, visual_range)`, or `None` if there are none.
fn visible_means<V: Vector>(hood: &Neighborhood<'_, V>, protected_range: f32, visual_range: f32) -> Option<(V, V)> {
    let protected_sq = protected_range * protected_range;
    let visual_sq = visual_range * visual_range;
    let mut pos_sum = V::ZERO;
    let mut vel_sum = V::ZERO;
    let mut n = 0usize;
    for (p, v, d2) in hood.mates() {
        if d2 >= protected_sq && d2 < visual_sq {
            pos_sum += p;
            vel_sum += v;
            n += 1;
        }
    }
    (n > 0).then(|| (pos_sum / n as f32, vel_sum / n as f32))
}

/// Steer toward the mean velocity of visible (but not crowding) neighbors.
pub fn alignment<V: Vector>(hood: &Neighborhood<'_, V>, protected_range: f32, visual_range: f32, factor: f32) -> V {
    match visible_means(hood, protected_range, visual_range) {
        Some((_, avg_vel)) => (avg_vel - hood.velocity) * factor,
        None => V::ZERO,
    }
}

/// Steer toward the mean position of visible (but not crowding) neighbors.
pub fn cohesion<V: Vector>(hood: &Neighborhood<'_, V>, protected_range: f32, visual_range: f32, factor: f32) -> V {
    match visible_means(hood, protected_range, visual_range) {
        Some((avg_pos, _)) => (avg_pos - hood.position) * factor,
        None => V::ZERO,
    }
}

// ── Boundary ──────────────────────────────────────────────────────────────────

/// Progressive push back toward the interior, per axis.
///
/// Within `margin` of the low face the push is
/// `turn_factor * (1 + (margin − coord) / margin)` in the positive direction,
/// growing the deeper the agent goes; the high face mirrors it.  Zero in the
/// interior.
pub fn boundary_steering<V: Vector>(position: V, bounds: &Bounds<V>, margin: f32, turn_factor: f32) -> V {
    V::from_fn(|i| {
        let c = position.axis(i);
        let extent = bounds.extent.axis(i);
        let depth = if c < margin {
            margin - c
        } else if c > extent - margin {
            extent - margin - c
        } else {
            return 0.0;
        };
        let ramp = if margin > 0.0 { depth.abs() / margin } else { 0.0 };
        depth.signum() * turn_factor * (1.0 + ramp)
    })
}

// ── Predators ─────────────────────────────────────────────────────────────────

/// Flee every predator closer than `detection_range`, linearly stronger the
/// closer it is.
///
/// A boid exactly on top of a predator has no "away" direction; it gets a
/// random direction at `10 * strength` instead.
pub fn predator_avoidance<V: Vector>(
    position: V,
    predators: &[V],
    detection_range: f32,
    strength: f32,
    rng: &mut AgentRng,
) -> V {
    let range_sq = detection_range * detection_range;
    let mut push = V::ZERO;
    for &pred in predators {
        let away = position - pred;
        let d2 = away.length_squared();
        if d2 >= range_sq {
            continue;
        }
        if d2 < DEGENERATE_DISTANCE_SQ {
            push += rng.unit::<V>() * (DEGENERATE_ESCAPE_MULTIPLIER * strength);
            continue;
        }
        let dist = d2.sqrt();
        push += away / dist * (strength * (1.0 - dist / detection_range));
    }
    push
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Push away from obstacle centres.
///
/// Inside an obstacle the push is `2 * strength`; from the surface it ramps
/// linearly from `strength` down to zero at `detection_range` beyond the
/// surface.  At an obstacle's exact centre the push is along the first axis.
pub fn obstacle_avoidance<'o, V: Vector>(
    position: V,
    obstacles: impl IntoIterator<Item = &'o Obstacle<V>>,
    detection_range: f32,
    strength: f32,
) -> V {
    let mut push = V::ZERO;
    for o in obstacles {
        let away = position - o.center;
        let dist = away.length();
        if dist >= detection_range + o.radius {
            continue;
        }
        let surface = dist - o.radius;
        let magnitude = if surface < 0.0 {
            2.0 * strength
        } else {
            strength * (1.0 - surface / detection_range)
        };
        let dir = away.try_normalize().unwrap_or_else(|| V::unit(0));
        push += dir * magnitude;
    }
    push
}
