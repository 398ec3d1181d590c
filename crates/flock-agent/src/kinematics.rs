//! Speed limiting and explicit-Euler integration, shared by boids and
//! predators.

use flock_core::{AgentRng, Vector};

/// Rescale `velocity` so its speed lies in `[min_speed, max_speed]`,
/// preserving heading.
///
/// A zero (or non-finite) velocity has no heading to preserve; it is replaced
/// by a random unit direction at `min_speed`.
pub fn clamp_speed<V: Vector>(velocity: V, min_speed: f32, max_speed: f32, rng: &mut AgentRng) -> V {
    let speed = velocity.length();
    if speed == 0.0 || !speed.is_finite() {
        return rng.unit::<V>() * min_speed;
    }
    if speed > max_speed {
        velocity * (max_speed / speed)
    } else if speed < min_speed {
        velocity * (min_speed / speed)
    } else {
        velocity
    }
}

/// Advance `position` by one tick (`dt = 1`).
#[inline]
pub fn integrate<V: Vector>(position: V, velocity: V) -> V {
    position + velocity
}
