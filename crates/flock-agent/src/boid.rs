//! The `Boid` value type.

use flock_core::{Bounds, SimRng, Vector};

/// One flock member.  Boids have no identity beyond their index in a
/// [`BoidStore`](crate::BoidStore).
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid<V> {
    pub position: V,
    pub velocity: V,
}

impl<V: Vector> Boid<V> {
    pub fn new(position: V, velocity: V) -> Self {
        Boid { position, velocity }
    }

    /// Uniform position in `bounds`, random heading, speed uniform in
    /// `[max_speed / 2, max_speed]`.
    pub fn random(bounds: &Bounds<V>, max_speed: f32, rng: &mut SimRng) -> Self {
        let position = bounds.random_point(0.0, rng.inner());
        let speed = rng.uniform(max_speed * 0.5, max_speed);
        let heading: V = rng.unit();
        Boid { position, velocity: heading * speed }
    }

    /// Boid at `position` moving at `speed` along `direction`.
    ///
    /// `direction` is normalized; a zero-length direction falls back to the
    /// first axis and `None` draws a random heading.
    pub fn at(position: V, speed: f32, direction: Option<V>, rng: &mut SimRng) -> Self {
        let heading = match direction {
            Some(d) => d.try_normalize().unwrap_or_else(|| V::unit(0)),
            None => rng.unit(),
        };
        Boid { position, velocity: heading * speed }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
