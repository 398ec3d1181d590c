//! One boid together with the boids its index query returned.

use flock_agent::BoidStore;
use flock_core::Vector;

/// A boid and its visual-range neighbors, borrowed from the pre-tick snapshot.
///
/// The neighbor list comes from a single `visual_range` query; separation,
/// alignment and cohesion each filter it by distance.
pub struct Neighborhood<'a, V> {
    pub index:    usize,
    pub position: V,
    pub velocity: V,
    neighbors:    &'a [usize],
    positions:    &'a [V],
    velocities:   &'a [V],
}

impl<'a, V: Vector> Neighborhood<'a, V> {
    /// # Panics
    /// Panics if `index` or any neighbor index is out of range for `boids`.
    pub fn new(index: usize, neighbors: &'a [usize], boids: &'a BoidStore<V>) -> Self {
        Neighborhood {
            index,
            position:   boids.positions[index],
            velocity:   boids.velocities[index],
            neighbors,
            positions:  &boids.positions,
            velocities: &boids.velocities,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// `(position, velocity, squared distance)` of every neighbor.
    pub fn mates(&self) -> impl Iterator<Item = (V, V, f32)> + '_ {
        self.neighbors.iter().map(move |&j| {
            let p = self.positions[j];
            (p, self.velocities[j], self.position.distance_squared(p))
        })
    }
}
