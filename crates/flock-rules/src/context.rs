//! Read-only flock state passed to every steering rule.

use flock_agent::{BoidStore, ObstacleSet};
use flock_core::{Bounds, SimulationParameters};
use flock_spatial::{IndexPoint, NeighborIndex};

/// A read-only snapshot of the flock for one rule phase.
///
/// Built once per tick by the flock and shared by every boid's rule
/// evaluation.  All borrows end before the apply phase mutates anything.
pub struct FlockContext<'a, V: IndexPoint> {
    pub params:    &'a SimulationParameters,
    pub bounds:    Bounds<V>,
    /// Pre-tick boid state.
    pub boids:     &'a BoidStore<V>,
    /// Index built from `boids.positions` this tick.
    pub index:     &'a NeighborIndex<V>,
    /// Pre-tick predator positions.
    pub predators: &'a [V],
    pub obstacles: &'a ObstacleSet<V>,
}

impl<'a, V: IndexPoint> FlockContext<'a, V> {
    #[inline]
    pub fn new(
        params:    &'a SimulationParameters,
        boids:     &'a BoidStore<V>,
        index:     &'a NeighborIndex<V>,
        predators: &'a [V],
        obstacles: &'a ObstacleSet<V>,
    ) -> Self {
        Self {
            params,
            bounds: params.bounds(),
            boids,
            index,
            predators,
            obstacles,
        }
    }
}
