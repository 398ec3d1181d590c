//! Static spherical (circular in 2D) obstacles.

use flock_core::{Bounds, ObstacleId, SimRng, Vector};

/// Attempts per obstacle before [`ObstacleSet::scatter`] gives up on it.
const SCATTER_ATTEMPTS: usize = 100;

// ── Obstacle ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle<V> {
    pub center: V,
    pub radius: f32,
}

impl<V: Vector> Obstacle<V> {
    pub fn new(center: V, radius: f32) -> Self {
        Obstacle { center, radius }
    }

    /// Random obstacle with radius in `[min_radius, max_radius)`, kept at
    /// least `margin + radius` away from every face.
    pub fn random(
        bounds: &Bounds<V>,
        min_radius: f32,
        max_radius: f32,
        margin: f32,
        rng: &mut SimRng,
    ) -> Self {
        let radius = rng.uniform(min_radius, max_radius);
        let center = bounds.random_point(margin + radius, rng.inner());
        Obstacle { center, radius }
    }

    /// `true` if `p` lies strictly inside the obstacle.
    #[inline]
    pub fn contains(&self, p: V) -> bool {
        self.center.distance_squared(p) < self.radius * self.radius
    }

    /// Signed distance from `p` to the surface (negative inside).
    #[inline]
    pub fn surface_distance(&self, p: V) -> f32 {
        self.center.distance(p) - self.radius
    }

    /// `true` if the two obstacles are closer than `spacing` surface to
    /// surface.
    fn crowds(&self, other: &Obstacle<V>, spacing: f32) -> bool {
        self.center.distance(other.center) < self.radius + other.radius + spacing
    }
}

// ── ObstacleSet ───────────────────────────────────────────────────────────────

/// Obstacles keyed by stable handles.
///
/// Handles are issued in increasing order and never reused, so removing one
/// obstacle leaves every other handle valid.  Iteration is in insertion order.
#[derive(Clone, Debug)]
pub struct ObstacleSet<V> {
    entries: Vec<(ObstacleId, Obstacle<V>)>,
    next_id: ObstacleId,
}

impl<V> Default for ObstacleSet<V> {
    fn default() -> Self {
        ObstacleSet { entries: Vec::new(), next_id: ObstacleId(0) }
    }
}

impl<V: Vector> ObstacleSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, obstacle: Obstacle<V>) -> ObstacleId {
        let id = self.next_id;
        self.next_id = id.next();
        self.entries.push((id, obstacle));
        id
    }

    /// Remove by handle.  Returns `false` for an unknown handle.
    pub fn remove(&mut self, id: ObstacleId) -> bool {
        match self.entries.iter().position(|(eid, _)| *eid == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove everything; returns how many obstacles were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle<V>> {
        self.entries.iter().find(|(eid, _)| *eid == id).map(|(_, o)| o)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle<V>)> + '_ {
        self.entries.iter().map(|(id, o)| (*id, o))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle<V>> + '_ {
        self.entries.iter().map(|(_, o)| o)
    }

    /// Place up to `count` random obstacles that keep at least `min_spacing`
    /// between surfaces (including obstacles already in the set).
    ///
    /// Each obstacle gets a bounded number of placement attempts; obstacles
    /// that cannot be placed are skipped, so the result may be shorter than
    /// `count`.
    pub fn scatter(
        &mut self,
        count: usize,
        bounds: &Bounds<V>,
        radius_range: (f32, f32),
        margin: f32,
        min_spacing: f32,
        rng: &mut SimRng,
    ) -> Vec<ObstacleId> {
        let mut placed = Vec::with_capacity(count);
        for _ in 0..count {
            let candidate = (0..SCATTER_ATTEMPTS)
                .map(|_| Obstacle::random(bounds, radius_range.0, radius_range.1, margin, rng))
                .find(|c| !self.obstacles().any(|o| o.crowds(c, min_spacing)));
            if let Some(o) = candidate {
                placed.push(self.add(o));
            }
        }
        placed
    }
}
