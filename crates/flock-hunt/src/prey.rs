//! The boid snapshot predators hunt against, and target selection.
//!
//! Every strategy with a discrete target selects through
//! [`Prey::edge_safe`]: boids within `edge_margin` of any face are skipped
//! unless nothing else is left.  A patrol hunter applies the same filter to
//! the boids inside its attack range.  A target pinned against a wall makes
//! the hunting force fight the boundary force and can drag the predator out
//! of bounds.

use flock_agent::Strategy;
use flock_core::{AgentRng, Bounds, HuntParams, Vector};

/// Post-update boid positions plus their centroid, computed once per tick
/// and shared by every predator.
pub struct Prey<'a, V> {
    pub positions: &'a [V],
    /// `None` when there are no boids.
    pub centroid:  Option<V>,
}

impl<'a, V: Vector> Prey<'a, V> {
    pub fn new(positions: &'a [V]) -> Self {
        let centroid = (!positions.is_empty()).then(|| {
            positions.iter().fold(V::ZERO, |acc, &p| acc + p) / positions.len() as f32
        });
        Prey { positions, centroid }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<V> {
        self.positions.get(i).copied()
    }

    /// The subset of `candidates` farther than `edge_margin` from every
    /// face, or all of `candidates` if none qualify.
    pub fn edge_safe(&self, candidates: Vec<usize>, bounds: &Bounds<V>, edge_margin: f32) -> Vec<usize> {
        let safe: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| !bounds.near_edge(self.positions[i], edge_margin))
            .collect();
        if safe.is_empty() { candidates } else { safe }
    }

    /// Boids `strategy` may target from `from` before edge filtering: those
    /// strictly inside `attack_range` for a patrol hunter, every boid
    /// otherwise.
    pub fn candidates(&self, strategy: Strategy, from: V, hunt: &HuntParams) -> Vec<usize> {
        match strategy {
            Strategy::Patrol => self.within(from, hunt.attack_range),
            _ => (0..self.len()).collect(),
        }
    }

    /// `true` if some candidate for `strategy` lies clear of every face.
    pub fn has_edge_safe(&self, strategy: Strategy, from: V, bounds: &Bounds<V>, hunt: &HuntParams) -> bool {
        self.candidates(strategy, from, hunt)
            .into_iter()
            .any(|i| !bounds.near_edge(self.positions[i], hunt.edge_margin))
    }

    /// Candidate closest to `from`.
    pub fn nearest(&self, from: V, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| {
                let da = from.distance_squared(self.positions[a]);
                let db = from.distance_squared(self.positions[b]);
                da.total_cmp(&db)
            })
    }

    /// Candidate farthest from the flock centroid.
    pub fn straggler(&self, candidates: &[usize]) -> Option<usize> {
        let centroid = self.centroid?;
        candidates
            .iter()
            .copied()
            .max_by(|&a, &b| {
                let da = centroid.distance_squared(self.positions[a]);
                let db = centroid.distance_squared(self.positions[b]);
                da.total_cmp(&db)
            })
    }

    /// Boids strictly within `range` of `from`.
    pub fn within(&self, from: V, range: f32) -> Vec<usize> {
        let range_sq = range * range;
        (0..self.len())
            .filter(|&i| from.distance_squared(self.positions[i]) < range_sq)
            .collect()
    }

    /// Pick a fresh target for a predator at `from` following `strategy`.
    ///
    /// Always `None` for [`Strategy::Center`], which has no discrete target.
    pub fn select(
        &self,
        strategy: Strategy,
        from: V,
        bounds: &Bounds<V>,
        hunt: &HuntParams,
        rng: &mut AgentRng,
    ) -> Option<usize> {
        if self.is_empty() || strategy == Strategy::Center {
            return None;
        }
        let candidates = self.edge_safe(self.candidates(strategy, from, hunt), bounds, hunt.edge_margin);
        match strategy {
            Strategy::Center => None,
            Strategy::Nearest | Strategy::Patrol => self.nearest(from, &candidates),
            Strategy::Straggler => self.straggler(&candidates),
            Strategy::Random => rng.choose(&candidates).copied(),
        }
    }
}
