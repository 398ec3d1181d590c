//! Per-tick neighbor index.
//!
//! # Lifecycle
//!
//! The flock rebuilds the index from the current boid positions at the start
//! of every tick and drops it at the end.  Positions are copied into the
//! index, so a query can never observe a boid's in-progress post-tick state.
//!
//! Construction is a single `RTree::bulk_load`, O(n log n).  Radius queries
//! are `locate_within_distance`, O(log n + k).

use rstar::{Point, PointDistance, RTree, RTreeObject, AABB};

use crate::point::IndexPoint;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a point plus the boid's index in the snapshot.
#[derive(Clone, Debug)]
struct BoidEntry<P> {
    point: P,
    index: u32,
}

impl<P: Point<Scalar = f32>> RTreeObject for BoidEntry<P> {
    type Envelope = AABB<P>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point.clone())
    }
}

impl<P: Point<Scalar = f32>> PointDistance for BoidEntry<P> {
    fn distance_2(&self, point: &P) -> f32 {
        (0..P::DIMENSIONS)
            .map(|k| {
                let d = self.point.nth(k) - point.nth(k);
                d * d
            })
            .sum()
    }
}

// ── NeighborIndex ─────────────────────────────────────────────────────────────

/// Radius-query index over one position snapshot.
pub struct NeighborIndex<V: IndexPoint> {
    tree:      RTree<BoidEntry<V::Point>>,
    positions: Vec<V>,
}

impl<V: IndexPoint> NeighborIndex<V> {
    /// Bulk-load an index over `positions`.  Index `i` in query results refers
    /// to `positions[i]`.
    pub fn build(positions: &[V]) -> Self {
        let entries: Vec<BoidEntry<V::Point>> = positions
            .iter()
            .enumerate()
            .map(|(i, p)| BoidEntry { point: p.to_point(), index: i as u32 })
            .collect();
        NeighborIndex {
            tree:      RTree::bulk_load(entries),
            positions: positions.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self::build(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The snapshot this index was built from.
    #[inline]
    pub fn positions(&self) -> &[V] {
        &self.positions
    }

    /// Indices of all boids within `radius` of boid `i` (inclusive), excluding
    /// `i` itself, in ascending order.
    ///
    /// Returns nothing for `radius <= 0` or an out-of-range `i`.
    pub fn query(&self, i: usize, radius: f32) -> Vec<usize> {
        let mut out = Vec::new();
        self.query_into(i, radius, &mut out);
        out
    }

    /// Like [`query`](Self::query) but reuses `out` (cleared first).
    pub fn query_into(&self, i: usize, radius: f32, out: &mut Vec<usize>) {
        out.clear();
        let Some(&center) = self.positions.get(i) else {
            return;
        };
        if radius <= 0.0 {
            return;
        }
        out.extend(
            self.tree
                .locate_within_distance(center.to_point(), radius * radius)
                .map(|e| e.index as usize)
                .filter(|&j| j != i),
        );
        out.sort_unstable();
    }

    /// Indices of all boids within `radius` of an arbitrary point, ascending.
    pub fn query_point(&self, center: V, radius: f32) -> Vec<usize> {
        if radius <= 0.0 {
            return Vec::new();
        }
        let mut out: Vec<usize> = self
            .tree
            .locate_within_distance(center.to_point(), radius * radius)
            .map(|e| e.index as usize)
            .collect();
        out.sort_unstable();
        out
    }

    /// Index of the boid nearest to `p`; `None` if the index is empty.
    pub fn nearest(&self, p: V) -> Option<usize> {
        self.tree
            .nearest_neighbor(&p.to_point())
            .map(|e| e.index as usize)
    }
}
