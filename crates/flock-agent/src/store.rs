//! Boid storage: `BoidStore` (SoA data) and `BoidRngs` (per-boid RNG).
//!
//! # Why two structs?
//!
//! The rule phase needs `&BoidStore` (shared read access to the pre-tick
//! snapshot) and `&mut BoidRngs` (exclusive access to each boid's RNG) at the
//! same time.  Keeping the RNGs outside the store lets both borrows coexist:
//!
//! ```ignore
//! let store: &BoidStore<V> = &flock.boids;
//! let deltas: Vec<V> = flock.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| rules.steer(&Neighborhood::gather(i, ..), &ctx, rng))
//!     .collect();
//! ```

use flock_core::{AgentRng, Bounds, SimRng, Vector};

use crate::boid::Boid;

// ── BoidRngs ──────────────────────────────────────────────────────────────────

/// Per-boid deterministic RNG state, separated from [`BoidStore`].
pub struct BoidRngs {
    pub inner: Vec<AgentRng>,
}

impl BoidRngs {
    /// Allocate and seed `count` per-boid RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32).map(|i| AgentRng::new(global_seed, i)).collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut AgentRng> {
        self.inner.get_mut(i)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── BoidStore ─────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the flock.
///
/// `positions` and `velocities` always have the same length; index `i` in
/// one refers to the same boid in the other.  Indices are only stable within
/// a tick: resizing the population renumbers everything.
#[derive(Clone, Debug, Default)]
pub struct BoidStore<V> {
    pub positions:  Vec<V>,
    pub velocities: Vec<V>,
}

impl<V: Vector> BoidStore<V> {
    pub fn new() -> Self {
        BoidStore { positions: Vec::new(), velocities: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        BoidStore {
            positions:  Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
        }
    }

    /// `count` boids from [`Boid::random`].
    pub fn random(count: usize, bounds: &Bounds<V>, max_speed: f32, rng: &mut SimRng) -> Self {
        let mut store = Self::with_capacity(count);
        for _ in 0..count {
            store.push(Boid::random(bounds, max_speed, rng));
        }
        store
    }

    pub fn from_boids(boids: impl IntoIterator<Item = Boid<V>>) -> Self {
        let mut store = Self::new();
        for b in boids {
            store.push(b);
        }
        store
    }

    pub fn push(&mut self, boid: Boid<V>) {
        self.positions.push(boid.position);
        self.velocities.push(boid.velocity);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Boid<V>> {
        Some(Boid::new(*self.positions.get(i)?, *self.velocities.get(i)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = Boid<V>> + '_ {
        self.positions
            .iter()
            .zip(&self.velocities)
            .map(|(&p, &v)| Boid::new(p, v))
    }
}
