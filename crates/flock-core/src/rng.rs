//! Deterministic per-agent and flock-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each boid gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (boid_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.
//! This means:
//!
//! - Boids never share RNG state, so the rule phase can run on any number of
//!   threads and still produce the same numbers.
//! - Growing the population at the end does not disturb existing seeds.
//!
//! Predators draw their `AgentRng` from the flock's `SimRng` when they are
//! created, so the order of `add_predator` calls is part of the run's seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::vector::Vector;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Boids keep theirs in a parallel `Vec<AgentRng>` alongside the SoA arrays;
/// each predator owns one directly.
#[derive(Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent index.
    pub fn new(global_seed: u64, index: u32) -> Self {
        let seed = global_seed ^ (index as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` APIs.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniformly distributed unit vector.
    #[inline]
    pub fn unit<V: Vector>(&mut self) -> V {
        V::random_unit(&mut self.0)
    }

    /// Choose a random element from a slice; `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Flock-level RNG for placement, predator creation and other sequential
/// draws.
///
/// Used only from the single thread that owns the flock.  Per-predator RNGs
/// are derived from it with [`SimRng::agent`].
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent `AgentRng`; consumes one draw from this RNG.
    pub fn agent(&mut self, offset: u64) -> AgentRng {
        let seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform `f32` in `[lo, hi)`, or `lo` when the interval is empty.
    #[inline]
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if lo < hi { self.0.gen_range(lo..hi) } else { lo }
    }

    #[inline]
    pub fn unit<V: Vector>(&mut self) -> V {
        V::random_unit(&mut self.0)
    }
}
