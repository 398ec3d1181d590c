//! Per-frame flock metrics and run-level aggregation.
//!
//! | Metric                     | Definition                                           |
//! |----------------------------|------------------------------------------------------|
//! | `avg_distance_to_predator` | Mean over boids of the distance to the nearest predator |
//! | `min_distance_to_predator` | Smallest boid-to-predator distance                   |
//! | `flock_cohesion`           | Mean over axes of the population std dev of positions |
//!
//! Lower cohesion means a tighter flock.

use flock_core::{Tick, Vector};

use crate::observer::FlockObserver;

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Metrics for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// `None` without boids or without predators.
    pub avg_distance_to_predator: Option<f32>,
    /// `None` without boids or without predators.
    pub min_distance_to_predator: Option<f32>,
    pub flock_cohesion:           f32,
    pub boids:                    usize,
    pub predators:                usize,
}

impl Metrics {
    pub fn compute<V: Vector>(boids: &[V], predators: &[V]) -> Metrics {
        let mut metrics = Metrics {
            avg_distance_to_predator: None,
            min_distance_to_predator: None,
            flock_cohesion:           flock_cohesion(boids),
            boids:                    boids.len(),
            predators:                predators.len(),
        };
        if boids.is_empty() || predators.is_empty() {
            return metrics;
        }

        let mut sum = 0.0;
        let mut min = f32::INFINITY;
        for &b in boids {
            let nearest = predators
                .iter()
                .map(|&p| b.distance_squared(p))
                .fold(f32::INFINITY, f32::min)
                .sqrt();
            sum += nearest;
            min = min.min(nearest);
        }
        metrics.avg_distance_to_predator = Some(sum / boids.len() as f32);
        metrics.min_distance_to_predator = Some(min);
        metrics
    }
}

/// Mean over axes of the population standard deviation of `positions`.
/// Zero for an empty slice.
pub fn flock_cohesion<V: Vector>(positions: &[V]) -> f32 {
    let Some(center) = flock_center(positions) else {
        return 0.0;
    };
    let n = positions.len() as f32;
    let total: f32 = (0..V::DIM)
        .map(|axis| {
            let c = center.axis(axis);
            let var = positions
                .iter()
                .map(|p| {
                    let d = p.axis(axis) - c;
                    d * d
                })
                .sum::<f32>()
                / n;
            var.sqrt()
        })
        .sum();
    total / V::DIM as f32
}

/// Centroid of `positions`, `None` when empty.
pub fn flock_center<V: Vector>(positions: &[V]) -> Option<V> {
    if positions.is_empty() {
        return None;
    }
    Some(positions.iter().fold(V::ZERO, |acc, &p| acc + p) / positions.len() as f32)
}

/// Largest pairwise distance between two boids.  Zero for fewer than two.
pub fn flock_spread<V: Vector>(positions: &[V]) -> f32 {
    let mut max_sq = 0.0_f32;
    for (i, &a) in positions.iter().enumerate() {
        for &b in &positions[i + 1..] {
            max_sq = max_sq.max(a.distance_squared(b));
        }
    }
    max_sq.sqrt()
}

// ── Run aggregation ───────────────────────────────────────────────────────────

/// Summary statistics over every recorded frame that had predators.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub mean_avg_distance:    f32,
    pub mean_min_distance:    f32,
    pub mean_cohesion:        f32,
    /// `None` when no frame was recorded.
    pub overall_min_distance: Option<f32>,
    pub std_avg_distance:     f32,
    pub std_min_distance:     f32,
    pub std_cohesion:         f32,
    pub frames:               usize,
}

/// Collects per-frame metrics over a run.
///
/// Frames without predators (or without boids) carry no distance metrics and
/// are skipped.  Also usable directly as a [`FlockObserver`].
#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    avg:      Vec<f32>,
    min:      Vec<f32>,
    cohesion: Vec<f32>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, metrics: &Metrics) {
        let (Some(avg), Some(min)) = (metrics.avg_distance_to_predator, metrics.min_distance_to_predator) else {
            return;
        };
        self.avg.push(avg);
        self.min.push(min);
        self.cohesion.push(metrics.flock_cohesion);
    }

    /// Number of frames recorded so far.
    pub fn len(&self) -> usize {
        self.avg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avg.is_empty()
    }

    pub fn clear(&mut self) {
        self.avg.clear();
        self.min.clear();
        self.cohesion.clear();
    }

    pub fn summarize(&self) -> RunSummary {
        if self.is_empty() {
            return RunSummary::default();
        }
        let (mean_avg_distance, std_avg_distance) = mean_std(&self.avg);
        let (mean_min_distance, std_min_distance) = mean_std(&self.min);
        let (mean_cohesion, std_cohesion) = mean_std(&self.cohesion);
        RunSummary {
            mean_avg_distance,
            mean_min_distance,
            mean_cohesion,
            overall_min_distance: self.min.iter().copied().reduce(f32::min),
            std_avg_distance,
            std_min_distance,
            std_cohesion,
            frames: self.len(),
        }
    }
}

impl<V: Vector> FlockObserver<V> for MetricsCollector {
    fn on_tick_end(&mut self, _frame: Tick, metrics: &Metrics) {
        self.record(metrics);
    }
}

/// Mean and population standard deviation of a non-empty slice.
fn mean_std(xs: &[f32]) -> (f32, f32) {
    let n = xs.len() as f32;
    let mean = xs.iter().sum::<f32>() / n;
    let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f32>() / n;
    (mean, var.sqrt())
}
