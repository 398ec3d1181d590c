//! Flock observer trait for progress reporting and data collection.

use flock_agent::{BoidStore, Predator, Strategy};
use flock_core::{PredatorId, Tick, Vector};
use flock_hunt::HuntEvent;

use crate::metrics::Metrics;

/// Callbacks invoked by [`Flock::tick_with`][crate::Flock::tick_with] at key
/// points in the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: catch counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Catches(usize);
///
/// impl<V: Vector> FlockObserver<V> for Catches {
///     fn on_hunt_event(&mut self, _: Tick, _: PredatorId, _: Strategy, event: &HuntEvent) {
///         if matches!(event, HuntEvent::Caught { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait FlockObserver<V: Vector> {
    /// Called at the start of every simulated frame, before any phase runs.
    fn on_tick_start(&mut self, _frame: Tick) {}

    /// Called once per automaton transition, in predator order, after the
    /// predator phase.
    fn on_hunt_event(
        &mut self,
        _frame:    Tick,
        _predator: PredatorId,
        _strategy: Strategy,
        _event:    &HuntEvent,
    ) {}

    /// Called at the end of every simulated frame with that frame's metrics.
    fn on_tick_end(&mut self, _frame: Tick, _metrics: &Metrics) {}

    /// Called every `snapshot_interval` frames (never when the interval is
    /// zero) with read-only access to the full agent state.
    fn on_snapshot(
        &mut self,
        _frame:     Tick,
        _boids:     &BoidStore<V>,
        _predators: &[Predator<V>],
    ) {}

    /// Called once by [`Flock::run`][crate::Flock::run] after its last frame.
    fn on_sim_end(&mut self, _final_frame: Tick) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl<V: Vector> FlockObserver<V> for NoopObserver {}
