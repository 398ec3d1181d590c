//! `FlockOutputObserver<W>` — bridges `FlockObserver` to an `OutputWriter`.

use flock_agent::{BoidStore, Predator, Strategy};
use flock_core::{PredatorId, Tick, Vector};
use flock_hunt::HuntEvent;
use flock_sim::{FlockObserver, Metrics};

use crate::row::{AgentKind, AgentSnapshotRow, FrameMetricsRow, HuntEventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FlockObserver`] that writes frame metrics, hunt events and snapshots
/// to any [`OutputWriter`].
///
/// Hunt events are buffered during a frame and written with its metrics.
/// Errors from the writer are stored because observer hooks have no return
/// value.  After the run, check with [`take_error`][Self::take_error].
pub struct FlockOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<HuntEventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FlockOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).  `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("flock output failed, later write errors are dropped: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<V: Vector, W: OutputWriter> FlockObserver<V> for FlockOutputObserver<W> {
    fn on_hunt_event(&mut self, frame: Tick, predator: PredatorId, strategy: Strategy, event: &HuntEvent) {
        self.pending.push(HuntEventRow {
            frame:       frame.0,
            predator_id: predator.0,
            strategy,
            event:       event.tag(),
            target:      event.target().map(|t| t as u64),
            reason:      event.reason().map(|r| r.tag()),
        });
    }

    fn on_tick_end(&mut self, frame: Tick, metrics: &Metrics) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_hunt_events(&rows);
            self.store_err(result);
        }

        let row = FrameMetricsRow {
            frame:        frame.0,
            boids:        metrics.boids as u64,
            predators:    metrics.predators as u64,
            avg_distance: metrics.avg_distance_to_predator,
            min_distance: metrics.min_distance_to_predator,
            cohesion:     metrics.flock_cohesion,
        };
        let result = self.writer.write_frame_metrics(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Tick, boids: &BoidStore<V>, predators: &[Predator<V>]) {
        let boid_rows = boids
            .iter()
            .enumerate()
            .map(|(i, b)| AgentSnapshotRow::new(frame.0, AgentKind::Boid, i as u32, b.position, b.velocity));
        let predator_rows = predators.iter().map(|p| AgentSnapshotRow {
            strategy: Some(p.strategy),
            phase:    Some(p.phase().tag()),
            ..AgentSnapshotRow::new(frame.0, AgentKind::Predator, p.id.0, p.position, p.velocity)
        });
        let rows: Vec<AgentSnapshotRow> = boid_rows.chain(predator_rows).collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
