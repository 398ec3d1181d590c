//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `frame_metrics.csv`
//! - `hunt_events.csv`
//! - `agent_snapshots.csv`
//!
//! Missing values (`None`) are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, FrameMetricsRow, HuntEventRow, OutputResult};

/// Writes flock output to three CSV files.
pub struct CsvWriter {
    metrics:   Writer<File>,
    events:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut metrics = Writer::from_path(dir.join("frame_metrics.csv"))?;
        metrics.write_record(["frame", "boids", "predators", "avg_distance", "min_distance", "cohesion"])?;

        let mut events = Writer::from_path(dir.join("hunt_events.csv"))?;
        events.write_record(["frame", "predator_id", "strategy", "event", "target", "reason"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["frame", "kind", "id", "x", "y", "z", "vx", "vy", "vz", "strategy", "phase"])?;

        Ok(Self {
            metrics,
            events,
            snapshots,
            finished: false,
        })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_frame_metrics(&mut self, row: &FrameMetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.frame.to_string(),
            row.boids.to_string(),
            row.predators.to_string(),
            opt(row.avg_distance),
            opt(row.min_distance),
            row.cohesion.to_string(),
        ])?;
        Ok(())
    }

    fn write_hunt_events(&mut self, rows: &[HuntEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.frame.to_string(),
                row.predator_id.to_string(),
                row.strategy.tag().to_string(),
                row.event.to_string(),
                opt(row.target),
                opt(row.reason),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.frame.to_string(),
                row.kind.tag().to_string(),
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                opt(row.z),
                row.vx.to_string(),
                row.vy.to_string(),
                opt(row.vz),
                opt(row.strategy.map(|s| s.tag())),
                opt(row.phase),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.events.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
