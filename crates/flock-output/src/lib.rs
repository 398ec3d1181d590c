//! `flock-output` — flock output writers.
//!
//! | Backend | Files created                                                  |
//! |---------|----------------------------------------------------------------|
//! | CSV     | `frame_metrics.csv`, `hunt_events.csv`, `agent_snapshots.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FlockOutputObserver`], which implements `flock_sim::FlockObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, FlockOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FlockOutputObserver::new(writer);
//! flock.run(1_000, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FlockOutputObserver;
pub use row::{AgentKind, AgentSnapshotRow, FrameMetricsRow, HuntEventRow};
pub use writer::OutputWriter;
