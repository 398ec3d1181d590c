//! headless: drive a flock without a renderer and report how the predators
//! did.
//!
//! Runs a 2D (default) or 3D flock for a fixed number of frames, logs
//! progress and a run summary, and optionally writes frame metrics, hunt
//! events and agent snapshots as CSV.
//!
//! ```text
//! headless --boids 300 --predators 5 --frames 1800 --obstacles 4 --out-dir ./out
//! headless --3d --boids 500 --debug
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use flock_agent::{BoidStore, ObstacleSet, Predator, Strategy};
use flock_core::{PredatorId, SimRng, SimulationParameters, Tick, Vec2, Vec3, PREDATOR_CAP};
use flock_hunt::HuntEvent;
use flock_output::{CsvWriter, FlockOutputObserver};
use flock_sim::{FlockBuilder, FlockObserver, Metrics, MetricsCollector};
use flock_spatial::IndexPoint;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Mixed into the seed for obstacle placement so it does not replay the
/// flock's own draws.
const OBSTACLE_SEED_SALT:  u64        = 0x0b57_ac1e;
const OBSTACLE_RADII:      (f32, f32) = (20.0, 45.0);
const OBSTACLE_SPACING:    f32        = 30.0;
const PROGRESS_INTERVAL:   u64        = 300;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless flocking simulation with predators", long_about = None)]
struct Args {
    /// Number of boids
    #[arg(short, long, default_value_t = 200)]
    boids: usize,

    /// Number of predators (at most 5, one per hunting strategy)
    #[arg(short, long, default_value_t = 5)]
    predators: usize,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 1_800)]
    frames: u64,

    /// Seed for every random draw of the run
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Simulate in three dimensions
    #[arg(long = "3d")]
    three_d: bool,

    /// Number of randomly placed obstacles
    #[arg(short, long, default_value_t = 0)]
    obstacles: usize,

    /// Directory for CSV output (created if missing); no files without it
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Write agent snapshots every N frames (0 = never)
    #[arg(long, default_value_t = 60)]
    snapshot_interval: u64,

    /// Enable debug logging (hunt transitions)
    #[arg(short, long)]
    debug: bool,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Fans callbacks out to the CSV writer and the metrics collector and keeps
/// a per-predator catch tally.
struct RunObserver {
    output:  Option<FlockOutputObserver<CsvWriter>>,
    metrics: MetricsCollector,
    catches: BTreeMap<PredatorId, usize>,
}

impl<V: IndexPoint> FlockObserver<V> for RunObserver {
    fn on_hunt_event(&mut self, frame: Tick, predator: PredatorId, strategy: Strategy, event: &HuntEvent) {
        if matches!(event, HuntEvent::Caught { .. }) {
            *self.catches.entry(predator).or_default() += 1;
        }
        if let Some(out) = &mut self.output {
            FlockObserver::<V>::on_hunt_event(out, frame, predator, strategy, event);
        }
    }

    fn on_tick_end(&mut self, frame: Tick, metrics: &Metrics) {
        FlockObserver::<V>::on_tick_end(&mut self.metrics, frame, metrics);
        if let Some(out) = &mut self.output {
            FlockObserver::<V>::on_tick_end(out, frame, metrics);
        }
        if frame.0 > 0 && frame.0.is_multiple_of(PROGRESS_INTERVAL) {
            log::info!(
                "{frame}: cohesion {:.1}, nearest predator {}",
                metrics.flock_cohesion,
                metrics.min_distance_to_predator.map_or("-".to_string(), |d| format!("{d:.1}")),
            );
        }
    }

    fn on_snapshot(&mut self, frame: Tick, boids: &BoidStore<V>, predators: &[Predator<V>]) {
        if let Some(out) = &mut self.output {
            out.on_snapshot(frame, boids, predators);
        }
    }

    fn on_sim_end(&mut self, final_frame: Tick) {
        if let Some(out) = &mut self.output {
            FlockObserver::<V>::on_sim_end(out, final_frame);
        }
    }
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run<V: IndexPoint>(args: &Args) -> Result<()> {
    let params = SimulationParameters::default();
    let bounds = params.bounds::<V>();

    let mut obstacles = ObstacleSet::new();
    let mut scatter_rng = SimRng::new(args.seed ^ OBSTACLE_SEED_SALT);
    let placed = obstacles.scatter(
        args.obstacles,
        &bounds,
        OBSTACLE_RADII,
        params.margin,
        OBSTACLE_SPACING,
        &mut scatter_rng,
    );
    if placed.len() < args.obstacles {
        log::warn!("only {} of {} obstacles fit", placed.len(), args.obstacles);
    }

    let mut flock = FlockBuilder::<V>::new(params)
        .boids(args.boids)
        .predators(args.predators)
        .obstacles(obstacles.obstacles().copied().collect())
        .seed(args.seed)
        .snapshot_interval(args.snapshot_interval)
        .build()
        .context("building flock")?;

    let output = match &args.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            let writer = CsvWriter::new(dir).with_context(|| format!("opening CSV files in {}", dir.display()))?;
            log::info!("writing CSV output to {}", dir.display());
            Some(FlockOutputObserver::new(writer))
        }
        None => None,
    };
    let mut observer = RunObserver {
        output,
        metrics: MetricsCollector::new(),
        catches: BTreeMap::new(),
    };

    let start = Instant::now();
    let simulated = flock.run(args.frames, &mut observer);
    let elapsed = start.elapsed();

    if let Some(err) = observer.output.as_mut().and_then(|o| o.take_error()) {
        return Err(err).context("writing CSV output");
    }

    log::info!(
        "simulated {simulated} frames in {:.2}s ({:.0} frames/s)",
        elapsed.as_secs_f64(),
        simulated as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
    );

    let summary = observer.metrics.summarize();
    if summary.frames > 0 {
        log::info!(
            "distance to predator: mean {:.1} ± {:.1}, mean closest {:.1} ± {:.1}, overall closest {:.1}",
            summary.mean_avg_distance,
            summary.std_avg_distance,
            summary.mean_min_distance,
            summary.std_min_distance,
            summary.overall_min_distance.unwrap_or(f32::NAN),
        );
    }
    log::info!("cohesion: mean {:.1} ± {:.1}", summary.mean_cohesion, summary.std_cohesion);

    for view in flock.predator_views() {
        let caught = observer.catches.get(&view.id).copied().unwrap_or(0);
        log::info!("{} ({}): {caught} catches, now {}", view.id, view.strategy.name(), view.phase.tag());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_default_env().filter_level(level).init();

    if args.predators > PREDATOR_CAP {
        anyhow::bail!("--predators must be at most {PREDATOR_CAP}, got {}", args.predators);
    }

    log::info!(
        "{} flock: {} boids, {} predators, {} frames, seed {}",
        if args.three_d { "3D" } else { "2D" },
        args.boids,
        args.predators,
        args.frames,
        args.seed,
    );

    if args.three_d {
        run::<Vec3>(&args)
    } else {
        run::<Vec2>(&args)
    }
}
