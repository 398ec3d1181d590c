//! `flock-sim` — the flock controller.
//!
//! # Five-phase tick
//!
//! ```text
//! if paused or (no boids and no predators): return false
//!   ① Index     — rebuild the neighbor index from pre-tick positions.
//!   ② Rules     — sum every steering rule per boid into a scratch buffer
//!                 (parallel with the `parallel` feature).
//!   ③ Apply     — velocity += delta; clamp speed; position += velocity.
//!   ④ Predators — hunting automaton against the updated boids, boundary
//!                 and obstacle steering, clamp, integrate.
//!   ⑤ Metrics   — distance-to-predator and cohesion.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Runs phases ② and ④ on Rayon's thread pool.                 |
//! | `serde`    | Derives `Serialize`/`Deserialize` on metrics and views.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::{SimulationParameters, Vec2};
//! use flock_sim::{FlockBuilder, MetricsCollector};
//!
//! let mut flock = FlockBuilder::<Vec2>::new(SimulationParameters::default())
//!     .boids(200)
//!     .predators(5)
//!     .seed(42)
//!     .build()?;
//! let mut metrics = MetricsCollector::new();
//! flock.run(600, &mut metrics);
//! println!("{:?}", metrics.summarize());
//! ```

pub mod builder;
pub mod error;
pub mod flock;
pub mod metrics;
pub mod observer;


pub use builder::FlockBuilder;
pub use error::{SimError, SimResult};
pub use flock::{Flock, Flock2D, Flock3D, PredatorView};
pub use metrics::{flock_center, flock_cohesion, flock_spread, Metrics, MetricsCollector, RunSummary};
pub use observer::{FlockObserver, NoopObserver};
