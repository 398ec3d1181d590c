//! `flock-core` — foundational types for the flocking simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vector`]      | `Vec2`, `Vec3`, the dimension-generic `Vector` trait  |
//! | [`bounds`]      | `Bounds` — the axis-aligned world box                 |
//! | [`ids`]         | `ObstacleId`, `PredatorId`                            |
//! | [`params`]      | `SimulationParameters` and its nested groups          |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (per-flock)          |
//! | [`error`]       | `FlockError`, `FlockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod bounds;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::Bounds;
pub use error::{FlockError, FlockResult};
pub use ids::{ObstacleId, PredatorId};
pub use params::{HuntParams, ObstacleParams, PredatorParams, SimulationParameters, PREDATOR_CAP};
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
pub use vector::{Vec2, Vec3, Vector};
