//! `flock-agent` — agent value types and storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`boid`]        | `Boid` value type and its factories                       |
//! | [`store`]       | `BoidStore` (SoA arrays), `BoidRngs` (per-boid RNG)       |
//! | [`kinematics`]  | `clamp_speed`, `integrate`                                |
//! | [`obstacle`]    | `Obstacle`, `ObstacleSet` (handle-keyed)                  |
//! | [`predator`]    | `Predator`, `Strategy`, `HuntState`, `HuntPhase`          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the value types.      |

pub mod boid;
pub mod kinematics;
pub mod obstacle;
pub mod predator;
pub mod store;

#[cfg(test)]
mod tests;

pub use boid::Boid;
pub use kinematics::{clamp_speed, integrate};
pub use obstacle::{Obstacle, ObstacleSet};
pub use predator::{HuntPhase, HuntState, PatrolState, Predator, Strategy, STRATEGY_ORDER};
pub use store::{BoidRngs, BoidStore};
