//! `flock-rules` — steering rules and the rule set that composes them.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`steering`]     | Pure rule functions over plain values                      |
//! | [`neighborhood`] | `Neighborhood<'a>` — one boid plus its visual-range mates   |
//! | [`context`]      | `FlockContext<'a>` — read-only tick snapshot               |
//! | [`rule`]         | `SteeringRule` trait, one unit struct per rule, `RuleSet`  |
//!
//! # Design notes
//!
//! Rules only read.  The flock evaluates every boid's rule sum against the
//! pre-tick snapshot into a scratch buffer and applies the buffer afterwards,
//! so the result does not depend on the order boids are visited in.  That is
//! also what allows the rule phase to run on Rayon: `SteeringRule` is
//! `Send + Sync` and all per-boid randomness comes through a `&mut AgentRng`.

pub mod context;
pub mod neighborhood;
pub mod rule;
pub mod steering;

#[cfg(test)]
mod tests;

pub use context::FlockContext;
pub use neighborhood::Neighborhood;
pub use rule::{
    Alignment, BoundaryAvoidance, Cohesion, ObstacleAvoidance, PredatorAvoidance, RuleSet, Separation,
    SteeringRule,
};
pub use steering::{
    alignment, boundary_steering, cohesion, obstacle_avoidance, predator_avoidance, separation,
};
