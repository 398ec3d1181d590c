//! Plain data row types written by output backends.

use flock_agent::Strategy;
use flock_core::Vector;

/// Metrics of one simulated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetricsRow {
    pub frame:        u64,
    pub boids:        u64,
    pub predators:    u64,
    /// `None` when the frame had no predators or no boids.
    pub avg_distance: Option<f32>,
    pub min_distance: Option<f32>,
    pub cohesion:     f32,
}

/// One hunt transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuntEventRow {
    pub frame:       u64,
    pub predator_id: u32,
    pub strategy:    Strategy,
    /// `HuntEvent::tag`.
    pub event:       &'static str,
    /// Boid index in that frame's snapshot; `None` for cooldown endings.
    pub target:      Option<u64>,
    /// `AbandonReason::tag` for abandonments.
    pub reason:      Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Boid,
    Predator,
}

impl AgentKind {
    pub fn tag(self) -> &'static str {
        match self {
            AgentKind::Boid => "boid",
            AgentKind::Predator => "predator",
        }
    }
}

/// Position and velocity of one agent at a snapshot frame.
///
/// `id` is the boid index or the predator handle.  The `z` components are
/// `None` for 2D flocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub frame: u64,
    pub kind:  AgentKind,
    pub id:    u32,
    pub x:     f32,
    pub y:     f32,
    pub z:     Option<f32>,
    pub vx:    f32,
    pub vy:    f32,
    pub vz:    Option<f32>,
    /// Predators only.
    pub strategy: Option<Strategy>,
    /// `HuntPhase::tag`, predators only.
    pub phase:    Option<&'static str>,
}

impl AgentSnapshotRow {
    pub fn new<V: Vector>(frame: u64, kind: AgentKind, id: u32, position: V, velocity: V) -> Self {
        let z = |v: V| (V::DIM > 2).then(|| v.axis(2));
        AgentSnapshotRow {
            frame,
            kind,
            id,
            x:        position.axis(0),
            y:        position.axis(1),
            z:        z(position),
            vx:       velocity.axis(0),
            vy:       velocity.axis(1),
            vz:       z(velocity),
            strategy: None,
            phase:    None,
        }
    }
}
