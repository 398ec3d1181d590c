//! Predator value type and the automaton state every strategy shares.
//!
//! The transitions themselves live in `flock-hunt`; this module only holds
//! the data so that the controller, the automaton and the output writers can
//! all see the same struct.

use std::f32::consts::TAU;
use std::fmt;

use flock_core::{AgentRng, Bounds, PredatorId, SimRng, Vector};

// ── Strategy ──────────────────────────────────────────────────────────────────

/// How a predator picks its target.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Steers at the flock centroid.  Holds no discrete target.
    Center,
    /// Nearest boid, edge-avoiding.
    Nearest,
    /// Boid farthest from the centroid, edge-avoiding.
    Straggler,
    /// Circles a patrol point and attacks boids that come close.
    Patrol,
    /// Random boid, re-rolled periodically.
    Random,
}

/// Strategy given to the k-th predator of a flock (`k % 5`).
pub const STRATEGY_ORDER: [Strategy; 5] = [
    Strategy::Center,
    Strategy::Nearest,
    Strategy::Straggler,
    Strategy::Patrol,
    Strategy::Random,
];

impl Strategy {
    /// Strategy for the predator in slot `k`.
    #[inline]
    pub fn for_slot(k: usize) -> Strategy {
        STRATEGY_ORDER[k % STRATEGY_ORDER.len()]
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Center    => "Hawk",
            Strategy::Nearest   => "Falcon",
            Strategy::Straggler => "Eagle",
            Strategy::Patrol    => "Kite",
            Strategy::Random    => "Osprey",
        }
    }

    /// Stable lowercase tag for logs and output files.
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Center    => "center",
            Strategy::Nearest   => "nearest",
            Strategy::Straggler => "straggler",
            Strategy::Patrol    => "patrol",
            Strategy::Random    => "random",
        }
    }

    /// `true` for every strategy that locks onto one boid.
    #[inline]
    pub fn has_discrete_target(self) -> bool {
        self != Strategy::Center
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ── Automaton state ───────────────────────────────────────────────────────────

/// Target tracking shared by all strategies.
///
/// `target` is a boid index into the current snapshot and is re-validated
/// every tick before use.
#[derive(Clone, Debug, PartialEq)]
pub struct HuntState {
    pub target:                     Option<usize>,
    pub frames_since_target_switch: u32,
    pub cooldown_frames:            u32,
    pub last_target_distance:       f32,
    pub frames_without_progress:    u32,
}

impl Default for HuntState {
    fn default() -> Self {
        HuntState {
            target:                     None,
            frames_since_target_switch: 0,
            cooldown_frames:            0,
            last_target_distance:       f32::INFINITY,
            frames_without_progress:    0,
        }
    }
}

impl HuntState {
    /// Drop the target and clear all tracking counters.  Cooldown is kept.
    pub fn reset_target(&mut self) {
        self.target = None;
        self.frames_since_target_switch = 0;
        self.last_target_distance = f32::INFINITY;
        self.frames_without_progress = 0;
    }

    /// Lock onto boid `i` with fresh counters.
    pub fn acquire(&mut self, i: usize) {
        self.reset_target();
        self.target = Some(i);
    }

    /// Enter cooldown for `duration` frames and drop the target.
    pub fn start_cooldown(&mut self, duration: u32) {
        self.cooldown_frames = duration;
        self.reset_target();
    }

    #[inline]
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown_frames > 0
    }
}

/// Patrol orbit of a [`Strategy::Patrol`] predator.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolState<V> {
    pub center: V,
    /// Azimuth, radians.
    pub theta:  f32,
    /// Polar angle, radians (3D only).
    pub phi:    f32,
}

impl<V: Vector> PatrolState<V> {
    pub fn new(center: V) -> Self {
        PatrolState { center, theta: 0.0, phi: std::f32::consts::FRAC_PI_2 }
    }
}

/// Observable automaton state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HuntPhase {
    /// No target.  Center hunters are always idle.
    Idle,
    Pursuing(usize),
    Cooldown,
    /// Idle sub-mode of patrol hunters.
    Patrol,
}

impl HuntPhase {
    pub fn tag(self) -> &'static str {
        match self {
            HuntPhase::Idle => "idle",
            HuntPhase::Pursuing(_) => "pursuing",
            HuntPhase::Cooldown => "cooldown",
            HuntPhase::Patrol => "patrol",
        }
    }
}

// ── Predator ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Predator<V> {
    pub id:       PredatorId,
    pub position: V,
    pub velocity: V,
    pub strategy: Strategy,
    pub hunt:     HuntState,
    /// `Some` exactly for patrol hunters.
    pub patrol:   Option<PatrolState<V>>,
    pub rng:      AgentRng,
}

impl<V: Vector> Predator<V> {
    pub fn new(id: PredatorId, position: V, velocity: V, strategy: Strategy, rng: AgentRng) -> Self {
        let patrol = (strategy == Strategy::Patrol).then(|| PatrolState::new(position));
        Predator {
            id,
            position,
            velocity,
            strategy,
            hunt: HuntState::default(),
            patrol,
            rng,
        }
    }

    /// Predator at a uniform position in `bounds` with a random heading at
    /// `speed`.  A patrol hunter also starts at a random point of its orbit.
    pub fn random(id: PredatorId, bounds: &Bounds<V>, speed: f32, strategy: Strategy, rng: &mut SimRng) -> Self {
        let position = bounds.random_point(0.0, rng.inner());
        let velocity = rng.unit::<V>() * speed;
        let theta = rng.uniform(0.0, TAU);
        let own = rng.agent(id.0 as u64);
        let mut predator = Self::new(id, position, velocity, strategy, own);
        if let Some(patrol) = predator.patrol.as_mut() {
            patrol.theta = theta;
        }
        predator
    }

    pub fn phase(&self) -> HuntPhase {
        if self.hunt.is_cooling_down() {
            HuntPhase::Cooldown
        } else if let Some(i) = self.hunt.target {
            HuntPhase::Pursuing(i)
        } else if self.strategy == Strategy::Patrol {
            HuntPhase::Patrol
        } else {
            HuntPhase::Idle
        }
    }

    /// Drop any target (used when the boid population is renumbered).
    pub fn forget_target(&mut self) {
        self.hunt.reset_target();
    }
}
