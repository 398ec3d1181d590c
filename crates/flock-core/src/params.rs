//! Simulation parameters.
//!
//! `SimulationParameters` is a plain value: the controller copies it into the
//! flock at construction and replaces it wholesale on `set_params`.  Defaults
//! are the tuned values the simulation ships with.
//!
//! Range checks live in [`SimulationParameters::validate`]; the flock builder
//! calls it once, live parameter updates do not.

use crate::bounds::Bounds;
use crate::error::{FlockError, FlockResult};
use crate::vector::Vector;

/// Maximum number of predators a flock will hold.
pub const PREDATOR_CAP: usize = 5;

// ── SimulationParameters ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationParameters {
    pub width:  f32,
    pub height: f32,
    /// Ignored by 2D flocks.
    pub depth:  f32,

    pub visual_range:    f32,
    pub protected_range: f32,

    pub min_speed: f32,
    pub max_speed: f32,

    pub cohesion_factor:     f32,
    pub alignment_factor:    f32,
    pub separation_strength: f32,

    /// Distance from a face at which boundary steering starts.
    pub margin:      f32,
    pub turn_factor: f32,

    pub predator: PredatorParams,
    pub obstacle: ObstacleParams,
    pub hunt:     HuntParams,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            width:               800.0,
            height:              600.0,
            depth:               600.0,
            visual_range:        50.0,
            protected_range:     12.0,
            min_speed:           2.0,
            max_speed:           3.0,
            cohesion_factor:     0.002,
            alignment_factor:    0.06,
            separation_strength: 0.15,
            margin:              75.0,
            turn_factor:         0.2,
            predator:            PredatorParams::default(),
            obstacle:            ObstacleParams::default(),
            hunt:                HuntParams::default(),
        }
    }
}

impl SimulationParameters {
    /// World bounds for a `V`-dimensional flock.
    pub fn bounds<V: Vector>(&self) -> Bounds<V> {
        let extents = [self.width, self.height, self.depth];
        Bounds::new(V::from_fn(|i| extents[i]))
    }

    /// Predator speed interval `[min, max]`.
    #[inline]
    pub fn predator_speed_limits(&self) -> (f32, f32) {
        let max = self.predator.speed;
        (max * self.predator.min_speed_ratio, max)
    }

    /// Check the range invariants the simulation relies on.
    pub fn validate(&self) -> FlockResult<()> {
        fn check(ok: bool, msg: &str) -> FlockResult<()> {
            if ok { Ok(()) } else { Err(FlockError::Config(msg.to_string())) }
        }

        check(
            self.width > 0.0 && self.height > 0.0 && self.depth > 0.0,
            "bounds must be positive",
        )?;
        check(self.protected_range >= 0.0, "protected_range must be non-negative")?;
        check(
            self.protected_range < self.visual_range,
            "protected_range must be smaller than visual_range",
        )?;
        check(self.min_speed >= 0.0, "min_speed must be non-negative")?;
        check(self.min_speed <= self.max_speed, "min_speed must not exceed max_speed")?;
        check(self.margin >= 0.0 && self.turn_factor >= 0.0, "margin and turn_factor must be non-negative")?;
        check(self.predator.detection_range > 0.0, "predator.detection_range must be positive")?;
        check(self.predator.speed >= 0.0, "predator.speed must be non-negative")?;
        check(
            (0.0..=1.0).contains(&self.predator.min_speed_ratio),
            "predator.min_speed_ratio must lie in [0, 1]",
        )?;
        check(self.predator.max_force >= 0.0, "predator.max_force must be non-negative")?;
        check(self.obstacle.detection_range > 0.0, "obstacle.detection_range must be positive")?;
        check(self.hunt.catch_distance >= 0.0, "hunt.catch_distance must be non-negative")?;
        check(self.hunt.attack_range >= 0.0, "hunt.attack_range must be non-negative")?;
        check(self.hunt.patrol_radius >= 0.0, "hunt.patrol_radius must be non-negative")?;
        Ok(())
    }
}

// ── Nested groups ─────────────────────────────────────────────────────────────

/// Predator physics and how strongly boids react to predators.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PredatorParams {
    /// Boids react to predators closer than this.
    pub detection_range:    f32,
    pub avoidance_strength: f32,
    /// Maximum predator speed.
    pub speed:              f32,
    /// Minimum predator speed as a fraction of `speed`.
    pub min_speed_ratio:    f32,
    pub hunting_strength:   f32,
    /// Cap on the magnitude of the per-tick hunting delta.
    pub max_force:          f32,
}

impl Default for PredatorParams {
    fn default() -> Self {
        PredatorParams {
            detection_range:    100.0,
            avoidance_strength: 0.5,
            speed:              2.5,
            min_speed_ratio:    0.5,
            hunting_strength:   0.05,
            max_force:          1.0,
        }
    }
}

/// Obstacle avoidance, shared by boids and predators.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleParams {
    /// Reach beyond the obstacle surface.
    pub detection_range:    f32,
    pub avoidance_strength: f32,
}

impl Default for ObstacleParams {
    fn default() -> Self {
        ObstacleParams { detection_range: 50.0, avoidance_strength: 0.5 }
    }
}

/// Hunting automaton constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HuntParams {
    pub catch_distance:       f32,
    /// Frames a predator rests after a catch.
    pub cooldown_duration:    u32,
    /// Frames without progress before a chase is abandoned.
    pub chase_failure_frames: u32,
    /// A tick counts as progress when the distance shrinks by more than this.
    pub progress_tolerance:   f32,
    /// Chase failure is not checked for this many frames after acquisition.
    pub grace_frames:         u32,
    pub max_target_frames:    u32,
    /// Targets closer than this to a face are avoided when possible.
    pub edge_margin:          f32,

    pub patrol_radius:        f32,
    /// Radians per frame.
    pub patrol_speed:         f32,
    pub attack_range:         f32,
    pub attack_multiplier:    f32,
    /// Extra inset (beyond `margin`) that keeps the patrol centre inland.
    pub patrol_center_inset:  f32,

    /// Frames before a random hunter re-rolls its target.
    pub switch_interval:      u32,
}

impl Default for HuntParams {
    fn default() -> Self {
        HuntParams {
            catch_distance:       15.0,
            cooldown_duration:    60,
            chase_failure_frames: 90,
            progress_tolerance:   0.5,
            grace_frames:         30,
            max_target_frames:    180,
            edge_margin:          100.0,
            patrol_radius:        150.0,
            patrol_speed:         0.03,
            attack_range:         100.0,
            attack_multiplier:    1.5,
            patrol_center_inset:  50.0,
            switch_interval:      120,
        }
    }
}
