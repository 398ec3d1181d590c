//! One step of the hunting automaton.
//!
//! # Order within a tick
//!
//! 1. Cooldown: decrement and stop.  No hunting force while resting.
//! 2. Center hunters steer at the centroid and stop.
//! 3. A target index past the end of the snapshot is dropped as stale.
//! 4. Held target: count the frame, then abandon on timeout, random re-roll,
//!    (patrol) leaving attack range, or drifting next to a wall while a boid
//!    clear of the walls is available.
//! 5. No target: select one and reset the tracking counters.
//! 6. Catch check, then progress bookkeeping (abandon on chase failure once
//!    the grace window has passed).
//! 7. Capped steering toward the target, or toward the next patrol waypoint.
//!    Waypoints are clamped inside the boundary margin.

use std::f32::consts::TAU;

use flock_agent::{HuntState, PatrolState, Predator, Strategy};
use flock_core::{Bounds, HuntParams, SimulationParameters, Vector};

use crate::event::{AbandonReason, HuntEvent};
use crate::prey::Prey;

/// Result of one automaton step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HuntOutcome<V> {
    /// Hunting contribution to the predator's velocity.
    pub delta:  V,
    pub events: Vec<HuntEvent>,
}

/// `(to − from) * strength`, rescaled to exactly `max_force` when longer.
///
/// The cap keeps a distant target from producing a pull that swamps the
/// boundary force.
#[inline]
pub fn steer_toward<V: Vector>(from: V, to: V, strength: f32, max_force: f32) -> V {
    ((to - from) * strength).clamp_length_max(max_force)
}

/// Advance `predator`'s automaton by one tick against `prey`.
///
/// Mutates only `predator.hunt`, `predator.patrol` and `predator.rng`;
/// velocity and position are left to the caller.
pub fn hunt<V: Vector>(
    predator: &mut Predator<V>,
    prey:     &Prey<'_, V>,
    params:   &SimulationParameters,
    bounds:   &Bounds<V>,
) -> HuntOutcome<V> {
    let mut out = HuntOutcome { delta: V::ZERO, events: Vec::new() };
    let hp = &params.hunt;
    let strength = params.predator.hunting_strength;
    let max_force = params.predator.max_force;

    if predator.hunt.is_cooling_down() {
        predator.hunt.cooldown_frames -= 1;
        if predator.hunt.cooldown_frames == 0 {
            out.events.push(HuntEvent::CooldownEnded);
        }
        return out;
    }

    if predator.strategy == Strategy::Center {
        if let Some(c) = prey.centroid {
            out.delta = steer_toward(predator.position, c, strength, max_force);
        }
        return out;
    }

    if let Some(t) = predator.hunt.target {
        if t >= prey.len() {
            predator.hunt.reset_target();
            out.events.push(HuntEvent::Abandoned { target: t, reason: AbandonReason::Stale });
        }
    }

    let (target, target_pos) = match (predator.hunt.target, predator.hunt.target.and_then(|t| prey.get(t))) {
        (Some(t), Some(pos)) => {
            predator.hunt.frames_since_target_switch += 1;
            let dist = predator.position.distance(pos);
            let reason = held_too_long(predator.strategy, &predator.hunt, dist, hp).or_else(|| {
                let drifted = bounds.near_edge(pos, hp.edge_margin)
                    && prey.has_edge_safe(predator.strategy, predator.position, bounds, hp);
                drifted.then_some(AbandonReason::EdgeDrift)
            });
            if let Some(reason) = reason {
                predator.hunt.reset_target();
                out.events.push(HuntEvent::Abandoned { target: t, reason });
                if let Some(patrol) = predator.patrol.as_mut() {
                    out.delta = patrol_pull(patrol, predator.position, params, bounds);
                }
                return out;
            }
            (t, pos)
        }
        _ => {
            let picked = prey.select(predator.strategy, predator.position, bounds, hp, &mut predator.rng);
            match picked.and_then(|t| prey.get(t).map(|pos| (t, pos))) {
                Some((t, pos)) => {
                    predator.hunt.acquire(t);
                    out.events.push(HuntEvent::Acquired { target: t });
                    (t, pos)
                }
                None => {
                    if let Some(patrol) = predator.patrol.as_mut() {
                        out.delta = patrol_pull(patrol, predator.position, params, bounds);
                    }
                    return out;
                }
            }
        }
    };

    let dist = predator.position.distance(target_pos);
    if dist < hp.catch_distance {
        predator.hunt.start_cooldown(hp.cooldown_duration);
        out.events.push(HuntEvent::Caught { target });
        return out;
    }

    if record_progress(&mut predator.hunt, dist, hp) {
        predator.hunt.reset_target();
        out.events.push(HuntEvent::Abandoned { target, reason: AbandonReason::ChaseFailure });
        return out;
    }

    let multiplier = if predator.strategy == Strategy::Patrol { hp.attack_multiplier } else { 1.0 };
    out.delta = steer_toward(predator.position, target_pos, strength * multiplier, max_force);
    out
}

/// Reason to drop a target that is still in range of the snapshot, checked
/// after the frame counter has been advanced.
fn held_too_long(strategy: Strategy, state: &HuntState, dist: f32, hp: &HuntParams) -> Option<AbandonReason> {
    if state.frames_since_target_switch >= hp.max_target_frames {
        Some(AbandonReason::Timeout)
    } else if strategy == Strategy::Random && state.frames_since_target_switch >= hp.switch_interval {
        Some(AbandonReason::SwitchInterval)
    } else if strategy == Strategy::Patrol && dist >= hp.attack_range {
        Some(AbandonReason::LostRange)
    } else {
        None
    }
}

/// Update the no-progress counter with this tick's distance.  Returns `true`
/// when the chase has failed.
fn record_progress(state: &mut HuntState, dist: f32, hp: &HuntParams) -> bool {
    if dist < state.last_target_distance - hp.progress_tolerance {
        state.frames_without_progress = 0;
    } else {
        state.frames_without_progress += 1;
    }
    state.last_target_distance = dist;
    state.frames_since_target_switch > hp.grace_frames
        && state.frames_without_progress >= hp.chase_failure_frames
}

/// Advance the patrol orbit and steer toward the new waypoint.
///
/// The orbit can reach past the boundary margin, so the waypoint is clamped
/// to `[margin, extent − margin]`.
fn patrol_pull<V: Vector>(
    patrol:   &mut PatrolState<V>,
    position: V,
    params:   &SimulationParameters,
    bounds:   &Bounds<V>,
) -> V {
    let hp = &params.hunt;
    patrol.theta = (patrol.theta + hp.patrol_speed) % TAU;
    patrol.phi = (patrol.phi + hp.patrol_speed * 0.5) % TAU;
    let orbit = patrol.center + V::orbit(patrol.theta, patrol.phi) * hp.patrol_radius;
    let waypoint = bounds.clamp_inset(orbit, params.margin);
    steer_toward(position, waypoint, params.predator.hunting_strength, params.predator.max_force)
}
