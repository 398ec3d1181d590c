//! Full per-tick movement of one predator.

use flock_agent::{clamp_speed, integrate, ObstacleSet, Predator};
use flock_core::{Bounds, SimulationParameters, Vector};
use flock_rules::{boundary_steering, obstacle_avoidance};

use crate::automaton::hunt;
use crate::event::HuntEvent;
use crate::prey::Prey;

/// Run the automaton, add boundary and obstacle steering, clamp speed to the
/// predator limits and integrate.  Returns the automaton's transitions.
///
/// Inside the boundary margin the hunting force never pulls outward, so the
/// boundary force alone decides the outward component there.
pub fn step_predator<V: Vector>(
    predator:  &mut Predator<V>,
    prey:      &Prey<'_, V>,
    obstacles: &ObstacleSet<V>,
    params:    &SimulationParameters,
    bounds:    &Bounds<V>,
) -> Vec<HuntEvent> {
    if let Some(patrol) = predator.patrol.as_mut() {
        patrol.center = bounds.clamp_inset(patrol.center, params.margin + params.hunt.patrol_center_inset);
    }

    let outcome = hunt(predator, prey, params, bounds);

    let obs = &params.obstacle;
    let pull = bounds.drop_outward(predator.position, outcome.delta, params.margin);
    let mut velocity = predator.velocity + pull;
    velocity += boundary_steering(predator.position, bounds, params.margin, params.turn_factor);
    velocity += obstacle_avoidance(predator.position, obstacles.obstacles(), obs.detection_range, obs.avoidance_strength);

    let (min_speed, max_speed) = params.predator_speed_limits();
    predator.velocity = clamp_speed(velocity, min_speed, max_speed, &mut predator.rng);
    predator.position = integrate(predator.position, predator.velocity);

    for event in &outcome.events {
        log::debug!("{} ({}) {}", predator.id, predator.strategy.name(), event);
    }
    outcome.events
}
