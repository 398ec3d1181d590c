//! Automaton transitions reported to the flock's observers.

use std::fmt;

/// Why a predator let go of its target.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AbandonReason {
    /// No progress for `chase_failure_frames` after the grace window.
    ChaseFailure,
    /// Held for `max_target_frames`.
    Timeout,
    /// Random hunter re-roll.
    SwitchInterval,
    /// Patrol hunter's target left `attack_range`.
    LostRange,
    /// The target drifted within `edge_margin` of a face while a boid clear
    /// of every face was still available.
    EdgeDrift,
    /// The index no longer exists (population shrank).
    Stale,
}

impl AbandonReason {
    pub fn tag(self) -> &'static str {
        match self {
            AbandonReason::ChaseFailure => "chase_failure",
            AbandonReason::Timeout => "timeout",
            AbandonReason::SwitchInterval => "switch_interval",
            AbandonReason::LostRange => "lost_range",
            AbandonReason::EdgeDrift => "edge_drift",
            AbandonReason::Stale => "stale",
        }
    }
}

/// One automaton transition.  Targets are boid indices in the snapshot the
/// transition happened against.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum HuntEvent {
    Acquired { target: usize },
    Caught { target: usize },
    Abandoned { target: usize, reason: AbandonReason },
    CooldownEnded,
}

impl HuntEvent {
    pub fn tag(&self) -> &'static str {
        match self {
            HuntEvent::Acquired { .. } => "acquired",
            HuntEvent::Caught { .. } => "caught",
            HuntEvent::Abandoned { .. } => "abandoned",
            HuntEvent::CooldownEnded => "cooldown_ended",
        }
    }

    pub fn target(&self) -> Option<usize> {
        match *self {
            HuntEvent::Acquired { target }
            | HuntEvent::Caught { target }
            | HuntEvent::Abandoned { target, .. } => Some(target),
            HuntEvent::CooldownEnded => None,
        }
    }

    pub fn reason(&self) -> Option<AbandonReason> {
        match *self {
            HuntEvent::Abandoned { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for HuntEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuntEvent::Acquired { target } => write!(f, "acquired boid {target}"),
            HuntEvent::Caught { target } => write!(f, "caught boid {target}"),
            HuntEvent::Abandoned { target, reason } => {
                write!(f, "abandoned boid {target} ({})", reason.tag())
            }
            HuntEvent::CooldownEnded => f.write_str("cooldown ended"),
        }
    }
}
