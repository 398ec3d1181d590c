//! `flock-hunt` — the predator hunting automaton.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`prey`]      | `Prey` snapshot and the per-strategy target selectors        |
//! | [`automaton`] | `hunt` — one automaton step, `steer_toward`                  |
//! | [`step`]      | `step_predator` — automaton plus boundary/obstacle/integrate |
//! | [`event`]     | `HuntEvent`, `AbandonReason`                                 |
//!
//! # State machine
//!
//! ```text
//!            acquire                catch
//!   Idle ───────────────▶ Pursuing ───────▶ Cooldown
//!    ▲  ◀──────────────────┘                   │
//!    │   chase failure / timeout / re-roll     │ cooldown_frames == 0
//!    └─────────────────────────────────────────┘
//! ```
//!
//! Patrol hunters idle in a `Patrol` sub-mode and only acquire boids inside
//! `attack_range`.  Center hunters never hold a discrete target and steer at
//! the flock centroid every tick.
//!
//! All transitions are reported as [`HuntEvent`]s and logged at `debug`.

pub mod automaton;
pub mod event;
pub mod prey;
pub mod step;


pub use automaton::{hunt, steer_toward, HuntOutcome};
pub use event::{AbandonReason, HuntEvent};
pub use prey::Prey;
pub use step::step_predator;
