//! Stable handles for entities the controller adds and removes at runtime.
//!
//! Boids have no identity beyond their index in the SoA arrays.  Predators
//! and obstacles are addressed through handles that are never reused within
//! one flock, so removing one entity never invalidates another's handle.

use std::fmt;

/// Generate a typed handle wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid handle".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The handle issued after this one.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0.wrapping_add(1))
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Handle of an obstacle in an `ObstacleSet`.
    pub struct ObstacleId(u32);
}

typed_id! {
    /// Handle of a predator in a flock.
    pub struct PredatorId(u32);
}
