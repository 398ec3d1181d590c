//! Bridge between the simulation's vectors and `rstar` points.

use flock_core::{Vec2, Vec3, Vector};

/// A [`Vector`] that can be stored in the R-tree.
pub trait IndexPoint: Vector {
    type Point: rstar::Point<Scalar = f32>;

    fn to_point(self) -> Self::Point;
}

impl IndexPoint for Vec2 {
    type Point = [f32; 2];

    #[inline]
    fn to_point(self) -> [f32; 2] {
        self.into()
    }
}

impl IndexPoint for Vec3 {
    type Point = [f32; 3];

    #[inline]
    fn to_point(self) -> [f32; 3] {
        self.into()
    }
}
