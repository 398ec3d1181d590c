//! Small fixed-size vectors and the dimension-generic [`Vector`] trait.
//!
//! Every simulation component is generic over `V: Vector`, so the same rule,
//! automaton and tick code runs in the plane (`Vec2`) and in space (`Vec3`).
//! Scalars are `f32` throughout.

use std::f32::consts::TAU;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use rand::Rng;

/// Squared lengths below this are treated as zero when normalizing.
pub const DEGENERATE_LENGTH_SQ: f32 = 1e-10;

// ── Vector trait ──────────────────────────────────────────────────────────────

/// Operations the simulation needs from a position/velocity vector.
pub trait Vector:
    Copy
    + Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Number of axes (2 or 3).
    const DIM: usize;

    const ZERO: Self;

    /// Build a vector axis by axis.
    fn from_fn(f: impl FnMut(usize) -> f32) -> Self;

    /// Component along axis `i` (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// # Panics
    /// Panics if `i >= Self::DIM`.
    fn axis(&self, i: usize) -> f32;

    fn axis_mut(&mut self, i: usize) -> &mut f32;

    fn dot(self, other: Self) -> f32;

    /// Uniformly distributed unit vector (on the circle in 2D, on the sphere
    /// in 3D).
    fn random_unit<R: Rng>(rng: &mut R) -> Self;

    /// Point on the unit orbit at azimuth `theta` and polar angle `phi`.
    /// `phi` is ignored in 2D.
    fn orbit(theta: f32, phi: f32) -> Self;

    // ── Provided ─────────────────────────────────────────────────────────────

    /// Unit vector along axis `i`.
    #[inline]
    fn unit(i: usize) -> Self {
        Self::from_fn(|k| if k == i { 1.0 } else { 0.0 })
    }

    #[inline]
    fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `None` when the vector is
    /// (numerically) zero.
    #[inline]
    fn try_normalize(self) -> Option<Self> {
        let len_sq = self.length_squared();
        if len_sq < DEGENERATE_LENGTH_SQ || !len_sq.is_finite() {
            None
        } else {
            Some(self / len_sq.sqrt())
        }
    }

    /// Unit vector in the same direction, or zero.
    #[inline]
    fn normalize_or_zero(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Rescale to at most `max` length, preserving direction.
    #[inline]
    fn clamp_length_max(self, max: f32) -> Self {
        let len = self.length();
        if len > max && len > 0.0 { self * (max / len) } else { self }
    }

    /// Per-axis minimum/maximum clamp.
    #[inline]
    fn clamp(self, lo: Self, hi: Self) -> Self {
        Self::from_fn(|i| self.axis(i).max(lo.axis(i)).min(hi.axis(i)))
    }

    #[inline]
    fn is_finite(self) -> bool {
        (0..Self::DIM).all(|i| self.axis(i).is_finite())
    }
}

// ── Concrete vectors ──────────────────────────────────────────────────────────

/// A vector in the plane.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// A vector in space.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

/// Component-wise arithmetic for a vector struct.
macro_rules! vector_ops {
    ($name:ident { $($f:ident),+ }) => {
        impl Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: f32) -> $name {
                $name { $($f: self.$f * rhs),+ }
            }
        }

        impl Div<f32> for $name {
            type Output = $name;
            #[inline]
            fn div(self, rhs: f32) -> $name {
                $name { $($f: self.$f / rhs),+ }
            }
        }

        impl Neg for $name {
            type Output = $name;
            #[inline]
            fn neg(self) -> $name {
                $name { $($f: -self.$f),+ }
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) {
                $(self.$f -= rhs.$f;)+
            }
        }
    };
}

vector_ops!(Vec2 { x, y });
vector_ops!(Vec3 { x, y, z });

impl Vector for Vec2 {
    const DIM: usize = 2;
    const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
        Vec2::new(f(0), f(1))
    }

    #[inline]
    fn axis(&self, i: usize) -> f32 {
        match i {
            0 => self.x,
            1 => self.y,
            _ => panic!("axis {i} out of range for Vec2"),
        }
    }

    #[inline]
    fn axis_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("axis {i} out of range for Vec2"),
        }
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    fn random_unit<R: Rng>(rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        Vec2::new(angle.cos(), angle.sin())
    }

    #[inline]
    fn orbit(theta: f32, _phi: f32) -> Self {
        Vec2::new(theta.cos(), theta.sin())
    }
}

impl Vector for Vec3 {
    const DIM: usize = 3;
    const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
        Vec3::new(f(0), f(1), f(2))
    }

    #[inline]
    fn axis(&self, i: usize) -> f32 {
        match i {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {i} out of range for Vec3"),
        }
    }

    #[inline]
    fn axis_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("axis {i} out of range for Vec3"),
        }
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Azimuth uniform in `[0, 2π)`, polar angle `acos(U[-1, 1])`.
    fn random_unit<R: Rng>(rng: &mut R) -> Self {
        let theta = rng.gen_range(0.0..TAU);
        let cos_phi: f32 = rng.gen_range(-1.0..=1.0);
        let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
        Vec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
    }

    #[inline]
    fn orbit(theta: f32, phi: f32) -> Self {
        Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Vec2 {
        Vec2::new(a[0], a[1])
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        [v.x, v.y]
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Vec3 {
        Vec3::new(a[0], a[1], a[2])
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}
