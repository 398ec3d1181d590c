//! The world box `[0, extent]` on every axis.

use rand::Rng;

use crate::vector::Vector;

/// Axis-aligned simulation bounds with the origin at the low corner.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<V> {
    /// Width / height / depth, one per axis.
    pub extent: V,
}

impl<V: Vector> Bounds<V> {
    pub fn new(extent: V) -> Self {
        Bounds { extent }
    }

    #[inline]
    pub fn center(&self) -> V {
        self.extent * 0.5
    }

    /// `true` if `p` lies in `[-tolerance, extent + tolerance]` on every axis.
    pub fn contains(&self, p: V, tolerance: f32) -> bool {
        (0..V::DIM).all(|i| {
            let c = p.axis(i);
            c >= -tolerance && c <= self.extent.axis(i) + tolerance
        })
    }

    /// `true` if `p` is within `margin` of any face of the box.
    pub fn near_edge(&self, p: V, margin: f32) -> bool {
        (0..V::DIM).any(|i| {
            let c = p.axis(i);
            c < margin || c > self.extent.axis(i) - margin
        })
    }

    /// Distance from `p` to the closest face (negative outside the box).
    pub fn distance_to_nearest_face(&self, p: V) -> f32 {
        (0..V::DIM)
            .map(|i| {
                let c = p.axis(i);
                c.min(self.extent.axis(i) - c)
            })
            .fold(f32::INFINITY, f32::min)
    }

    /// Clamp `p` into the box shrunk by `inset` on every face.
    ///
    /// When the shrunk box is empty on an axis the axis collapses to the
    /// centre of the box.
    pub fn clamp_inset(&self, p: V, inset: f32) -> V {
        V::from_fn(|i| {
            let lo = inset;
            let hi = self.extent.axis(i) - inset;
            if lo > hi { self.extent.axis(i) * 0.5 } else { p.axis(i).clamp(lo, hi) }
        })
    }

    /// `delta` with every component that points out through a face `p` is
    /// within `margin` of set to zero.
    pub fn drop_outward(&self, p: V, delta: V, margin: f32) -> V {
        V::from_fn(|i| {
            let (c, d) = (p.axis(i), delta.axis(i));
            if (c < margin && d < 0.0) || (c > self.extent.axis(i) - margin && d > 0.0) { 0.0 } else { d }
        })
    }

    /// Uniform point in the box shrunk by `inset` on every face.
    pub fn random_point<R: Rng>(&self, inset: f32, rng: &mut R) -> V {
        V::from_fn(|i| {
            let lo = inset;
            let hi = self.extent.axis(i) - inset;
            if lo < hi { rng.gen_range(lo..hi) } else { self.extent.axis(i) * 0.5 }
        })
    }
}
