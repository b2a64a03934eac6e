//! Octant classification
//!
//! The octree never looks at an object's coordinates itself. Placement and containment
//! are both derived from a caller-supplied classification: given an object and a point
//! `(x, y, z)`, report per axis whether the object lies strictly greater than the point.
//!
//! The returned mask uses a fixed bit layout that the split geometry in
//! [`Boundary::octants`](crate::spatial::Boundary::octants) relies on:
//!
//! | bit | axis |
//! |-----|------|
//! | 0   | x    |
//! | 1   | y    |
//! | 2   | z    |
//!
//! A classifier that uses any other layout, or that is not deterministic, places objects
//! in the wrong octant. The index does not detect this; objects already accepted are never
//! lost, but locality is silently corrupted.

use bitflags::bitflags;

use crate::foundation::math::{Float, Point3, Vec3};

bitflags! {
    /// Three-bit mask describing on which axes an object lies strictly above a point
    ///
    /// Interpreted as an octant index the layout is:
    /// 0: -X, -Y, -Z ... 7: +X, +Y, +Z
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OctantMask: u8 {
        /// Strictly greater on the x axis
        const X = 1 << 0;
        /// Strictly greater on the y axis
        const Y = 1 << 1;
        /// Strictly greater on the z axis
        const Z = 1 << 2;
    }
}

impl OctantMask {
    /// Mask for an object that is strictly above the point on every axis
    pub const ABOVE: Self = Self::all();

    /// Mask for an object that is not above the point on any axis
    pub const NOT_ABOVE: Self = Self::empty();

    /// Compare a position against a point, axis by axis
    ///
    /// NaN components never compare greater, so they produce cleared bits.
    pub fn compare<F: Float>(position: &Vec3<F>, x: F, y: F, z: F) -> Self {
        let mut mask = Self::empty();
        mask.set(Self::X, position.x > x);
        mask.set(Self::Y, position.y > y);
        mask.set(Self::Z, position.z > z);
        mask
    }

    /// Build a mask from an octant index; bits above the third are ignored
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        Self::from_bits_truncate((index & 0b111) as u8)
    }

    /// Octant index in `0..8`
    pub const fn index(self) -> usize {
        self.bits() as usize
    }
}

/// Caller-supplied octant classification
///
/// Implemented for every `Fn(&T, F, F, F) -> OctantMask`, so plain functions work
/// directly. Closures must annotate their parameter types because the signature cannot
/// be inferred through this trait.
pub trait Classify<T, F> {
    /// Classify `object` against the point `(x, y, z)`
    fn classify(&self, object: &T, x: F, y: F, z: F) -> OctantMask;

    /// Classify `object` against a point given as a vector
    fn classify_at(&self, object: &T, point: &Vec3<F>) -> OctantMask
    where
        F: Float,
    {
        self.classify(object, point.x, point.y, point.z)
    }
}

impl<T, F, Func> Classify<T, F> for Func
where
    Func: Fn(&T, F, F, F) -> OctantMask,
{
    fn classify(&self, object: &T, x: F, y: F, z: F) -> OctantMask {
        self(object, x, y, z)
    }
}

/// Objects that expose a single representative point
pub trait Positioned<F: Float> {
    /// Position used to place the object in the index
    fn position(&self) -> Vec3<F>;
}

impl<F: Float> Positioned<F> for Vec3<F> {
    fn position(&self) -> Vec3<F> {
        *self
    }
}

impl<F: Float> Positioned<F> for Point3<F> {
    fn position(&self) -> Vec3<F> {
        self.coords
    }
}

/// Classifier for any [`Positioned`] object, keyed on its raw x/y/z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPosition;

impl<T, F> Classify<T, F> for ByPosition
where
    T: Positioned<F>,
    F: Float,
{
    fn classify(&self, object: &T, x: F, y: F, z: F) -> OctantMask {
        OctantMask::compare(&object.position(), x, y, z)
    }
}

/// Classification function for bare vectors, usable wherever a `fn` item is wanted
pub fn classify_point<F: Float>(point: &Vec3<F>, x: F, y: F, z: F) -> OctantMask {
    OctantMask::compare(point, x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_layout() {
        let p = Vec3::new(1.0_f64, -1.0, -1.0);
        assert_eq!(classify_point(&p, 0.0, 0.0, 0.0), OctantMask::X);

        let p = Vec3::new(-1.0_f64, 1.0, -1.0);
        assert_eq!(classify_point(&p, 0.0, 0.0, 0.0), OctantMask::Y);

        let p = Vec3::new(-1.0_f64, -1.0, 1.0);
        assert_eq!(classify_point(&p, 0.0, 0.0, 0.0), OctantMask::Z);

        let p = Vec3::new(1.0_f64, 1.0, 1.0);
        assert_eq!(classify_point(&p, 0.0, 0.0, 0.0).index(), 7);
    }

    #[test]
    fn test_equal_is_not_greater() {
        let p = Vec3::new(2.0_f32, 2.0, 2.0);
        assert_eq!(classify_point(&p, 2.0, 2.0, 2.0), OctantMask::NOT_ABOVE);
        assert_eq!(classify_point(&p, 1.999, 1.999, 1.999), OctantMask::ABOVE);
    }

    #[test]
    fn test_nan_never_compares_greater() {
        let p = Vec3::new(f64::NAN, 1.0, f64::NAN);
        assert_eq!(classify_point(&p, 0.0, 0.0, 0.0), OctantMask::Y);
    }

    #[test]
    fn test_index_round_trip_all_octants() {
        for index in 0..8 {
            assert_eq!(OctantMask::from_index(index).index(), index);
        }
        assert_eq!(OctantMask::from_index(9).index(), 1);
    }

    #[test]
    fn test_by_position_matches_point_function() {
        let vector = Vec3::new(0.5_f64, -0.25, 3.0);
        let point = Point3::new(0.5_f64, -0.25, 3.0);
        let expected = classify_point(&vector, 0.0, 0.0, 0.0);

        assert_eq!(ByPosition.classify(&vector, 0.0, 0.0, 0.0), expected);
        assert_eq!(ByPosition.classify(&point, 0.0, 0.0, 0.0), expected);
        assert_eq!(ByPosition.classify_at(&point, &Vec3::zeros()), expected);
    }

    #[test]
    fn test_closure_classifier() {
        struct Sample {
            location: [f32; 3],
        }

        let classify = |s: &Sample, x: f32, y: f32, z: f32| {
            OctantMask::compare(&Vec3::from(s.location), x, y, z)
        };
        let sample = Sample { location: [1.0, 1.0, -1.0] };

        assert_eq!(classify.classify(&sample, 0.0, 0.0, 0.0), OctantMask::X | OctantMask::Y);
    }
}
