//! Axis-aligned cubic regions and their octant geometry

use std::fmt;

use crate::foundation::math::{half, midpoint, Float, Vec3};
use crate::spatial::classify::{Classify, OctantMask};

/// Axis-aligned region between a lower and an upper corner
///
/// Corners are fixed at construction. A well-formed boundary has `lower <= upper` on every
/// axis; degenerate or inverted boundaries are allowed and simply contain nothing.
///
/// Containment is half-open: a point on a lower face is outside, a point on an upper face
/// is inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary<F: Float> {
    lower: Vec3<F>,
    upper: Vec3<F>,
}

impl<F: Float> Boundary<F> {
    /// Create a boundary from its lower and upper corners
    pub const fn new(lower: Vec3<F>, upper: Vec3<F>) -> Self {
        Self { lower, upper }
    }

    /// Cube of edge length `size` centered at the origin, `[-size/2, size/2]` on every axis
    pub fn cube(size: F) -> Self {
        let h = size * half::<F>();
        Self {
            lower: Vec3::new(-h, -h, -h),
            upper: Vec3::new(h, h, h),
        }
    }

    /// Lower corner
    pub const fn lower(&self) -> &Vec3<F> {
        &self.lower
    }

    /// Upper corner
    pub const fn upper(&self) -> &Vec3<F> {
        &self.upper
    }

    /// Center point, `(lower + upper) / 2`
    pub fn center(&self) -> Vec3<F> {
        midpoint(&self.lower, &self.upper)
    }

    /// Edge lengths along each axis
    pub fn size(&self) -> Vec3<F> {
        self.upper - self.lower
    }

    /// Half-open geometric containment test for a point
    pub fn contains_point(&self, point: &Vec3<F>) -> bool {
        OctantMask::compare(point, self.lower.x, self.lower.y, self.lower.z) == OctantMask::ABOVE
            && OctantMask::compare(point, self.upper.x, self.upper.y, self.upper.z)
                == OctantMask::NOT_ABOVE
    }

    /// Half-open containment test expressed through a classifier
    ///
    /// The object is inside iff it is strictly above the lower corner on all three axes
    /// and above the upper corner on none.
    pub fn contains<T, C>(&self, object: &T, classify: &C) -> bool
    where
        C: Classify<T, F> + ?Sized,
    {
        classify.classify_at(object, &self.lower) == OctantMask::ABOVE
            && classify.classify_at(object, &self.upper) == OctantMask::NOT_ABOVE
    }

    /// Sub-boundary for one octant when split at `center`
    ///
    /// A set bit selects `center..upper` on that axis, a cleared bit `lower..center`.
    pub fn octant_at(&self, octant: OctantMask, center: &Vec3<F>) -> Self {
        let pick = |axis: OctantMask, l: F, c: F, u: F| {
            if octant.contains(axis) { (c, u) } else { (l, c) }
        };

        let (lx, ux) = pick(OctantMask::X, self.lower.x, center.x, self.upper.x);
        let (ly, uy) = pick(OctantMask::Y, self.lower.y, center.y, self.upper.y);
        let (lz, uz) = pick(OctantMask::Z, self.lower.z, center.z, self.upper.z);

        Self::new(Vec3::new(lx, ly, lz), Vec3::new(ux, uy, uz))
    }

    /// Sub-boundary for one octant when split at this boundary's own center
    pub fn octant(&self, octant: OctantMask) -> Self {
        self.octant_at(octant, &self.center())
    }

    /// All eight sub-boundaries, indexed by octant
    pub fn octants(&self, center: &Vec3<F>) -> [Self; 8] {
        std::array::from_fn(|index| self.octant_at(OctantMask::from_index(index), center))
    }
}

impl<F: Float> fmt::Display for Boundary<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})..({},{},{})",
            self.lower.x, self.lower.y, self.lower.z, self.upper.x, self.upper.y, self.upper.z
        )
    }
}
