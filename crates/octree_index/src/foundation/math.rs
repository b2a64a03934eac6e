//! Math utilities and types
//!
//! The index is generic over its coordinate precision. Every vector type here is a
//! thin alias over `nalgebra` so callers can hand in their own `Vector3`/`Point3` values.

pub use nalgebra::{Point3, RealField, Vector3};

/// 3D vector type with caller-chosen precision
pub type Vec3<F> = Vector3<F>;

/// Floating point scalar usable as an octree coordinate (`f32`, `f64`, ...)
pub trait Float: RealField + Copy {}

impl<F: RealField + Copy> Float for F {}

/// One half in the requested precision
#[inline]
pub fn half<F: Float>() -> F {
    nalgebra::convert(0.5)
}

/// Midpoint of two corners, `(a + b) / 2`
#[inline]
pub fn midpoint<F: Float>(a: &Vec3<F>, b: &Vec3<F>) -> Vec3<F> {
    (a + b) * half::<F>()
}
