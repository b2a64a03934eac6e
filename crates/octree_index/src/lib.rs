//! # Octree Index
//!
//! A generic octree spatial index over a fixed cubic volume.
//!
//! ## Features
//!
//! - **Caller-defined placement**: objects are classified by a user-supplied function, so
//!   any type can be indexed without implementing a position accessor
//! - **Generic precision**: coordinates are `f32`, `f64` or any `nalgebra::RealField`
//! - **Capacity-driven splitting**: leaves split into eight octants once they overflow
//! - **Bounded depth**: coincident objects stop at a configurable maximum depth
//! - **Explicit rejection**: out-of-bounds inserts return an error instead of vanishing
//!
//! ## Quick Start
//!
//! ```rust
//! use octree_index::prelude::*;
//!
//! let mut octree = Octree::new(10.0_f64, ByPosition);
//!
//! octree.insert(Vec3::new(4.0, 4.0, 4.0))?;
//! assert!(octree.insert(Vec3::new(100.0, 100.0, 100.0)).is_err());
//! assert_eq!(octree.size(), 1);
//! # Ok::<(), OctreeError>(())
//! ```
//!
//! Objects without a position accessor can be indexed with a plain classification function.
//! Bit 0 must describe x, bit 1 y and bit 2 z:
//!
//! ```rust
//! use octree_index::prelude::*;
//!
//! struct Vertex {
//!     xyz: [f32; 3],
//! }
//!
//! fn classify(v: &Vertex, x: f32, y: f32, z: f32) -> OctantMask {
//!     OctantMask::compare(&Vec3::from(v.xyz), x, y, z)
//! }
//!
//! let mut octree = Octree::new(2.0, classify);
//! octree.insert(Vertex { xyz: [0.5, -0.5, 0.25] })?;
//! assert_eq!(octree.size(), 1);
//! # Ok::<(), OctreeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod spatial;

/// Common imports for index users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Float, Point3, Vec3},
        spatial::{
            classify_point, Boundary, ByPosition, Classify, Node, OctantMask, Octree,
            OctreeConfig, OctreeError, OverflowPolicy, Placement, Positioned,
        },
    };
}
