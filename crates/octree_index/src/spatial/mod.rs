//! Spatial partitioning data structures
//!
//! Provides the octree index: a fixed cubic volume recursively split into octants,
//! with object placement driven entirely by a caller-supplied classification.

mod boundary;
mod classify;
mod error;
mod node;
mod octree;

#[cfg(test)]
mod tests;

pub use boundary::Boundary;
pub use classify::{classify_point, ByPosition, Classify, OctantMask, Positioned};
pub use error::OctreeError;
pub use node::Node;
pub use octree::{Octree, OctreeConfig, OverflowPolicy, Placement, MAX_SUPPORTED_DEPTH};
