//! Octree errors

use crate::config::ConfigError;

/// Errors reported by octree construction and insertion
#[derive(thiserror::Error, Debug)]
pub enum OctreeError {
    /// Object lies outside the tree's root boundary and was not stored
    #[error("Object lies outside octree boundary {boundary}")]
    OutOfBounds {
        /// Boundary of the tree's root node
        boundary: String,
    },

    /// Leaf at maximum depth is full and the overflow policy refuses more objects
    #[error("Leaf at maximum depth {depth} already holds {capacity} objects")]
    NodeSaturated {
        /// Depth of the saturated leaf
        depth: u32,
        /// Configured per-node capacity
        capacity: usize,
    },

    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
