//! Octree spatial partitioning structure
//!
//! Divides a fixed cubic volume into hierarchical regions. A leaf subdivides into
//! 8 octants once it holds more objects than the configured capacity.

use std::fmt;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::Float;
use crate::spatial::boundary::Boundary;
use crate::spatial::classify::Classify;
use crate::spatial::error::OctreeError;
use crate::spatial::node::Node;

/// Largest `max_depth` accepted by [`OctreeConfig::validate`]
pub const MAX_SUPPORTED_DEPTH: u32 = 64;

/// What to do when a new object reaches a full leaf that may not split any further
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Store the object anyway; the leaf grows past capacity
    #[default]
    Retain,
    /// Refuse the object with [`OctreeError::NodeSaturated`]
    ///
    /// Only objects inserted directly into a full leaf are refused. Objects pushed down
    /// by a split are always kept, so a cascade can still leave a leaf at `max_depth`
    /// over capacity.
    Reject,
}

/// Configuration for octree behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    /// Maximum objects per node before subdivision
    pub max_objects_per_node: usize,

    /// Maximum subdivision depth (root is depth 0)
    pub max_depth: u32,

    /// Behavior for full leaves at `max_depth`
    pub overflow_policy: OverflowPolicy,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_objects_per_node: 8,
            max_depth: 16,
            overflow_policy: OverflowPolicy::Retain,
        }
    }
}

impl Config for OctreeConfig {}

impl OctreeConfig {
    /// Check that the values describe a usable tree
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_objects_per_node == 0 {
            return Err(ConfigError::Invalid(
                "max_objects_per_node must be at least 1".to_string(),
            ));
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "max_depth {} exceeds the supported maximum of {MAX_SUPPORTED_DEPTH}",
                self.max_depth
            )));
        }
        Ok(())
    }
}

/// Where an accepted object was filed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Depth of the leaf that holds the object once the insert returns
    pub depth: u32,

    /// The insert pushed a leaf over capacity and at least one split followed
    pub split: bool,

    /// The leaf is at `max_depth` and now holds more than the configured capacity
    pub overflowed: bool,
}

/// Octree spatial partitioning structure
///
/// Generic over the stored object `T`, coordinate precision `F` and classifier `C`.
/// The root covers `[-extent/2, extent/2]` on every axis for the lifetime of the tree.
#[derive(Clone)]
pub struct Octree<T, F: Float, C> {
    /// Root node containing the entire volume
    root: Node<T, F>,

    /// Object-to-octant classification
    classify: C,

    /// Configuration
    config: OctreeConfig,

    /// Edge length of the root cube
    extent: F,
}

impl<T, F, C> Octree<T, F, C>
where
    F: Float,
    C: Classify<T, F>,
{
    /// Create a new octree covering a cube of edge `extent`, with default configuration
    ///
    /// Non-positive extents are allowed and produce a tree that rejects every object.
    pub fn new(extent: F, classify: C) -> Self {
        Self {
            root: Node::new(Boundary::cube(extent), 0),
            classify,
            config: OctreeConfig::default(),
            extent,
        }
    }

    /// Create a new octree with an explicit configuration
    pub fn with_config(extent: F, classify: C, config: OctreeConfig) -> Result<Self, OctreeError> {
        config.validate()?;

        Ok(Self {
            root: Node::new(Boundary::cube(extent), 0),
            classify,
            config,
            extent,
        })
    }

    /// Insert an object into the octree
    ///
    /// Objects outside the root boundary are rejected and not stored. Containment is
    /// half-open: `-extent/2 < c <= extent/2` on every axis.
    pub fn insert(&mut self, object: T) -> Result<Placement, OctreeError> {
        let node = self.root.find_mut(&object, &self.classify);

        if !node.boundary().contains(&object, &self.classify) {
            warn!("Object lies outside octree boundary {}", self.root.boundary());
            return Err(OctreeError::OutOfBounds {
                boundary: self.root.boundary().to_string(),
            });
        }

        if self.config.overflow_policy == OverflowPolicy::Reject && node.is_saturated(&self.config) {
            warn!(
                "Rejecting object: leaf {} at depth {} is full",
                node.boundary(),
                node.depth()
            );
            return Err(OctreeError::NodeSaturated {
                depth: node.depth(),
                capacity: self.config.max_objects_per_node,
            });
        }

        trace!("Inserting object into node {} at depth {}", node.boundary(), node.depth());
        let placement = node.insert(object, &self.classify, &self.config);

        if placement.overflowed {
            warn!(
                "Leaf at maximum depth {} is over capacity {}",
                placement.depth,
                self.config.max_objects_per_node
            );
        }

        Ok(placement)
    }

    /// Insert every object, returning how many were accepted
    pub fn insert_all<I>(&mut self, objects: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        objects
            .into_iter()
            .map(|object| self.insert(object))
            .filter(Result::is_ok)
            .count()
    }

    /// Total number of accepted objects
    pub fn size(&self) -> usize {
        self.root.object_count()
    }

    /// Whether no object has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Edge length of the root cube
    pub const fn extent(&self) -> F {
        self.extent
    }

    /// Boundary of the root node
    pub const fn boundary(&self) -> &Boundary<F> {
        self.root.boundary()
    }

    /// Active configuration
    pub const fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Classifier supplied at construction
    pub const fn classifier(&self) -> &C {
        &self.classify
    }

    /// Root node, for walking the tree
    pub const fn root(&self) -> &Node<T, F> {
        &self.root
    }

    /// Deepest existing node along the object's octant path
    pub fn locate(&self, object: &T) -> &Node<T, F> {
        self.root.find(object, &self.classify)
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Depth of the deepest node (0 while the root is still a leaf)
    pub fn depth(&self) -> u32 {
        self.root.deepest_depth()
    }

    /// Get all leaf nodes (for visualization)
    pub fn leaves(&self) -> Vec<&Node<T, F>> {
        let mut leaves = Vec::new();
        self.root.collect_leaves(&mut leaves);
        leaves
    }

    /// Get all nodes at a specific depth (for visualization)
    pub fn nodes_at_depth(&self, depth: u32) -> Vec<&Node<T, F>> {
        let mut nodes = Vec::new();
        self.root.collect_at_depth(depth, &mut nodes);
        nodes
    }
}

impl<T: fmt::Debug, F: Float, C> fmt::Debug for Octree<T, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Octree")
            .field("extent", &self.extent)
            .field("config", &self.config)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
