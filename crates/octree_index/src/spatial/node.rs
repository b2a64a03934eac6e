//! Single node in the octree hierarchy
//!
//! A node is either a leaf holding objects directly, or an internal node that owns exactly
//! eight children and holds nothing itself. Leaves turn internal when they overflow; there
//! is no way back.

use log::debug;

use crate::foundation::math::{Float, Vec3};
use crate::spatial::boundary::Boundary;
use crate::spatial::classify::{Classify, OctantMask};
use crate::spatial::octree::{OctreeConfig, Placement};

/// Single node in the octree hierarchy
#[derive(Debug, Clone)]
pub struct Node<T, F: Float> {
    /// Region covered by this node
    boundary: Boundary<F>,

    /// Split point, cached from the boundary
    center: Vec3<F>,

    /// Depth in the tree (0 = root)
    depth: u32,

    /// Objects held directly (leaf only)
    objects: Vec<T>,

    /// Child nodes (8 octants), None if this is a leaf
    children: Option<Box<[Node<T, F>; 8]>>,
}

impl<T, F: Float> Node<T, F> {
    /// Create a new empty leaf
    pub(crate) fn new(boundary: Boundary<F>, depth: u32) -> Self {
        Self {
            center: boundary.center(),
            boundary,
            depth,
            objects: Vec::new(),
            children: None,
        }
    }

    /// Region covered by this node
    pub const fn boundary(&self) -> &Boundary<F> {
        &self.boundary
    }

    /// Point at which this node splits into octants
    pub const fn center(&self) -> &Vec3<F> {
        &self.center
    }

    /// Depth in the tree (0 = root)
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Objects held directly by this node; always empty for internal nodes
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    /// Check if this node is a leaf (has no children)
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// All eight children, indexed by octant
    pub fn children(&self) -> Option<&[Self; 8]> {
        self.children.as_deref()
    }

    /// Child covering one octant
    pub fn child(&self, octant: OctantMask) -> Option<&Self> {
        self.children.as_ref().map(|children| &children[octant.index()])
    }

    /// Octant of `object` relative to this node's center
    pub fn octant_of<C>(&self, object: &T, classify: &C) -> OctantMask
    where
        C: Classify<T, F> + ?Sized,
    {
        classify.classify_at(object, &self.center)
    }

    /// Deepest existing node along the object's octant path
    ///
    /// Does not check that the object actually lies inside the returned node.
    pub fn find<C>(&self, object: &T, classify: &C) -> &Self
    where
        C: Classify<T, F> + ?Sized,
    {
        let octant = self.octant_of(object, classify);
        match self.children {
            Some(ref children) => children[octant.index()].find(object, classify),
            None => self,
        }
    }

    pub(crate) fn find_mut<C>(&mut self, object: &T, classify: &C) -> &mut Self
    where
        C: Classify<T, F> + ?Sized,
    {
        let octant = self.octant_of(object, classify);
        match self.children {
            Some(ref mut children) => children[octant.index()].find_mut(object, classify),
            None => self,
        }
    }

    /// Whether a leaf at the depth limit is already at capacity
    pub(crate) fn is_saturated(&self, config: &OctreeConfig) -> bool {
        self.is_leaf()
            && self.depth >= config.max_depth
            && self.objects.len() >= config.max_objects_per_node
    }

    /// Append an object, splitting once capacity is exceeded
    ///
    /// Leaves at `max_depth` never split; they keep every object they are given.
    /// The returned placement describes the leaf that ends up holding `object`,
    /// which lies below this node whenever the insert causes a split.
    pub(crate) fn insert<C>(&mut self, object: T, classify: &C, config: &OctreeConfig) -> Placement
    where
        C: Classify<T, F> + ?Sized,
    {
        self.objects.push(object);

        if self.objects.len() <= config.max_objects_per_node {
            return Placement {
                depth: self.depth,
                split: false,
                overflowed: false,
            };
        }

        if self.depth < config.max_depth {
            let placement = self.split(classify, config);
            Placement {
                split: true,
                ..placement
            }
        } else {
            Placement {
                depth: self.depth,
                split: false,
                overflowed: true,
            }
        }
    }

    /// Create all eight children and move every held object into one of them
    ///
    /// Returns the placement of the most recently pushed object.
    fn split<C>(&mut self, classify: &C, config: &OctreeConfig) -> Placement
    where
        C: Classify<T, F> + ?Sized,
    {
        let depth = self.depth + 1;
        let children = self
            .boundary
            .octants(&self.center)
            .map(|boundary| Self::new(boundary, depth));
        self.children = Some(Box::new(children));

        debug!(
            "Splitting node {} at depth {}, redistributing {} objects",
            self.boundary,
            self.depth,
            self.objects.len()
        );

        // Children exist now, so every find lands strictly below this node
        let mut last = Placement {
            depth,
            split: false,
            overflowed: false,
        };
        for object in std::mem::take(&mut self.objects) {
            last = self.find_mut(&object, classify).insert(object, classify, config);
        }
        last
    }

    /// Count objects in this node and all children
    pub fn object_count(&self) -> usize {
        self.objects.len() + self.child_nodes().map(Self::object_count).sum::<usize>()
    }

    /// Count this node and every node below it
    pub fn node_count(&self) -> usize {
        1 + self.child_nodes().map(Self::node_count).sum::<usize>()
    }

    /// Depth of the deepest node in this subtree
    pub fn deepest_depth(&self) -> u32 {
        self.child_nodes()
            .map(Self::deepest_depth)
            .max()
            .unwrap_or(self.depth)
    }

    /// Get all leaf nodes (for visualization)
    pub fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Self>) {
        if self.is_leaf() {
            leaves.push(self);
        } else {
            for child in self.child_nodes() {
                child.collect_leaves(leaves);
            }
        }
    }

    /// Get all nodes at a specific depth (for visualization)
    pub fn collect_at_depth<'a>(&'a self, target_depth: u32, nodes: &mut Vec<&'a Self>) {
        if self.depth == target_depth {
            nodes.push(self);
        } else if self.depth < target_depth {
            for child in self.child_nodes() {
                child.collect_at_depth(target_depth, nodes);
            }
        }
    }

    fn child_nodes(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().flat_map(|children| children.iter())
    }
}
