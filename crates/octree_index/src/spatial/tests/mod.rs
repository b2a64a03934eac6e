//! Scenario tests for the octree index
//!
//! Whole-tree behavior: containment law, count invariants and split cascades.

mod containment;
