//! Octree Demo
//!
//! Fills an octree with randomly scattered points plus one dense cluster and logs the
//! resulting tree shape:
//! - Uniform points, some deliberately outside the volume
//! - A tight cluster that forces cascading splits
//! - Per-depth node and object counts
//!
//! Usage: `octree_demo [config.toml|config.ron]`
//! Set `RUST_LOG=debug` to see individual splits.

use log::{info, warn};
use octree_index::foundation::logging;
use octree_index::prelude::*;
use rand::Rng;

// Octree bounds: -50 to +50 on each axis
const OCTREE_SIZE: f64 = 100.0;

// Point counts
const NUM_SCATTERED: usize = 5_000;
const NUM_CLUSTERED: usize = 500;

// Scattered points reach past the bounds so some are rejected
const SCATTER_RANGE: f64 = 60.0;
const CLUSTER_CENTER: [f64; 3] = [12.5, -30.0, 41.0];
const CLUSTER_RADIUS: f64 = 0.05;

fn load_config() -> Result<OctreeConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading octree configuration from {path}");
            OctreeConfig::load_from_file(path)
        }
        None => Ok(OctreeConfig::default()),
    }
}

fn random_point(rng: &mut impl Rng, center: &Vec3<f64>, radius: f64) -> Vec3<f64> {
    center + Vec3::new(
        rng.gen_range(-radius..radius),
        rng.gen_range(-radius..radius),
        rng.gen_range(-radius..radius),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = load_config()?;
    info!(
        "Octree size {OCTREE_SIZE}, capacity {} per node, max depth {}, overflow policy {:?}",
        config.max_objects_per_node, config.max_depth, config.overflow_policy
    );

    let mut octree = Octree::with_config(OCTREE_SIZE, ByPosition, config)?;
    let mut rng = rand::thread_rng();

    let scattered: Vec<Vec3<f64>> = (0..NUM_SCATTERED)
        .map(|_| random_point(&mut rng, &Vec3::zeros(), SCATTER_RANGE))
        .collect();
    let accepted = octree.insert_all(scattered);
    info!(
        "Scattered points: {accepted} accepted, {} rejected",
        NUM_SCATTERED - accepted
    );

    let cluster_center = Vec3::from(CLUSTER_CENTER);
    let mut overflowed = 0;
    for _ in 0..NUM_CLUSTERED {
        match octree.insert(random_point(&mut rng, &cluster_center, CLUSTER_RADIUS)) {
            Ok(placement) if placement.overflowed => overflowed += 1,
            Ok(_) => {}
            Err(e) => warn!("Cluster point rejected: {e}"),
        }
    }
    info!("Cluster points: {NUM_CLUSTERED} inserted, {overflowed} into full leaves");

    info!(
        "Octree holds {} objects in {} nodes, depth {}",
        octree.size(),
        octree.node_count(),
        octree.depth()
    );

    for depth in 0..=octree.depth() {
        let nodes = octree.nodes_at_depth(depth);
        let leaves = nodes.iter().filter(|node| node.is_leaf()).count();
        let objects: usize = nodes.iter().map(|node| node.objects().len()).sum();
        info!(
            "  depth {depth:>2}: {:>5} nodes, {leaves:>5} leaves, {objects:>6} objects held",
            nodes.len()
        );
    }

    let densest = octree
        .leaves()
        .into_iter()
        .max_by_key(|leaf| leaf.objects().len());
    if let Some(leaf) = densest {
        info!(
            "Densest leaf {} at depth {} holds {} objects",
            leaf.boundary(),
            leaf.depth(),
            leaf.objects().len()
        );
    }

    Ok(())
}
