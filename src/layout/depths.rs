//! Radial depth assignment
//!
//! Depth is cumulative branch length from the root (root depth 0). Trees
//! without any length metadata fall back to one unit per edge so the
//! fan-out stays non-degenerate.

use crate::tree::{Clade, CladeId, Tree};

/// Depth per clade, indexed by [`CladeId::index`]
pub type DepthMap = Vec<f64>;

/// Compute cumulative depths for a tree
///
/// An absent branch length contributes 0. If the resulting maximum depth
/// is zero the whole map is recomputed with unit branch lengths.
pub fn assign_depths(tree: &Tree) -> DepthMap {
    let depths = accumulate(tree, |clade| clade.branch_length.unwrap_or(0.0));
    let max = depths.iter().cloned().fold(0.0, f64::max);
    if max == 0.0 {
        accumulate(tree, |_| 1.0)
    } else {
        depths
    }
}

fn accumulate(tree: &Tree, edge: impl Fn(&Clade) -> f64 + Copy) -> DepthMap {
    let mut depths = vec![0.0; tree.len()];
    fill(tree, tree.root(), 0.0, edge, &mut depths);
    depths
}

fn fill(
    tree: &Tree,
    id: CladeId,
    depth: f64,
    edge: impl Fn(&Clade) -> f64 + Copy,
    depths: &mut [f64],
) {
    depths[id.index()] = depth;
    for &child in tree.children(id) {
        fill(tree, child, depth + edge(&tree[child]), edge, depths);
    }
}
