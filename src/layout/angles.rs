//! Angular position assignment
//!
//! Leaves are spread evenly over the configured arc; internal clades sit
//! at the midpoint of their first and last child. The map is filled
//! bottom-up by an explicit post-order traversal so every clade is
//! resolved exactly once.

use crate::tree::{CladeId, Tree};

use super::error::LayoutError;

/// Angle in degrees per clade, indexed by [`CladeId::index`]
pub type AngleMap = Vec<f64>;

/// Compute the angle map for a tree
///
/// Leaf `i` of the REVERSED natural order gets `start + i * spacing`, so
/// the first leaf in left-to-right order ends up at the highest angle.
/// Fails if `arc` is outside the open interval (0, 360) or the tree has
/// fewer than two terminal clades.
pub fn assign_angles(tree: &Tree, arc: f64, start: f64) -> Result<AngleMap, LayoutError> {
    if arc <= 0.0 || arc >= 360.0 {
        return Err(LayoutError::arc_out_of_range(arc));
    }

    let leaves = tree.terminals();
    if leaves.len() <= 1 {
        return Err(LayoutError::too_few_leaves(leaves.len()));
    }

    let spacing = arc / (leaves.len() - 1) as f64;
    let mut angles = vec![0.0; tree.len()];
    for (i, leaf) in leaves.iter().rev().enumerate() {
        angles[leaf.index()] = start + spacing * i as f64;
    }

    resolve_internal(tree, tree.root(), &mut angles);
    Ok(angles)
}

/// Post-order fill of internal angles. Only the first and last child
/// matter; interior children never influence the parent.
fn resolve_internal(tree: &Tree, id: CladeId, angles: &mut [f64]) {
    let children = tree.children(id);
    if children.is_empty() {
        return;
    }
    for &child in children {
        resolve_internal(tree, child, angles);
    }
    let first = angles[children[0].index()];
    let last = angles[children[children.len() - 1].index()];
    angles[id.index()] = (first + last) / 2.0;
}
