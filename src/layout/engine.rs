//! Layout driver and orchestration
//!
//! [`compute`] is the entry point: it validates the arc, builds the angle
//! and depth maps, derives the canvas extent, and then walks the tree
//! depth-first emitting primitives in a deterministic order. Emission
//! order doubles as z-order for overlapping primitives.

use crate::tree::{CladeId, Tree};

use super::angles::{assign_angles, AngleMap};
use super::config::PolarConfig;
use super::depths::{assign_depths, DepthMap};
use super::error::LayoutError;
use super::geometry;
use super::types::{LayoutWarning, PolarLayout, Primitive};

/// Compute the full primitive set for one tree
///
/// Structural problems (bad arc, too few leaves) fail before anything is
/// emitted. A malformed wedge spec on a single clade only suppresses that
/// clade's wedge and is reported through [`PolarLayout::warnings`].
pub fn compute(tree: &Tree, config: &PolarConfig) -> Result<PolarLayout, LayoutError> {
    let angles = assign_angles(tree, config.arc, config.start)?;
    let depths = assign_depths(tree);

    let max_depth = depths.iter().cloned().fold(0.0, f64::max) + config.depth_offset;

    let external = config.label_external || config.patch_external;
    let ring_thickness = config
        .lratio
        .or_else(|| external.then(|| max_depth / 2.0));
    let extent = match ring_thickness {
        Some(ring) if external => max_depth * 1.1 + ring,
        _ => max_depth * 1.1,
    };

    let mut walker = Walker {
        tree,
        config,
        angles: &angles,
        depths: &depths,
        max_depth,
        ring_thickness,
        label_offset: extent * config.label_offset,
        primitives: Vec::new(),
        warnings: Vec::new(),
    };

    // the root sits at depth_offset; connect it back to the origin
    let root = tree.root();
    walker.primitives.push(Primitive::DepthLine(geometry::depth_line(
        angles[root.index()],
        0.0,
        config.depth_offset,
    )));

    walker.walk(root);

    Ok(PolarLayout {
        primitives: walker.primitives,
        extent,
        warnings: walker.warnings,
    })
}

/// Pre-order traversal state for one layout pass
struct Walker<'a> {
    tree: &'a Tree,
    config: &'a PolarConfig,
    angles: &'a AngleMap,
    depths: &'a DepthMap,
    /// Maximum depth including the global offset; the shared outer ring
    /// for external placement
    max_depth: f64,
    ring_thickness: Option<f64>,
    /// Absolute radial push-out for labels, derived from the extent
    label_offset: f64,
    primitives: Vec<Primitive>,
    warnings: Vec<LayoutWarning>,
}

impl Walker<'_> {
    /// Emit this clade's annotations, then its child connectors, then
    /// recurse. Children order matches the tree, so the output order is
    /// deterministic.
    fn walk(&mut self, id: CladeId) {
        let tree = self.tree;
        let clade = &tree[id];
        let angle = self.angles[id.index()];
        let depth = self.depths[id.index()] + self.config.depth_offset;

        if let Some(factory) = &clade.marker {
            let marker_depth = if self.config.patch_external {
                self.max_depth
            } else {
                depth
            };
            self.primitives.push(Primitive::Marker(geometry::place_marker(
                angle,
                marker_depth,
                self.config.pad_patch,
                factory,
            )));
        }

        // labels only exist for named leaves
        if clade.is_leaf() {
            if let Some(name) = &clade.name {
                let label_depth = if self.config.label_external {
                    self.max_depth
                } else {
                    depth
                };
                self.primitives.push(Primitive::Label(geometry::place_label(
                    name,
                    angle,
                    label_depth,
                    self.config.pad_label,
                    self.label_offset,
                )));
            }
        }

        if let Some(spec) = &clade.wedge {
            let leaf_angles: Vec<f64> = tree
                .terminals_of(id)
                .iter()
                .map(|leaf| self.angles[leaf.index()])
                .collect();
            match geometry::resolve_wedge(
                spec,
                clade.name.as_deref(),
                &leaf_angles,
                self.max_depth + self.config.pad_wedge,
                self.ring_thickness,
            ) {
                Ok((wedge, label)) => {
                    self.primitives.push(Primitive::Wedge(wedge));
                    if let Some(label) = label {
                        self.primitives.push(Primitive::Label(label));
                    }
                }
                Err(err) => self.warnings.push(LayoutWarning {
                    clade: id,
                    message: err.to_string(),
                }),
            }
        }

        for &child in tree.children(id) {
            let child_angle = self.angles[child.index()];
            let child_depth = self.depths[child.index()] + self.config.depth_offset;

            self.primitives.push(Primitive::Baseline(geometry::baseline(
                angle,
                depth,
                child_angle,
                depth,
            )));
            self.primitives.push(Primitive::DepthLine(geometry::depth_line(
                child_angle,
                depth,
                child_depth,
            )));
            self.walk(child);
        }
    }
}
