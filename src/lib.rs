//! Phylopolar - polar (radial) layout for rooted phylogenetic trees
//!
//! This library assigns an angle and a radial depth to every clade of a
//! rooted tree and resolves them into renderable primitives: connector
//! polylines, highlight wedges, upright labels, and point markers. It
//! performs no I/O and no drawing; parsing tree files and rasterizing the
//! primitives are the caller's business.
//!
//! # Example
//!
//! ```rust
//! use phylopolar::{Clade, PolarConfig, Tree};
//!
//! let mut tree = Tree::new(Clade::new());
//! let root = tree.root();
//! tree.add_child(root, Clade::named("A").with_branch_length(1.0));
//! tree.add_child(root, Clade::named("B").with_branch_length(2.0));
//!
//! let layout = phylopolar::polar_layout(&tree, &PolarConfig::default()).unwrap();
//! assert_eq!(layout.labels().count(), 2);
//! assert!(layout.extent > 0.0);
//! ```

pub mod layout;
pub mod tree;

pub use layout::{
    compute, LayoutError, LayoutWarning, PolarConfig, PolarLayout, Primitive,
};
pub use tree::{Clade, CladeId, MarkerFactory, Tree, WedgeSpec};

/// Lay out a tree with the given configuration
///
/// Convenience wrapper around [`layout::compute`]; the layout pass is a
/// pure function of the tree and the configuration, so a read-only tree
/// can safely back concurrent invocations.
pub fn polar_layout(tree: &Tree, config: &PolarConfig) -> Result<PolarLayout, LayoutError> {
    layout::compute(tree, config)
}
