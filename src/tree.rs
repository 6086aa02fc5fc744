//! Rooted tree model consumed by the layout pass
//!
//! The tree is arena-backed: clades live in a flat vector and refer to one
//! another through [`CladeId`] indices, so node identity is index identity
//! and never depends on field values. The layout pass treats the tree as
//! read-only input.

use std::fmt;
use std::ops::Index;

use crate::layout::types::{MarkerShape, Point, StyleOptions};

/// Handle to a clade inside a [`Tree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CladeId(usize);

impl CladeId {
    /// Position in the arena; usable as a key into the angle and depth maps
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Callback turning a cartesian position into a drawable marker shape
pub type MarkerFactory = Box<dyn Fn(Point) -> MarkerShape>;

/// Highlight-wedge request attached to a clade
///
/// The reserved layout fields are explicit; everything the renderer should
/// just pass through lives in `styles`.
#[derive(Debug, Clone, Default)]
pub struct WedgeSpec {
    /// Ring thickness for external wedges. `None` falls back to the
    /// layout-wide ring thickness.
    pub size: Option<f64>,
    /// Place the wedge as an annular ring outside the tree instead of a
    /// filled sector behind it
    pub external: bool,
    pub styles: StyleOptions,
}

impl WedgeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request external (annular ring) placement
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_styles(mut self, styles: StyleOptions) -> Self {
        self.styles = styles;
        self
    }
}

/// A node in the rooted tree, internal or leaf
///
/// Children order is significant: it fixes the left-to-right leaf order
/// around the circle and therefore which leaves end up adjacent.
pub struct Clade {
    pub name: Option<String>,
    /// Length of the edge from the parent to this clade. Absent means
    /// unspecified, not zero.
    pub branch_length: Option<f64>,
    pub wedge: Option<WedgeSpec>,
    pub marker: Option<MarkerFactory>,
    children: Vec<CladeId>,
}

impl Clade {
    pub fn new() -> Self {
        Self {
            name: None,
            branch_length: None,
            wedge: None,
            marker: None,
            children: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn with_branch_length(mut self, length: f64) -> Self {
        self.branch_length = Some(length);
        self
    }

    pub fn with_wedge(mut self, wedge: WedgeSpec) -> Self {
        self.wedge = Some(wedge);
        self
    }

    pub fn with_marker(mut self, factory: MarkerFactory) -> Self {
        self.marker = Some(factory);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[CladeId] {
        &self.children
    }
}

impl Default for Clade {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Clade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clade")
            .field("name", &self.name)
            .field("branch_length", &self.branch_length)
            .field("wedge", &self.wedge)
            .field("marker", &self.marker.as_ref().map(|_| "<factory>"))
            .field("children", &self.children)
            .finish()
    }
}

/// A rooted tree of clades
///
/// Construction is additive only: create the root, then attach children.
/// The layout engine never mutates a tree, so one tree can back any number
/// of layout invocations.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Clade>,
}

impl Tree {
    /// Create a tree holding only the given root clade
    pub fn new(root: Clade) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> CladeId {
        CladeId(0)
    }

    /// Attach `clade` as the last child of `parent` and return its id
    pub fn add_child(&mut self, parent: CladeId, clade: Clade) -> CladeId {
        let id = CladeId(self.nodes.len());
        self.nodes.push(clade);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Number of clades, internal and terminal
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, id: CladeId) -> &[CladeId] {
        &self.nodes[id.0].children
    }

    pub fn is_terminal(&self, id: CladeId) -> bool {
        self.nodes[id.0].is_leaf()
    }

    /// All clade ids in arena order
    pub fn clades(&self) -> impl Iterator<Item = CladeId> {
        (0..self.nodes.len()).map(CladeId)
    }

    /// Number of terminal clades (leaves)
    pub fn count_terminals(&self) -> usize {
        self.nodes.iter().filter(|c| c.is_leaf()).count()
    }

    /// Terminal clades in natural left-to-right order (pre-order traversal)
    pub fn terminals(&self) -> Vec<CladeId> {
        self.terminals_of(self.root())
    }

    /// Terminal clades under `id`, in natural order
    pub fn terminals_of(&self, id: CladeId) -> Vec<CladeId> {
        let mut leaves = Vec::new();
        self.collect_terminals(id, &mut leaves);
        leaves
    }

    /// Non-terminal clades in arena order
    pub fn internals(&self) -> Vec<CladeId> {
        self.clades().filter(|&id| !self.is_terminal(id)).collect()
    }

    fn collect_terminals(&self, id: CladeId, out: &mut Vec<CladeId>) {
        let clade = &self.nodes[id.0];
        if clade.is_leaf() {
            out.push(id);
            return;
        }
        for &child in &clade.children {
            self.collect_terminals(child, out);
        }
    }
}

impl Index<CladeId> for Tree {
    type Output = Clade;

    fn index(&self, id: CladeId) -> &Clade {
        &self.nodes[id.0]
    }
}
