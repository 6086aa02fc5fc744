//! Error types for the polar layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
///
/// `InvalidArc` is structural and detected before any primitive is
/// emitted. `Configuration` is raised when a per-clade wedge spec is
/// resolved; the layout walk downgrades it to a warning so one malformed
/// annotation cannot abort the whole tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Arc span or leaf count make the angular layout unsolvable
    #[error("invalid arc: {reason}")]
    InvalidArc { reason: String },

    /// A wedge spec attached to a clade is structurally incomplete
    #[error("invalid wedge on clade '{clade}': {reason}")]
    Configuration { clade: String, reason: String },
}

impl LayoutError {
    /// Arc span outside the open interval (0, 360)
    pub fn arc_out_of_range(arc: f64) -> Self {
        Self::InvalidArc {
            reason: format!("span of {arc} degrees is outside the open interval (0, 360)"),
        }
    }

    /// Leaf spacing divides by `leaves - 1`, so a tree needs at least two
    pub fn too_few_leaves(count: usize) -> Self {
        Self::InvalidArc {
            reason: format!("tree has {count} terminal clade(s), at least 2 are required"),
        }
    }

    /// A wedge spec missing required geometry for its placement mode
    pub fn configuration(clade: Option<&str>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            clade: clade.unwrap_or("<unnamed>").to_string(),
            reason: reason.into(),
        }
    }
}
