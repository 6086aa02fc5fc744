//! Configuration for the polar layout engine

use serde::{Deserialize, Serialize};

/// Configuration options for one layout pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarConfig {
    /// Total angular span, in degrees, over which leaves are distributed.
    /// Must lie strictly inside (0, 360).
    pub arc: f64,

    /// Angle of the first (lowest-angle) leaf, in degrees
    pub start: f64,

    /// Radial offset added to every depth so the root does not collapse
    /// onto the origin
    pub depth_offset: f64,

    /// Push all leaf labels out to the shared outer ring instead of each
    /// leaf's own depth
    pub label_external: bool,

    /// Push all markers out to the shared outer ring
    pub patch_external: bool,

    /// Thickness of the outer ring used by external placement and
    /// external wedges. `None` defaults to half the maximum depth when
    /// external placement is on.
    pub lratio: Option<f64>,

    /// Additional outward offset for labels
    pub pad_label: f64,

    /// Additional outward offset for markers
    pub pad_patch: f64,

    /// Additional outward offset for wedges
    pub pad_wedge: f64,

    /// Label push-out as a fraction of the radial extent
    pub label_offset: f64,
}

impl Default for PolarConfig {
    fn default() -> Self {
        Self {
            arc: 350.0,
            start: 0.0,
            depth_offset: 0.1,
            label_external: false,
            patch_external: false,
            lratio: None,
            pad_label: 0.0,
            pad_patch: 0.0,
            pad_wedge: 0.0,
            label_offset: 0.05,
        }
    }
}

impl PolarConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the angular span in degrees
    pub fn with_arc(mut self, arc: f64) -> Self {
        self.arc = arc;
        self
    }

    /// Set the start angle in degrees
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Set the global radial offset
    pub fn with_depth_offset(mut self, offset: f64) -> Self {
        self.depth_offset = offset;
        self
    }

    /// Align all leaf labels on the outer ring
    pub fn with_external_labels(mut self, external: bool) -> Self {
        self.label_external = external;
        self
    }

    /// Align all markers on the outer ring
    pub fn with_external_patches(mut self, external: bool) -> Self {
        self.patch_external = external;
        self
    }

    /// Set the outer ring thickness
    pub fn with_ring_thickness(mut self, lratio: f64) -> Self {
        self.lratio = Some(lratio);
        self
    }

    /// Set the label padding
    pub fn with_label_pad(mut self, pad: f64) -> Self {
        self.pad_label = pad;
        self
    }

    /// Set the marker padding
    pub fn with_patch_pad(mut self, pad: f64) -> Self {
        self.pad_patch = pad;
        self
    }

    /// Set the wedge padding
    pub fn with_wedge_pad(mut self, pad: f64) -> Self {
        self.pad_wedge = pad;
        self
    }
}
