//! Core types for the polar layout engine

use serde::{Deserialize, Serialize};

use crate::tree::CladeId;

/// A 2D point in cartesian space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a polar coordinate (angle in degrees, radius) to cartesian.
    pub fn from_polar(angle: f64, radius: f64) -> Self {
        let rad = angle.to_radians();
        Self {
            x: radius * rad.cos(),
            y: radius * rad.sin(),
        }
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Text anchor position for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// A positioned text label
///
/// `rotation` is in degrees; the anchor point is `position`, so rotation
/// pivots around the anchored end of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub rotation: f64,
    pub anchor: TextAnchor,
    pub valign: VerticalAlign,
}

/// Pass-through drawing style options for wedges and markers
///
/// Reserved layout semantics (wedge size, external placement) live on
/// [`crate::tree::WedgeSpec`], not here; this bag is forwarded to the
/// renderer untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl StyleOptions {
    /// Merge another style set, with `other` taking precedence
    pub fn merge(&self, other: &StyleOptions) -> StyleOptions {
        StyleOptions {
            fill: other.fill.clone().or_else(|| self.fill.clone()),
            stroke: other.stroke.clone().or_else(|| self.stroke.clone()),
            stroke_width: other.stroke_width.or(self.stroke_width),
            opacity: other.opacity.or(self.opacity),
        }
    }
}

/// The drawable shape produced by a marker factory
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerShape {
    pub kind: MarkerKind,
    pub styles: StyleOptions,
}

/// Shape variants a marker factory can produce
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerKind {
    Circle { radius: f64 },
    Square { size: f64 },
    /// An arbitrary path in the renderer's path syntax, relative to the
    /// marker position
    Path(String),
}

/// A marker placed at a node's cartesian position
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub shape: MarkerShape,
    /// Stacking order; markers sit above connector lines
    pub z_order: u32,
}

/// A piecewise-linear connector in cartesian space
///
/// Baseline connectors approximate a circular arc; depth connectors are
/// straight two-point radial segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub points: Vec<Point>,
}

/// A highlight region spanning a clade's angular range
///
/// Angles stay in degrees because a sector primitive is inherently
/// angular; the renderer converts when tracing the outline. `width` is
/// `None` for a full sector from the center, or the ring thickness for an
/// annular (external) wedge whose outer radius is `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub width: Option<f64>,
    pub styles: StyleOptions,
}

/// A single drawable descriptor emitted by the layout pass
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Baseline(Connector),
    DepthLine(Connector),
    Label(Label),
    Marker(Marker),
    Wedge(Wedge),
}

/// A non-fatal finding attached to one clade's annotation
///
/// A malformed wedge spec suppresses that clade's wedge but never aborts
/// the traversal; the failure is reported here instead.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutWarning {
    pub clade: CladeId,
    pub message: String,
}

/// The complete result of a layout pass
#[derive(Debug, Clone)]
pub struct PolarLayout {
    /// Drawable descriptors in emission order (z-order for overlaps)
    pub primitives: Vec<Primitive>,
    /// Radial extent the host canvas needs to show everything
    pub extent: f64,
    /// Per-clade annotation failures that were skipped over
    pub warnings: Vec<LayoutWarning>,
}

impl PolarLayout {
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(label) => Some(label),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn wedges(&self) -> impl Iterator<Item = &Wedge> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Wedge(wedge) => Some(wedge),
            _ => None,
        })
    }

    pub fn baselines(&self) -> impl Iterator<Item = &Connector> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Baseline(connector) => Some(connector),
            _ => None,
        })
    }

    pub fn depth_lines(&self) -> impl Iterator<Item = &Connector> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::DepthLine(connector) => Some(connector),
            _ => None,
        })
    }
}
