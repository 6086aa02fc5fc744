//! Stateless geometry resolution
//!
//! Pure functions turning (angle, depth) assignments into drawable
//! primitives. Angles stay in degrees until the moment a cartesian point
//! is built; the conversion is always `x = r cos θ`, `y = r sin θ` with θ
//! in radians. Nothing here depends on ambient transform state: every
//! primitive carries its own explicit coordinates.

use crate::tree::{MarkerFactory, WedgeSpec};

use super::error::LayoutError;
use super::types::{
    Connector, Label, Marker, Point, TextAnchor, VerticalAlign, Wedge,
};

/// Stacking order for markers; connector lines render below this
pub const MARKER_Z_ORDER: u32 = 3;

/// Angular width, in degrees, covered by one baseline segment
const SEGMENT_SPAN: f64 = 5.0;

/// Quadrant test: angles strictly inside (90, 270) read upside-down from
/// outside the circle and need their text flipped. Exactly 90 and 270 do
/// not flip.
fn flipped(angle: f64) -> bool {
    angle > 90.0 && angle < 270.0
}

/// Place a leaf label so it reads upright from outside the circle
///
/// The label is pushed outward to `depth + pad + outward_offset`; the
/// caller derives `outward_offset` from the canvas extent.
pub fn place_label(text: &str, angle: f64, depth: f64, pad: f64, outward_offset: f64) -> Label {
    let (rotation, anchor) = if flipped(angle) {
        (angle + 180.0, TextAnchor::End)
    } else {
        (angle, TextAnchor::Start)
    };

    Label {
        text: text.to_string(),
        position: Point::from_polar(angle, depth + outward_offset + pad),
        rotation,
        anchor,
        valign: VerticalAlign::Center,
    }
}

/// Place a marker at a node's cartesian position
///
/// The factory receives the final coordinate and returns the shape to
/// draw there, stacked above the connector lines.
pub fn place_marker(angle: f64, depth: f64, pad: f64, factory: &MarkerFactory) -> Marker {
    let position = Point::from_polar(angle, depth + pad);
    Marker {
        shape: factory(position),
        position,
        z_order: MARKER_Z_ORDER,
    }
}

/// Approximate the arc between two same-depth points as a polyline
///
/// One point per 5 degrees of span, with a floor of 2 so a zero-width
/// span still yields a segment. Angle (in radians) and radius are both
/// interpolated linearly across the samples.
pub fn baseline(angle1: f64, depth1: f64, angle2: f64, depth2: f64) -> Connector {
    let count = (((angle1 - angle2).abs() / SEGMENT_SPAN) as usize).max(2);
    let (rad1, rad2) = (angle1.to_radians(), angle2.to_radians());

    let points = (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            let rad = rad1 + (rad2 - rad1) * t;
            let radius = depth1 + (depth2 - depth1) * t;
            Point::new(radius * rad.cos(), radius * rad.sin())
        })
        .collect();

    Connector { points }
}

/// Straight radial segment between two depths at one angle
pub fn depth_line(angle: f64, from_depth: f64, to_depth: f64) -> Connector {
    Connector {
        points: vec![
            Point::from_polar(angle, from_depth),
            Point::from_polar(angle, to_depth),
        ],
    }
}

/// Resolve a clade's highlight wedge and its edge label
///
/// `leaf_angles` are the angles of the clade's descendant leaves;
/// `reference_depth` is the padded outer depth of the tree. The angular
/// span is the extreme leaf angles padded outward by
/// `(max - min) / (leaves + 2) / 2` so the wedge encloses rather than
/// touches the outermost leaves.
///
/// Internal wedges are filled sectors from the center out to
/// `reference_depth`; external wedges are rings of thickness `size`
/// sitting on top of it. An external wedge with neither its own size nor
/// a layout-wide ring thickness cannot be constructed.
pub fn resolve_wedge(
    spec: &WedgeSpec,
    name: Option<&str>,
    leaf_angles: &[f64],
    reference_depth: f64,
    ring_thickness: Option<f64>,
) -> Result<(Wedge, Option<Label>), LayoutError> {
    let mut min_angle = f64::INFINITY;
    let mut max_angle = f64::NEG_INFINITY;
    for &angle in leaf_angles {
        min_angle = min_angle.min(angle);
        max_angle = max_angle.max(angle);
    }

    let pad = (max_angle - min_angle) / (leaf_angles.len() as f64 + 2.0) / 2.0;
    let start_angle = min_angle - pad;
    let end_angle = max_angle + pad;

    let wedge = if spec.external {
        let size = spec.size.or(ring_thickness).ok_or_else(|| {
            LayoutError::configuration(
                name,
                "external wedge needs a size or a layout-wide ring thickness",
            )
        })?;
        Wedge {
            center: Point::new(0.0, 0.0),
            radius: reference_depth + size,
            start_angle,
            end_angle,
            width: Some(size),
            styles: spec.styles.clone(),
        }
    } else {
        Wedge {
            center: Point::new(0.0, 0.0),
            radius: reference_depth,
            start_angle,
            end_angle,
            width: None,
            styles: spec.styles.clone(),
        }
    };

    let label = name.map(|text| wedge_label(text, start_angle, reference_depth, spec.external));
    Ok((wedge, label))
}

/// Label at a wedge's starting angular edge
///
/// Same quadrant rule as leaf labels, but the anchor sense inverts
/// between internal and external mode because the text sits on opposite
/// sides of the wedge boundary, and the vertical alignment keys off the
/// flip so the text hangs away from the wedge.
fn wedge_label(text: &str, angle: f64, depth: f64, external: bool) -> Label {
    let flip = flipped(angle);
    let rotation = if flip { angle + 180.0 } else { angle };
    let anchor = match (external, flip) {
        (true, true) => TextAnchor::End,
        (true, false) => TextAnchor::Start,
        (false, true) => TextAnchor::Start,
        (false, false) => TextAnchor::End,
    };
    let valign = if flip {
        VerticalAlign::Top
    } else {
        VerticalAlign::Bottom
    };

    Label {
        text: text.to_string(),
        position: Point::from_polar(angle, depth),
        rotation,
        anchor,
        valign,
    }
}
