//! End-to-end layout scenarios

use pretty_assertions::assert_eq;

use phylopolar::layout::{assign_angles, assign_depths};
use phylopolar::{polar_layout, Clade, PolarConfig, Tree};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// ((A:1, B:1):1, (C:1, D:1):1) - the canonical balanced example
fn balanced_four_leaf() -> Tree {
    let mut tree = Tree::new(Clade::new());
    let root = tree.root();
    let left = tree.add_child(root, Clade::new().with_branch_length(1.0));
    let right = tree.add_child(root, Clade::new().with_branch_length(1.0));
    tree.add_child(left, Clade::named("A").with_branch_length(1.0));
    tree.add_child(left, Clade::named("B").with_branch_length(1.0));
    tree.add_child(right, Clade::named("C").with_branch_length(1.0));
    tree.add_child(right, Clade::named("D").with_branch_length(1.0));
    tree
}

#[test]
fn balanced_tree_round_trip() {
    let tree = balanced_four_leaf();
    let angles = assign_angles(&tree, 350.0, 0.0).unwrap();

    // leaves evenly spaced by 350/3 in reverse name order
    let spacing = 350.0 / 3.0;
    let leaves = tree.terminals();
    assert_close(angles[leaves[0].index()], 350.0); // A
    assert_close(angles[leaves[1].index()], 2.0 * spacing); // B
    assert_close(angles[leaves[2].index()], spacing); // C
    assert_close(angles[leaves[3].index()], 0.0); // D

    // internal angles are midpoints of their children's endpoints
    let root = tree.root();
    let left = tree.children(root)[0];
    let right = tree.children(root)[1];
    assert_close(angles[left.index()], (350.0 + 2.0 * spacing) / 2.0);
    assert_close(angles[right.index()], spacing / 2.0);
    assert_close(angles[root.index()], 175.0);

    // one label per named leaf, one baseline and one depth connector per
    // edge, plus the root's own depth connector
    let layout = polar_layout(&tree, &PolarConfig::default()).unwrap();
    assert_eq!(layout.labels().count(), 4);
    assert_eq!(layout.baselines().count(), 6);
    assert_eq!(layout.depth_lines().count(), 7);
}

#[test]
fn zero_branch_lengths_match_unit_depths() {
    let mut zeroed = Tree::new(Clade::new());
    let mut unit = Tree::new(Clade::new());
    for tree_and_length in [(&mut zeroed, 0.0), (&mut unit, 1.0)] {
        let (tree, length) = tree_and_length;
        let root = tree.root();
        let inner = tree.add_child(root, Clade::new().with_branch_length(length));
        tree.add_child(inner, Clade::named("A").with_branch_length(length));
        tree.add_child(inner, Clade::named("B").with_branch_length(length));
        tree.add_child(root, Clade::named("C").with_branch_length(length));
    }

    assert_eq!(assign_depths(&zeroed), assign_depths(&unit));

    let config = PolarConfig::default();
    let from_zeroed = polar_layout(&zeroed, &config).unwrap();
    let from_unit = polar_layout(&unit, &config).unwrap();
    assert_eq!(from_zeroed.primitives, from_unit.primitives);
    assert_eq!(from_zeroed.extent, from_unit.extent);
}

#[test]
fn wedge_encloses_descendant_leaves() {
    // three leaves spread over arc 20 starting at 10: C@10, B@20, A@30
    let mut tree = Tree::new(Clade::new().with_wedge(phylopolar::WedgeSpec::new()));
    let root = tree.root();
    tree.add_child(root, Clade::named("A"));
    tree.add_child(root, Clade::named("B"));
    tree.add_child(root, Clade::named("C"));

    let config = PolarConfig::new().with_arc(20.0).with_start(10.0);
    let layout = polar_layout(&tree, &config).unwrap();

    let wedge = layout.wedges().next().expect("wedge primitive");
    // span padded outward by (20 / 5) / 2 = 2 on each side
    assert_close(wedge.start_angle, 8.0);
    assert_close(wedge.end_angle, 32.0);
    assert_eq!(wedge.width, None);
    // internal wedge fills out to the tree's padded outer depth
    assert_close(wedge.radius, 1.0 + config.depth_offset);
}

#[test]
fn external_markers_align_on_outer_ring() {
    let mut tree = Tree::new(Clade::new());
    let root = tree.root();
    for (name, length) in [("near", 0.5), ("mid", 1.5), ("far", 3.0)] {
        tree.add_child(
            root,
            Clade::named(name).with_branch_length(length).with_marker(Box::new(|_| {
                phylopolar::layout::MarkerShape {
                    kind: phylopolar::layout::MarkerKind::Circle { radius: 2.0 },
                    styles: Default::default(),
                }
            })),
        );
    }

    let config = PolarConfig::default().with_external_patches(true);
    let layout = polar_layout(&tree, &config).unwrap();

    let radii: Vec<f64> = layout.markers().map(|m| m.position.radius()).collect();
    assert_eq!(radii.len(), 3);
    for r in &radii {
        assert_close(*r, 3.1);
    }
    // external placement widens the canvas by the default ring thickness
    assert_close(layout.extent, 3.1 * 1.1 + 3.1 / 2.0);
}

#[test]
fn primitive_order_follows_children_order() {
    let tree = balanced_four_leaf();
    let layout = polar_layout(&tree, &PolarConfig::default()).unwrap();

    // labels come out in natural leaf order because the walk is pre-order
    let texts: Vec<&str> = layout.labels().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["A", "B", "C", "D"]);
}

#[test]
fn labels_read_upright_around_the_circle() {
    use phylopolar::layout::TextAnchor;

    let mut tree = Tree::new(Clade::new());
    let root = tree.root();
    for name in ["A", "B", "C", "D"] {
        tree.add_child(root, Clade::named(name).with_branch_length(1.0));
    }

    // leaves at 0, 100, 200, 300 degrees
    let config = PolarConfig::new().with_arc(300.0);
    let layout = polar_layout(&tree, &config).unwrap();

    for label in layout.labels() {
        let angle = label.position.y.atan2(label.position.x).to_degrees();
        let angle = if angle < 0.0 { angle + 360.0 } else { angle };
        if angle > 90.0 && angle < 270.0 {
            assert_eq!(label.anchor, TextAnchor::End);
        } else {
            assert_eq!(label.anchor, TextAnchor::Start);
        }
    }
}
