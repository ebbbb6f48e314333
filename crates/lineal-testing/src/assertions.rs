//! Assertion helpers for layout tests
//!
//! Each helper takes a `msg` that prefixes the failure so a broken case in a
//! table-driven test is easy to spot.

use crate::tree::LayoutTree;
use lineal_ui_layout::NodeId;
use lineal_ui_unit::{IntRect, IntSize};

/// Assert that a node ended the last pass with exactly these bounds.
pub fn assert_bounds(tree: &LayoutTree, id: NodeId, expected: IntRect, msg: &str) {
    let actual = tree.bounds(id);
    assert_eq!(
        actual, expected,
        "{}: node {} bounds expected {:?}, got {:?}",
        msg, id, expected, actual
    );
}

pub fn assert_size(tree: &LayoutTree, id: NodeId, width: i32, height: i32, msg: &str) {
    let actual = tree.size(id);
    assert_eq!(
        actual,
        IntSize::new(width, height),
        "{}: node {} size expected {}x{}, got {}x{}",
        msg,
        id,
        width,
        height,
        actual.width,
        actual.height
    );
}

/// Assert the x offsets of `ids` inside their parent.
pub fn assert_xs(tree: &LayoutTree, ids: &[NodeId], expected: &[i32], msg: &str) {
    let actual: Vec<i32> = ids.iter().map(|&id| tree.position(id).x).collect();
    assert_eq!(actual, expected, "{}: x offsets", msg);
}

/// Assert the y offsets of `ids` inside their parent.
pub fn assert_ys(tree: &LayoutTree, ids: &[NodeId], expected: &[i32], msg: &str) {
    let actual: Vec<i32> = ids.iter().map(|&id| tree.position(id).y).collect();
    assert_eq!(actual, expected, "{}: y offsets", msg);
}

/// Assert that `child` lies entirely inside `parent`.
pub fn assert_inside(tree: &LayoutTree, parent: NodeId, child: NodeId, msg: &str) {
    let outer = tree.bounds(parent);
    let inner = tree.bounds(child);
    assert!(
        outer.contains_rect(&inner),
        "{}: node {} at {:?} escapes node {} at {:?}",
        msg,
        child,
        inner,
        parent,
        outer
    );
}

/// Assert that consecutive siblings do not overlap along x.
pub fn assert_no_horizontal_overlap(tree: &LayoutTree, ids: &[NodeId], msg: &str) {
    for pair in ids.windows(2) {
        let (first, second) = (tree.bounds(pair[0]), tree.bounds(pair[1]));
        assert!(
            first.right() <= second.x,
            "{}: node {} {:?} overlaps node {} {:?}",
            msg,
            pair[0],
            first,
            pair[1],
            second
        );
    }
}
