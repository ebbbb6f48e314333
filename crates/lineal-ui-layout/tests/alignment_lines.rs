//! Alignment-line placement across rows, columns and nested containers.

use lineal_testing::{assert_size, assert_xs, assert_ys, LayoutTree, Leaf, SizeSpec};
use lineal_ui_layout::{
    AlignmentLine, AlignmentLineMerge, Arrangement, ColumnScope, ColumnScopeImpl, Constraints,
    HorizontalAlignment, LayoutError, Placeable, RowColumnMeasurePolicy, RowScope, RowScopeImpl,
    VerticalAlignment,
};

fn row() -> RowColumnMeasurePolicy {
    RowColumnMeasurePolicy::row(Arrangement::Start, VerticalAlignment::Top)
}

fn column() -> RowColumnMeasurePolicy {
    RowColumnMeasurePolicy::column(Arrangement::Start, HorizontalAlignment::Start)
}

#[test]
fn baselines_line_up_and_grow_the_row() {
    let mut tree = LayoutTree::new();
    let a = tree.leaf(Leaf::fixed_with_baseline(10, 20, 15));
    let b = tree.leaf(Leaf::fixed_with_baseline(10, 30, 5));
    tree.modify(a, RowScopeImpl.align_by_baseline())
        .modify(b, RowScopeImpl.align_by_baseline());
    let root = tree.container(row(), &[a, b]);

    tree.layout(root, Constraints::loose(200, 100));

    assert_ys(&tree, &[a, b], &[0, 10], "baseline");
    // 15 above the shared line plus 25 below it.
    assert_size(&tree, root, 20, 40, "row");
}

#[test]
fn text_baseline_meets_a_box_baseline() {
    let mut tree = LayoutTree::new();
    let text = tree.leaf(Leaf::text(3, 5, 12));
    let icon = tree.leaf(Leaf::fixed_with_baseline(10, 10, 4));
    let plain = tree.leaf(Leaf::fixed(10, 10));
    tree.modify(text, RowScopeImpl.align_by_baseline())
        .modify(icon, RowScopeImpl.align_by_baseline());
    let root = tree.container(row(), &[text, icon, plain]);

    tree.layout(root, Constraints::loose(200, 100));

    assert_ys(&tree, &[text, icon, plain], &[0, 5, 0], "first baseline");
    assert_xs(&tree, &[text, icon, plain], &[0, 15, 25], "packed");
}

#[test]
fn child_without_the_line_is_placed_at_the_line() {
    let mut tree = LayoutTree::new();
    let text = tree.leaf(Leaf::text(3, 5, 12));
    let blank = tree.leaf(Leaf::fixed(10, 6));
    tree.modify(text, RowScopeImpl.align_by_baseline())
        .modify(blank, RowScopeImpl.align_by_baseline());
    let root = tree.container(row(), &[text, blank]);

    tree.layout(root, Constraints::loose(200, 100));

    assert_ys(&tree, &[text, blank], &[0, 0], "missing line");
    assert_size(&tree, root, 25, 12, "row");
}

#[test]
fn nested_column_exposes_its_childs_baseline() {
    let mut tree = LayoutTree::new();
    let spacer = tree.leaf(Leaf::fixed(10, 5));
    let label = tree.leaf(Leaf::fixed_with_baseline(10, 20, 15));
    let stack = tree.container(column(), &[spacer, label]);
    let badge = tree.leaf(Leaf::fixed_with_baseline(10, 10, 8));
    tree.modify(stack, RowScopeImpl.align_by_baseline())
        .modify(badge, RowScopeImpl.align_by_baseline());
    let root = tree.container(row(), &[stack, badge]);

    assert_eq!(
        tree.alignment_line(stack, Constraints::loose(100, 100), AlignmentLine::FIRST_BASELINE),
        Some(20)
    );

    tree.layout(root, Constraints::loose(200, 100));

    assert_ys(&tree, &[stack, badge], &[0, 12], "inherited baseline");
    assert_size(&tree, root, 20, 25, "row");
}

#[test]
fn row_merges_first_and_last_baselines_of_its_children() {
    let mut tree = LayoutTree::new();
    let one_line = tree.leaf(Leaf::text(2, 5, 12));
    let two_lines = tree.leaf(Leaf::text(4, 5, 12));
    tree.set_width(two_lines, SizeSpec::Fixed(10));
    let root = tree.container(row(), &[one_line, two_lines]);
    let constraints = Constraints::loose(100, 100);

    assert_eq!(
        tree.alignment_line(root, constraints, AlignmentLine::FIRST_BASELINE),
        Some(9)
    );
    assert_eq!(
        tree.alignment_line(root, constraints, AlignmentLine::LAST_BASELINE),
        Some(21)
    );
}

#[test]
fn align_by_block_lines_up_bottom_edges() {
    let mut tree = LayoutTree::new();
    let short = tree.leaf(Leaf::fixed(10, 20));
    let tall = tree.leaf(Leaf::fixed(10, 35));
    let bottom = || RowScopeImpl.align_by_block(|placeable| Some(placeable.height()));
    tree.modify(short, bottom()).modify(tall, bottom());
    let root = tree.container(row(), &[short, tall]);

    tree.layout(root, Constraints::loose(100, 100));

    assert_ys(&tree, &[short, tall], &[15, 0], "bottoms");
    assert_size(&tree, root, 20, 35, "row");
}

#[test]
fn column_aligns_right_edges_with_a_block() {
    let mut tree = LayoutTree::new();
    let narrow = tree.leaf(Leaf::fixed(10, 10));
    let wide = tree.leaf(Leaf::fixed(30, 10));
    let right = || ColumnScopeImpl.align_by_block(|placeable| Some(placeable.width()));
    tree.modify(narrow, right()).modify(wide, right());
    let root = tree.container(column(), &[narrow, wide]);

    tree.layout(root, Constraints::loose(100, 100));

    assert_xs(&tree, &[narrow, wide], &[20, 0], "right edges");
    assert_size(&tree, root, 30, 20, "column");
}

#[test]
fn lines_across_the_main_axis_are_rejected() {
    let vertical = AlignmentLine::vertical(7, AlignmentLineMerge::Min);

    assert!(matches!(
        RowScopeImpl.try_align_by(vertical),
        Err(LayoutError::MismatchedAlignmentLine { container: "Row", .. })
    ));
    assert!(matches!(
        ColumnScopeImpl.try_align_by(AlignmentLine::FIRST_BASELINE),
        Err(LayoutError::MismatchedAlignmentLine { container: "Column", .. })
    ));
    assert!(ColumnScopeImpl.try_align_by(vertical).is_ok());
}
