//! Arena-backed layout tree that drives the row/column policies in tests
//!
//! Nodes live in a shared arena and are addressed by [`NodeId`]. A layout
//! pass measures the root under the given constraints and places it at the
//! origin, after which sizes, positions and per-node measure counts can be
//! queried.
//!
//! ```
//! use lineal_testing::{Leaf, LayoutTree};
//! use lineal_ui_layout::{Arrangement, Constraints, RowColumnMeasurePolicy, VerticalAlignment};
//!
//! let mut tree = LayoutTree::new();
//! let a = tree.leaf(Leaf::fixed(20, 10));
//! let b = tree.leaf(Leaf::fixed(30, 10));
//! let row = tree.container(
//!     RowColumnMeasurePolicy::row(Arrangement::End, VerticalAlignment::Top),
//!     &[a, b],
//! );
//!
//! tree.layout(row, Constraints::tight(100, 10));
//! assert_eq!(tree.bounds(b).x, 70);
//! ```

use crate::leaf::Leaf;
use lineal_ui_layout::{
    AlignmentLine, Constraints, IntrinsicCache, IntrinsicQuery, IntrinsicSize, LayoutContext,
    Measurable, MeasurePolicy, MeasureResult, NodeId, ParentDataModifier, Placeable,
    RowColumnMeasurePolicy, RowColumnParentData,
};
use lineal_ui_unit::{IntOffset, IntRect, IntSize};
use std::cell::RefCell;
use std::rc::Rc;

/// Size a node requests on one axis, applied before its content measures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeSpec {
    /// An exact size, coerced into the incoming constraints.
    Fixed(i32),
    /// The content's min or max intrinsic size on that axis.
    Intrinsic(IntrinsicSize),
}

#[derive(Clone, Debug)]
enum NodeKind {
    Leaf(Leaf),
    Container(RowColumnMeasurePolicy),
}

struct TreeNode {
    kind: NodeKind,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    modifiers: Vec<ParentDataModifier>,
    width: Option<SizeSpec>,
    height: Option<SizeSpec>,
    cache: Rc<IntrinsicCache>,
    measure_count: usize,
    size: Option<IntSize>,
    position: Option<IntOffset>,
}

#[derive(Default)]
struct TreeArena {
    nodes: Vec<TreeNode>,
    placement_log: Vec<(NodeId, IntOffset)>,
}

type SharedArena = Rc<RefCell<TreeArena>>;

/// A tree of leaves and row/column containers.
pub struct LayoutTree {
    arena: SharedArena,
    context: LayoutContext,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::with_context(LayoutContext::default())
    }

    /// Creates a tree measured with the given density and layout direction.
    pub fn with_context(context: LayoutContext) -> Self {
        Self {
            arena: Rc::default(),
            context,
        }
    }

    pub fn context(&self) -> LayoutContext {
        self.context
    }

    pub fn leaf(&mut self, leaf: Leaf) -> NodeId {
        self.push(NodeKind::Leaf(leaf), Vec::new())
    }

    /// Adds a row or column owning `children`. Each child may have only one parent.
    pub fn container(&mut self, policy: RowColumnMeasurePolicy, children: &[NodeId]) -> NodeId {
        let id = self.push(NodeKind::Container(policy), children.to_vec());
        let mut arena = self.arena.borrow_mut();
        for &child in children {
            let node = &mut arena.nodes[child];
            assert!(node.parent.is_none(), "node {child} already has a parent");
            node.parent = Some(id);
        }
        id
    }

    fn push(&mut self, kind: NodeKind, children: Vec<NodeId>) -> NodeId {
        let mut arena = self.arena.borrow_mut();
        let id = arena.nodes.len();
        arena.nodes.push(TreeNode {
            kind,
            children,
            parent: None,
            modifiers: Vec::new(),
            width: None,
            height: None,
            cache: Rc::default(),
            measure_count: 0,
            size: None,
            position: None,
        });
        id
    }

    /// Appends a parent-data modifier; later modifiers override earlier ones.
    pub fn modify(&mut self, id: NodeId, modifier: ParentDataModifier) -> &mut Self {
        self.arena.borrow_mut().nodes[id].modifiers.push(modifier);
        self
    }

    pub fn set_width(&mut self, id: NodeId, width: SizeSpec) -> &mut Self {
        self.arena.borrow_mut().nodes[id].width = Some(width);
        self
    }

    pub fn set_height(&mut self, id: NodeId, height: SizeSpec) -> &mut Self {
        self.arena.borrow_mut().nodes[id].height = Some(height);
        self
    }

    /// Runs one measure and place pass from `root`, returning the root size.
    ///
    /// Intrinsic caches, measure counts and the placement log are reset first.
    pub fn layout(&self, root: NodeId, constraints: Constraints) -> IntSize {
        {
            let mut arena = self.arena.borrow_mut();
            arena.placement_log.clear();
            for node in &mut arena.nodes {
                node.cache.invalidate();
                node.measure_count = 0;
                node.size = None;
                node.position = None;
            }
        }

        let placeable = self.measurable(root).measure(constraints);
        placeable.place(0, 0);
        let size = IntSize::new(placeable.width(), placeable.height());
        log::trace!("layout pass from node {root} under {constraints:?}: {size:?}");
        size
    }

    /// Asks `id` an intrinsic question outside a layout pass.
    pub fn intrinsic(&self, id: NodeId, query: IntrinsicQuery, extent: i32) -> i32 {
        query.query(&self.measurable(id), extent)
    }

    /// Measures `id` alone and returns the position of `line` in it.
    pub fn alignment_line(&self, id: NodeId, constraints: Constraints, line: AlignmentLine) -> Option<i32> {
        self.measurable(id).measure(constraints).alignment_line(line)
    }

    fn measurable(&self, id: NodeId) -> TreeMeasurable {
        TreeMeasurable {
            arena: Rc::clone(&self.arena),
            id,
            context: self.context,
        }
    }

    /// Size from the last pass. Panics if the node was not measured.
    pub fn size(&self, id: NodeId) -> IntSize {
        self.arena.borrow().nodes[id]
            .size
            .unwrap_or_else(|| panic!("node {id} was not measured"))
    }

    /// Offset inside the parent from the last pass. Panics if the node was not placed.
    pub fn position(&self, id: NodeId) -> IntOffset {
        self.arena.borrow().nodes[id]
            .position
            .unwrap_or_else(|| panic!("node {id} was not placed"))
    }

    /// Bounds relative to the root of the last pass.
    pub fn bounds(&self, id: NodeId) -> IntRect {
        let mut origin = self.position(id);
        let mut current = self.arena.borrow().nodes[id].parent;
        while let Some(parent) = current {
            let arena = self.arena.borrow();
            if let Some(offset) = arena.nodes[parent].position {
                origin = origin.translate(offset.x, offset.y);
            }
            current = arena.nodes[parent].parent;
        }
        IntRect::from_origin_size(origin, self.size(id))
    }

    pub fn measure_count(&self, id: NodeId) -> usize {
        self.arena.borrow().nodes[id].measure_count
    }

    /// Intrinsic lookups answered from `id`'s cache since the last pass began.
    pub fn cache_hits(&self, id: NodeId) -> usize {
        self.arena.borrow().nodes[id].cache.hits()
    }

    /// Every `place` call of the last pass, in call order.
    pub fn placement_log(&self) -> Vec<(NodeId, IntOffset)> {
        self.arena.borrow().placement_log.clone()
    }
}

/// [`Measurable`] view of one tree node.
struct TreeMeasurable {
    arena: SharedArena,
    id: NodeId,
    context: LayoutContext,
}

impl TreeMeasurable {
    fn children(&self, ids: &[NodeId]) -> Vec<Box<dyn Measurable>> {
        ids.iter()
            .map(|&id| {
                Box::new(TreeMeasurable {
                    arena: Rc::clone(&self.arena),
                    id,
                    context: self.context,
                }) as Box<dyn Measurable>
            })
            .collect()
    }

    fn snapshot(&self) -> (NodeKind, Vec<NodeId>, Option<SizeSpec>, Option<SizeSpec>) {
        let arena = self.arena.borrow();
        let node = &arena.nodes[self.id];
        (node.kind.clone(), node.children.clone(), node.width, node.height)
    }

    // Intrinsics of the node's content, ignoring its own size requests.
    fn content_intrinsic(&self, query: IntrinsicQuery, extent: i32) -> i32 {
        let (kind, children, _, _) = self.snapshot();
        match kind {
            NodeKind::Leaf(leaf) => leaf.intrinsic(query, extent),
            NodeKind::Container(policy) => {
                let children = self.children(&children);
                let scope = &self.context;
                match query {
                    IntrinsicQuery::MinWidth => policy.min_intrinsic_width(scope, &children, extent),
                    IntrinsicQuery::MaxWidth => policy.max_intrinsic_width(scope, &children, extent),
                    IntrinsicQuery::MinHeight => policy.min_intrinsic_height(scope, &children, extent),
                    IntrinsicQuery::MaxHeight => policy.max_intrinsic_height(scope, &children, extent),
                }
            }
        }
    }

    fn intrinsic(&self, query: IntrinsicQuery, extent: i32) -> i32 {
        let cache = Rc::clone(&self.arena.borrow().nodes[self.id].cache);
        cache.get_or_compute(query, extent, || {
            let (_, _, width, height) = self.snapshot();
            let is_width = matches!(query, IntrinsicQuery::MinWidth | IntrinsicQuery::MaxWidth);
            let spec = if is_width { width } else { height };
            match spec {
                Some(SizeSpec::Fixed(size)) => size,
                Some(SizeSpec::Intrinsic(IntrinsicSize::Min)) => {
                    let min = if is_width {
                        IntrinsicQuery::MinWidth
                    } else {
                        IntrinsicQuery::MinHeight
                    };
                    self.content_intrinsic(min, extent)
                }
                Some(SizeSpec::Intrinsic(IntrinsicSize::Max)) => {
                    let max = if is_width {
                        IntrinsicQuery::MaxWidth
                    } else {
                        IntrinsicQuery::MaxHeight
                    };
                    self.content_intrinsic(max, extent)
                }
                None => {
                    // A fixed size on the other axis is the extent the content sees.
                    let other = if is_width { height } else { width };
                    match other {
                        Some(SizeSpec::Fixed(size)) => self.content_intrinsic(query, size),
                        _ => self.content_intrinsic(query, extent),
                    }
                }
            }
        })
    }

    fn resolve(&self, spec: Option<SizeSpec>, query_min: IntrinsicQuery, query_max: IntrinsicQuery, extent: i32) -> Option<i32> {
        match spec? {
            SizeSpec::Fixed(size) => Some(size),
            SizeSpec::Intrinsic(IntrinsicSize::Min) => Some(self.content_intrinsic(query_min, extent)),
            SizeSpec::Intrinsic(IntrinsicSize::Max) => Some(self.content_intrinsic(query_max, extent)),
        }
    }

    fn content_constraints(&self, constraints: Constraints, width: Option<SizeSpec>, height: Option<SizeSpec>) -> Constraints {
        let mut constraints = constraints;
        if let Some(width) = self.resolve(
            width,
            IntrinsicQuery::MinWidth,
            IntrinsicQuery::MaxWidth,
            constraints.max_height(),
        ) {
            constraints = constraints.tighten_width(constraints.constrain_width(width));
        }
        if let Some(height) = self.resolve(
            height,
            IntrinsicQuery::MinHeight,
            IntrinsicQuery::MaxHeight,
            constraints.max_width(),
        ) {
            constraints = constraints.tighten_height(constraints.constrain_height(height));
        }
        constraints
    }
}

impl Measurable for TreeMeasurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let (kind, children, width, height) = self.snapshot();
        let constraints = self.content_constraints(constraints, width, height);

        let (size, content) = match kind {
            NodeKind::Leaf(leaf) => (leaf.measure(constraints), PlacedContent::Leaf(leaf)),
            NodeKind::Container(policy) => {
                let children = self.children(&children);
                let result = policy.measure(&self.context, &children, constraints);
                (result.size, PlacedContent::Container(result))
            }
        };

        {
            let mut arena = self.arena.borrow_mut();
            let node = &mut arena.nodes[self.id];
            node.measure_count += 1;
            node.size = Some(size);
        }

        Box::new(TreePlaceable {
            arena: Rc::clone(&self.arena),
            id: self.id,
            size,
            content,
        })
    }

    fn min_intrinsic_width(&self, height: i32) -> i32 {
        self.intrinsic(IntrinsicQuery::MinWidth, height)
    }

    fn max_intrinsic_width(&self, height: i32) -> i32 {
        self.intrinsic(IntrinsicQuery::MaxWidth, height)
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        self.intrinsic(IntrinsicQuery::MinHeight, width)
    }

    fn max_intrinsic_height(&self, width: i32) -> i32 {
        self.intrinsic(IntrinsicQuery::MaxHeight, width)
    }

    fn row_column_parent_data(&self) -> Option<RowColumnParentData> {
        let arena = self.arena.borrow();
        let modifiers = &arena.nodes[self.id].modifiers;
        if modifiers.is_empty() {
            None
        } else {
            Some(RowColumnParentData::from_modifiers(modifiers))
        }
    }
}

enum PlacedContent {
    Leaf(Leaf),
    Container(MeasureResult),
}

struct TreePlaceable {
    arena: SharedArena,
    id: NodeId,
    size: IntSize,
    content: PlacedContent,
}

impl Placeable for TreePlaceable {
    fn place(&self, x: i32, y: i32) {
        {
            let mut arena = self.arena.borrow_mut();
            let offset = IntOffset::new(x, y);
            arena.nodes[self.id].position = Some(offset);
            arena.placement_log.push((self.id, offset));
        }
        if let PlacedContent::Container(result) = &self.content {
            result.place_children();
        }
    }

    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }

    fn node_id(&self) -> NodeId {
        self.id
    }

    fn alignment_line(&self, line: AlignmentLine) -> Option<i32> {
        match &self.content {
            PlacedContent::Leaf(leaf) => leaf.alignment_line(line, self.size),
            PlacedContent::Container(result) => result.alignment_line(line),
        }
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
