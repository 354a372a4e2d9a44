//! Depth-first traversal of geometry trees.

use crate::geometry::GeometryNode;

/// Callbacks for a pre-order walk.
///
/// `enter` runs before a node's children and `leave` after them, so a visitor
/// can open and close nested blocks.
pub trait GeometryVisitor {
    /// Called before `node`'s children. The root is at depth 0.
    fn enter(&mut self, node: &GeometryNode, depth: usize);

    /// Called after `node`'s children. Does nothing by default.
    fn leave(&mut self, _node: &GeometryNode, _depth: usize) {}
}

/// Walk `root` depth-first, pre-order, children in stored order.
pub fn walk<V: GeometryVisitor + ?Sized>(root: &GeometryNode, visitor: &mut V) {
    walk_at(root, 0, visitor);
}

fn walk_at<V: GeometryVisitor + ?Sized>(node: &GeometryNode, depth: usize, visitor: &mut V) {
    visitor.enter(node, depth);
    node.children()
        .iter()
        .for_each(|child| walk_at(child, depth + 1, visitor));
    visitor.leave(node, depth);
}

/// Node counts for a tree.
///
/// A shared subtree is counted once per place it appears, matching what the
/// serializer writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Every node visited.
    pub nodes: usize,
    /// Leaf shapes.
    pub primitives: usize,
    /// Single-child wrappers.
    pub transforms: usize,
    /// Union, difference and intersection nodes.
    pub booleans: usize,
    /// Edges on the longest root-to-leaf path.
    pub depth: usize,
}

impl TreeStats {
    /// Count the nodes of `root`.
    pub fn of(root: &GeometryNode) -> Self {
        let mut stats = Self::default();
        walk(root, &mut stats);
        stats
    }
}

impl GeometryVisitor for TreeStats {
    fn enter(&mut self, node: &GeometryNode, depth: usize) {
        self.nodes += 1;
        self.depth = self.depth.max(depth);
        match node {
            GeometryNode::Primitive(_) => self.primitives += 1,
            GeometryNode::Transform { .. } => self.transforms += 1,
            GeometryNode::Boolean { .. } => self.booleans += 1,
        }
    }
}
