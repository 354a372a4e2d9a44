//! # Boolean Combinator
//!
//! Constructors combining ordered children.
//!
//! ## Operations
//!
//! - `union(children)` - Combine geometries
//! - `difference(children)` - Subtract later children from the first
//! - `intersection(children)` - Keep only the overlapping region
//!
//! The node methods [`GeometryNode::union`], [`GeometryNode::difference`],
//! [`GeometryNode::intersection`] and [`GeometryNode::subtract`] cover the
//! two-operand cases recipes write most often.

use std::sync::Arc;

use crate::error::{GeometryError, Result};
use crate::geometry::{BooleanOp, GeometryNode};

fn collect<I>(children: I) -> Vec<Arc<GeometryNode>>
where
    I: IntoIterator,
    I::Item: Into<Arc<GeometryNode>>,
{
    children.into_iter().map(Into::into).collect()
}

fn combine(op: BooleanOp, children: Vec<Arc<GeometryNode>>) -> GeometryNode {
    GeometryNode::Boolean { op, children }
}

// =============================================================================
// BOOLEAN OPERATIONS
// =============================================================================

/// Union of `children`.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// union() {
///     cube(10);
///     translate([5, 0, 0]) cube(10);
/// }
/// ```
///
/// Fails with `EmptyOperation` when `children` is empty.
pub fn union<I>(children: I) -> Result<GeometryNode>
where
    I: IntoIterator,
    I::Item: Into<Arc<GeometryNode>>,
{
    let children = collect(children);
    if children.is_empty() {
        return Err(GeometryError::EmptyOperation(BooleanOp::Union));
    }
    Ok(combine(BooleanOp::Union, children))
}

/// First child minus every later child, in listed order.
///
/// Fails with `EmptyOperation` when `children` is empty and with
/// `MissingBase` when there is a base but nothing to subtract.
pub fn difference<I>(children: I) -> Result<GeometryNode>
where
    I: IntoIterator,
    I::Item: Into<Arc<GeometryNode>>,
{
    let children = collect(children);
    match children.len() {
        0 => Err(GeometryError::EmptyOperation(BooleanOp::Difference)),
        1 => Err(GeometryError::MissingBase),
        _ => Ok(combine(BooleanOp::Difference, children)),
    }
}

/// Region shared by all `children`. A single child is its own intersection.
pub fn intersection<I>(children: I) -> Result<GeometryNode>
where
    I: IntoIterator,
    I::Item: Into<Arc<GeometryNode>>,
{
    let children = collect(children);
    if children.is_empty() {
        return Err(GeometryError::EmptyOperation(BooleanOp::Intersection));
    }
    Ok(combine(BooleanOp::Intersection, children))
}

// =============================================================================
// NODE METHODS
// =============================================================================

impl GeometryNode {
    /// `union() { self; other; }`
    pub fn union(self, other: impl Into<Arc<GeometryNode>>) -> GeometryNode {
        combine(BooleanOp::Union, vec![Arc::new(self), other.into()])
    }

    /// `difference() { self; other; }`
    pub fn difference(self, other: impl Into<Arc<GeometryNode>>) -> GeometryNode {
        combine(BooleanOp::Difference, vec![Arc::new(self), other.into()])
    }

    /// `intersection() { self; other; }`
    pub fn intersection(self, other: impl Into<Arc<GeometryNode>>) -> GeometryNode {
        combine(BooleanOp::Intersection, vec![Arc::new(self), other.into()])
    }

    /// Subtract every node in `others` from `self`.
    ///
    /// Returns `self` untouched when `others` is empty, for recipes whose cut
    /// list depends on optional parameters.
    pub fn subtract<I>(self, others: I) -> GeometryNode
    where
        I: IntoIterator,
        I::Item: Into<Arc<GeometryNode>>,
    {
        let others = collect(others);
        if others.is_empty() {
            return self;
        }
        let mut children = Vec::with_capacity(others.len() + 1);
        children.push(Arc::new(self));
        children.extend(others);
        combine(BooleanOp::Difference, children)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cube, sphere};

    fn block() -> GeometryNode {
        cube([10.0, 10.0, 10.0], true).unwrap()
    }

    fn ball() -> GeometryNode {
        sphere(6.0, 32).unwrap()
    }

    fn children_of(node: &GeometryNode) -> (BooleanOp, usize) {
        match node {
            GeometryNode::Boolean { op, children } => (*op, children.len()),
            other => panic!("expected boolean, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_operations_fail() {
        let none: Vec<GeometryNode> = Vec::new();
        assert!(matches!(
            union(none.clone()).unwrap_err(),
            GeometryError::EmptyOperation(BooleanOp::Union)
        ));
        assert!(matches!(
            difference(none.clone()).unwrap_err(),
            GeometryError::EmptyOperation(BooleanOp::Difference)
        ));
        assert!(matches!(
            intersection(none).unwrap_err(),
            GeometryError::EmptyOperation(BooleanOp::Intersection)
        ));
    }

    #[test]
    fn test_single_child_difference_has_no_base() {
        assert!(matches!(
            difference([block()]).unwrap_err(),
            GeometryError::MissingBase
        ));
    }

    #[test]
    fn test_single_child_union_and_intersection_are_legal() {
        assert_eq!(children_of(&union([block()]).unwrap()), (BooleanOp::Union, 1));
        assert_eq!(
            children_of(&intersection([block()]).unwrap()),
            (BooleanOp::Intersection, 1)
        );
    }

    #[test]
    fn test_difference_keeps_base_first() {
        let node = difference([block(), ball()]).unwrap();
        assert_eq!(*node.children()[0], block());
        assert_eq!(*node.children()[1], ball());
    }

    #[test]
    fn test_binary_methods() {
        assert_eq!(children_of(&block().union(ball())), (BooleanOp::Union, 2));
        assert_eq!(
            children_of(&block().difference(ball())),
            (BooleanOp::Difference, 2)
        );
        assert_eq!(
            children_of(&block().intersection(ball())),
            (BooleanOp::Intersection, 2)
        );
    }

    #[test]
    fn test_subtract_nothing_returns_base() {
        let none: Vec<GeometryNode> = Vec::new();
        assert_eq!(block().subtract(none), block());
        assert_eq!(
            children_of(&block().subtract([ball(), ball()])),
            (BooleanOp::Difference, 3)
        );
    }
}
