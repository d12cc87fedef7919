use std::fmt;

use crate::kdtree::Point;
use crate::r#type::IndexableNum;

/// A vertex of a [`KdTree`][crate::kdtree::KdTree].
///
/// Each node exclusively owns its children. Nodes are only created by the builder and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N: IndexableNum> {
    pub(crate) location: Point<N>,
    pub(crate) left: Option<Box<Node<N>>>,
    pub(crate) right: Option<Box<Node<N>>>,
}

impl<N: IndexableNum> Node<N> {
    /// The pivot point stored at this node.
    #[inline]
    pub fn location(&self) -> &Point<N> {
        &self.location
    }

    /// The subtree holding the points at or below this node's coordinate on the split axis.
    #[inline]
    pub fn left(&self) -> Option<&Node<N>> {
        self.left.as_deref()
    }

    /// The subtree holding the points at or above this node's coordinate on the split axis.
    #[inline]
    pub fn right(&self) -> Option<&Node<N>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of points stored in this subtree, this node included.
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, Node::len) + self.right().map_or(0, Node::len)
    }

    /// Always `false`: a node holds at least its own location.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of levels in this subtree. A leaf has height 1.
    pub fn height(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Node::height)
            .max(self.right().map_or(0, Node::height))
    }

    /// Decompose this node into its location and children.
    pub fn into_parts(self) -> (Point<N>, Option<Box<Node<N>>>, Option<Box<Node<N>>>) {
        (self.location, self.left, self.right)
    }
}

struct NestedChild<'a, N: IndexableNum>(Option<&'a Node<N>>);

impl<N: IndexableNum> fmt::Display for NestedChild<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => fmt::Display::fmt(node, f),
            None => f.write_str("None"),
        }
    }
}

/// Nested dump of the subtree as `(location, left, right)`, with `None` for a missing child.
///
/// The dump is always written on a single line, however deep the tree.
impl<N: IndexableNum> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.location,
            NestedChild(self.left()),
            NestedChild(self.right())
        )
    }
}
