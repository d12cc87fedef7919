use crate::error::Result;
use crate::kdtree::{KdTreeBuilder, Node, Point};
use crate::r#type::IndexableNum;

/// An owned k-d tree.
///
/// Usually this will be created via [`KdTreeBuilder`] or [`KdTree::build`]. An empty input gives
/// a tree without a root.
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<N: IndexableNum> {
    pub(crate) root: Option<Box<Node<N>>>,
    pub(crate) dim: Option<usize>,
    pub(crate) num_items: usize,
}

impl<N: IndexableNum> KdTree<N> {
    /// Build a tree from a collection of points, consuming it.
    ///
    /// ```
    /// use median_kdtree::kdtree::{KdTree, KdTreeIndex};
    ///
    /// let tree = KdTree::<i32>::build([(1, 2), (3, 1), (5, 4), (2, 3)]).unwrap();
    /// assert_eq!(
    ///     tree.render(),
    ///     vec!["[(3, 1)]", "[(2, 3), (5, 4)]", "[(1, 2)]", "[$, $, $, $, $]"]
    /// );
    /// ```
    pub fn build<P: Into<Point<N>>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        let points = points.into_iter();
        let mut builder = KdTreeBuilder::with_capacity(points.size_hint().0);
        for point in points {
            builder.add(point)?;
        }
        Ok(builder.finish())
    }

    /// Returns `true` if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Consume the tree, returning its root node.
    pub fn into_root(self) -> Option<Node<N>> {
        self.root.map(|root| *root)
    }
}
