use crate::kdtree::{KdTree, LevelOrder, Node, Point};
use crate::r#type::IndexableNum;

/// A trait for traversing and accessing data out of a k-d tree.
pub trait KdTreeIndex<N: IndexableNum>: Sized {
    /// The root of the tree, `None` if it holds no points.
    fn root(&self) -> Option<&Node<N>>;

    /// The number of coordinates of every point in the tree, if known.
    fn dim(&self) -> Option<usize> {
        self.root().map(|root| root.location().dim())
    }

    /// The number of points in the tree.
    fn num_items(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    /// The number of levels in the tree. An empty tree has height 0.
    fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The coordinate index that nodes at `depth` were split on.
    ///
    /// This only depends on the depth: axes cycle through `0..dim`.
    fn axis_at(&self, depth: usize) -> Option<usize> {
        self.dim().map(|dim| depth % dim)
    }

    /// Lazy breadth-first traversal, yielding one [`Level`][crate::kdtree::Level] per output
    /// line.
    fn levels(&self) -> LevelOrder<'_, N> {
        LevelOrder::new(self.root())
    }

    /// Render the level-order dump, one string per line.
    fn render(&self) -> Vec<String> {
        self.levels().map(|level| level.to_string()).collect()
    }

    /// Iterate over all locations in pre-order (node, left subtree, right subtree).
    fn locations(&self) -> Locations<'_, N> {
        Locations {
            stack: self.root().into_iter().collect(),
        }
    }
}

impl<N: IndexableNum> KdTreeIndex<N> for KdTree<N> {
    fn root(&self) -> Option<&Node<N>> {
        self.root.as_deref()
    }

    fn dim(&self) -> Option<usize> {
        self.dim
    }

    fn num_items(&self) -> usize {
        self.num_items
    }
}

impl<N: IndexableNum> KdTreeIndex<N> for Node<N> {
    fn root(&self) -> Option<&Node<N>> {
        Some(self)
    }
}

/// Pre-order iterator over the locations of a tree.
#[derive(Debug, Clone)]
pub struct Locations<'a, N: IndexableNum> {
    stack: Vec<&'a Node<N>>,
}

impl<'a, N: IndexableNum> Iterator for Locations<'a, N> {
    type Item = &'a Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Note: pushed in backwards order to what gets popped
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(&node.location)
    }
}
