use std::cmp::Ordering;

use geo_traits::CoordTrait;
use tracing::{debug, trace};

use crate::error::{KdTreeError, Result};
use crate::kdtree::{KdTree, KdTreeIndex, Node, Point};
use crate::r#type::IndexableNum;

/// Subtrees holding at least this many points are built on separate rayon tasks.
#[cfg(feature = "rayon")]
pub const PARALLEL_THRESHOLD: usize = 1 << 14;

/// A builder to create a [`KdTree`].
///
/// ```
/// use median_kdtree::kdtree::{KdTreeBuilder, KdTreeIndex};
///
/// let mut builder = KdTreeBuilder::<i32>::new();
/// builder.add((1, 2)).unwrap();
/// builder.add((3, 1)).unwrap();
/// builder.add((5, 4)).unwrap();
/// builder.add((2, 3)).unwrap();
/// let tree = builder.finish();
/// assert_eq!(tree.root().unwrap().location().coords(), &[3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct KdTreeBuilder<N: IndexableNum> {
    points: Vec<Point<N>>,

    /// Fixed up front, or inferred from the first point.
    dim: Option<usize>,
}

impl<N: IndexableNum> Default for KdTreeBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: IndexableNum> KdTreeBuilder<N> {
    /// Create a new builder that takes the dimension of the first point added.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new builder with room for `num_items` points.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
            dim: None,
        }
    }

    /// Create a new builder that only accepts points with `dim` coordinates.
    pub fn new_with_dimension(dim: usize) -> Self {
        assert!(dim > 0, "A k-d tree needs at least one dimension.");
        Self {
            points: Vec::new(),
            dim: Some(dim),
        }
    }

    /// The dimension points must have, if already known.
    pub fn dim(&self) -> Option<usize> {
        self.dim
    }

    /// The number of points added so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the tree, returning its insertion index.
    ///
    /// Fails if the point's dimension differs from the tree's, or if one of its coordinates
    /// cannot be ordered.
    pub fn add(&mut self, point: impl Into<Point<N>>) -> Result<usize> {
        let point = point.into();
        let position = self.points.len();
        let dim = validate_point(&point, self.dim, position)?;
        self.dim = Some(dim);
        self.points.push(point);
        Ok(position)
    }

    /// Add a point from any [`CoordTrait`] implementation.
    pub fn add_coord(&mut self, coord: &impl CoordTrait<T = N>) -> Result<usize> {
        self.add(Point::from_coord(coord))
    }

    /// Consume this builder, performing the median splits and generating the tree.
    pub fn finish(self) -> KdTree<N> {
        let num_items = self.points.len();
        let root = match self.dim {
            Some(dim) => build_subtree(self.points, 0, dim),
            None => None,
        };
        let tree = KdTree {
            root,
            dim: self.dim,
            num_items,
        };
        debug!(
            num_items,
            dim = ?tree.dim(),
            height = tree.height(),
            coord_type = N::TYPE_NAME,
            "finished k-d tree"
        );
        tree
    }
}

/// Build a tree from `points`, returning its root or `None` for an empty input.
///
/// The input is consumed; the points end up as the locations of the returned nodes.
pub fn build<N: IndexableNum>(points: Vec<Point<N>>) -> Result<Option<Node<N>>> {
    let mut builder = KdTreeBuilder::with_capacity(points.len());
    for point in points {
        builder.add(point)?;
    }
    Ok(builder.finish().into_root())
}

/// Check `point` against the tree dimension and return the dimension to use from now on.
fn validate_point<N: IndexableNum>(
    point: &Point<N>,
    expected: Option<usize>,
    position: usize,
) -> Result<usize> {
    let found = point.dim();
    let expected = expected.unwrap_or(found);
    if found == 0 || found != expected {
        debug!(position, expected, found, "rejected point");
        return Err(KdTreeError::InvalidDimension {
            expected: expected.max(1),
            found,
            position,
        });
    }

    // NaN is the only value not comparable with itself
    if let Some(axis) = point
        .coords()
        .iter()
        .position(|c| c.partial_cmp(c).is_none())
    {
        debug!(position, axis, "rejected unordered coordinate");
        return Err(KdTreeError::UnorderedCoordinate { position, axis });
    }

    Ok(expected)
}

#[inline]
fn compare_on_axis<N: IndexableNum>(a: &Point<N>, b: &Point<N>, axis: usize) -> Ordering {
    a[axis].partial_cmp(&b[axis]).unwrap_or(Ordering::Equal)
}

/// Recursively split `points` at the median of axis `depth % dim`.
///
/// The sort is stable, so among points with equal coordinates the one positioned first in the
/// input goes first. Left gets `len / 2` points, right the remaining `len - len / 2 - 1`.
pub(crate) fn build_subtree<N: IndexableNum>(
    mut points: Vec<Point<N>>,
    depth: usize,
    dim: usize,
) -> Option<Box<Node<N>>> {
    if points.is_empty() {
        return None;
    }

    let axis = depth % dim;
    points.sort_by(|a, b| compare_on_axis(a, b, axis));

    let median = points.len() >> 1;
    trace!(depth, axis, len = points.len(), median, "split");

    let right = points.split_off(median + 1);
    let location = points.pop()?;
    let (left, right) = build_children(points, right, depth + 1, dim);

    Some(Box::new(Node {
        location,
        left,
        right,
    }))
}

type Children<N> = (Option<Box<Node<N>>>, Option<Box<Node<N>>>);

#[cfg(not(feature = "rayon"))]
#[inline]
fn build_children<N: IndexableNum>(
    left: Vec<Point<N>>,
    right: Vec<Point<N>>,
    depth: usize,
    dim: usize,
) -> Children<N> {
    (
        build_subtree(left, depth, dim),
        build_subtree(right, depth, dim),
    )
}

#[cfg(feature = "rayon")]
fn build_children<N: IndexableNum>(
    left: Vec<Point<N>>,
    right: Vec<Point<N>>,
    depth: usize,
    dim: usize,
) -> Children<N> {
    if left.len() + right.len() >= PARALLEL_THRESHOLD {
        rayon::join(
            || build_subtree(left, depth, dim),
            || build_subtree(right, depth, dim),
        )
    } else {
        (
            build_subtree(left, depth, dim),
            build_subtree(right, depth, dim),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_dimension_from_first_point() {
        let mut builder = KdTreeBuilder::<i32>::new();
        assert_eq!(builder.dim(), None);
        assert_eq!(builder.add([1, 2, 3]), Ok(0));
        assert_eq!(builder.dim(), Some(3));
        assert_eq!(builder.add([4, 5, 6]), Ok(1));
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn rejects_mixed_dimensions() {
        let mut builder = KdTreeBuilder::<i32>::new();
        builder.add((1, 2)).unwrap();
        let err = builder.add([1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            KdTreeError::InvalidDimension {
                expected: 2,
                found: 3,
                position: 1
            }
        );
        // the rejected point is not kept
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn rejects_points_against_fixed_dimension() {
        let mut builder = KdTreeBuilder::<f32>::new_with_dimension(3);
        let err = builder.add((1., 2.)).unwrap_err();
        assert!(matches!(
            err,
            KdTreeError::InvalidDimension {
                expected: 3,
                found: 2,
                position: 0
            }
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn rejects_zero_dimensional_points() {
        let mut builder = KdTreeBuilder::<u8>::new();
        let err = builder.add(Vec::<u8>::new()).unwrap_err();
        assert!(matches!(
            err,
            KdTreeError::InvalidDimension { found: 0, .. }
        ));
        assert_eq!(builder.dim(), None);
    }

    #[test]
    fn rejects_nan() {
        let mut builder = KdTreeBuilder::<f64>::new();
        builder.add((0., 0.)).unwrap();
        let err = builder.add((1., f64::NAN)).unwrap_err();
        assert_eq!(
            err,
            KdTreeError::UnorderedCoordinate {
                position: 1,
                axis: 1
            }
        );
        assert_eq!(
            err.to_string(),
            "Coordinate 1 of point 1 is not comparable"
        );
    }

    #[test]
    fn adds_from_coord_trait() {
        let mut builder = KdTreeBuilder::<i32>::new();
        let coord = Point::from((2, 5));
        assert_eq!(builder.add_coord(&coord), Ok(0));
        assert_eq!(builder.dim(), Some(2));

        let tree = builder.finish();
        assert_eq!(tree.root().unwrap().location(), &coord);
    }

    #[test]
    #[should_panic]
    fn zero_dimension_builder_panics() {
        KdTreeBuilder::<i32>::new_with_dimension(0);
    }

    #[test]
    fn build_propagates_errors() {
        let points = vec![Point::from((1, 2)), Point::from([1, 2, 3])];
        assert!(build(points).is_err());
    }

    #[test]
    fn empty_builder_finishes_without_root() {
        let tree = KdTreeBuilder::<i32>::new().finish();
        assert!(tree.root().is_none());
        assert_eq!(tree.dim(), None);

        let tree = KdTreeBuilder::<i32>::new_with_dimension(2).finish();
        assert!(tree.root().is_none());
        assert_eq!(tree.dim(), Some(2));
    }

    #[test]
    fn median_goes_to_upper_half() {
        // even length: index len / 2 is the upper of the two middle elements
        let root = build_subtree(
            vec![Point::from([1]), Point::from([2]), Point::from([3]), Point::from([4])],
            0,
            1,
        )
        .unwrap();
        assert_eq!(root.location().coords(), &[3]);
        assert_eq!(root.left().unwrap().len(), 2);
        assert_eq!(root.right().unwrap().len(), 1);
    }
}
