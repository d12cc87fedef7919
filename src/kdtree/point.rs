use std::fmt;
use std::ops::Index;

use geo_traits::{CoordTrait, Dimensions};
use tinyvec::TinyVec;

use crate::r#type::IndexableNum;

/// A point with a fixed number of coordinates.
///
/// Up to four coordinates are stored inline; higher dimensions spill to the heap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point<N: IndexableNum> {
    coords: TinyVec<[N; 4]>,
}

impl<N: IndexableNum> Point<N> {
    /// Create a new point from its coordinates, in axis order.
    pub fn new(coords: impl IntoIterator<Item = N>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// Copy the coordinates out of any [`CoordTrait`] implementation.
    pub fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        let dim = coord.dim().size();
        Self::new((0..dim).map(|axis| coord.nth_or_panic(axis)))
    }

    /// The number of coordinates of this point.
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// The coordinate along `axis`, or `None` if the point has fewer dimensions.
    #[inline]
    pub fn get(&self, axis: usize) -> Option<N> {
        self.coords.get(axis).copied()
    }

    /// All coordinates of this point.
    #[inline]
    pub fn coords(&self) -> &[N] {
        &self.coords
    }
}

impl<N: IndexableNum> Index<usize> for Point<N> {
    type Output = N;

    fn index(&self, axis: usize) -> &N {
        &self.coords[axis]
    }
}

impl<N: IndexableNum, const K: usize> From<[N; K]> for Point<N> {
    fn from(coords: [N; K]) -> Self {
        Self::new(coords)
    }
}

impl<N: IndexableNum> From<Vec<N>> for Point<N> {
    fn from(coords: Vec<N>) -> Self {
        Self::new(coords)
    }
}

impl<N: IndexableNum> From<&[N]> for Point<N> {
    fn from(coords: &[N]) -> Self {
        Self::new(coords.iter().copied())
    }
}

impl<N: IndexableNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new([x, y])
    }
}

impl<N: IndexableNum> From<(N, N, N)> for Point<N> {
    fn from((x, y, z): (N, N, N)) -> Self {
        Self::new([x, y, z])
    }
}

/// Formats the point as a tuple: `(3, 1)`, and `(7,)` for a single coordinate.
impl<N: IndexableNum> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        if self.coords.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl<N: IndexableNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> Dimensions {
        match self.coords.len() {
            2 => Dimensions::Xy,
            3 => Dimensions::Xyz,
            4 => Dimensions::Xyzm,
            n => Dimensions::Unknown(n),
        }
    }

    fn x(&self) -> Self::T {
        self.coords[0]
    }

    fn y(&self) -> Self::T {
        self.coords[1]
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        self.coords[n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal external coordinate type.
    struct Xyz {
        x: f64,
        y: f64,
        z: f64,
    }

    impl CoordTrait for Xyz {
        type T = f64;

        fn dim(&self) -> Dimensions {
            Dimensions::Xyz
        }

        fn x(&self) -> f64 {
            self.x
        }

        fn y(&self) -> f64 {
            self.y
        }

        fn nth_or_panic(&self, n: usize) -> f64 {
            match n {
                0 => self.x,
                1 => self.y,
                2 => self.z,
                _ => panic!("Invalid index of coord"),
            }
        }
    }

    #[test]
    fn formats_as_tuple() {
        assert_eq!(Point::from((3, 1)).to_string(), "(3, 1)");
        assert_eq!(Point::from([5, 0, -3]).to_string(), "(5, 0, -3)");
        assert_eq!(Point::from([7u8]).to_string(), "(7,)");
        assert_eq!(Point::<i32>::new([]).to_string(), "()");
        assert_eq!(Point::from((1.5, -2.25)).to_string(), "(1.5, -2.25)");
    }

    #[test]
    fn copies_external_coords() {
        let coord = Xyz {
            x: 1.,
            y: 2.,
            z: 3.,
        };
        let point = Point::from_coord(&coord);
        assert_eq!(point.coords(), &[1., 2., 3.]);
        assert_eq!(point.dim(), 3);
        assert_eq!(point.get(2), Some(3.));
        assert_eq!(point.get(3), None);
    }

    #[test]
    fn implements_coord_trait() {
        let point = Point::from((4i32, 9i32));
        assert_eq!(point.dim(), 2);
        assert!(matches!(CoordTrait::dim(&point), Dimensions::Xy));
        assert_eq!(point.x(), 4);
        assert_eq!(point.y(), 9);
        assert_eq!(point.nth_or_panic(1), 9);

        let wide = Point::new(0..6i64);
        assert!(matches!(CoordTrait::dim(&wide), Dimensions::Unknown(6)));
        assert_eq!(wide[5], 5);
    }
}
