use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A point did not have the dimension of the tree.
    ///
    /// `position` is the insertion index of the offending point.
    #[error("Point {position} has dimension {found}, expected {expected}")]
    InvalidDimension {
        expected: usize,
        found: usize,
        position: usize,
    },

    /// A coordinate cannot be ordered, e.g. a floating point NaN.
    #[error("Coordinate {axis} of point {position} is not comparable")]
    UnorderedCoordinate { position: usize, axis: usize },
}

pub type Result<T> = std::result::Result<T, KdTreeError>;
