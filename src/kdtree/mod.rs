//! An implementation of an immutable k-d tree built by recursive median splitting.

#![warn(missing_docs)]

mod builder;
mod index;
mod node;
mod point;
mod r#trait;
mod traversal;

pub use builder::{build, KdTreeBuilder};
#[cfg(feature = "rayon")]
pub use builder::PARALLEL_THRESHOLD;
pub use index::KdTree;
pub use node::Node;
pub use point::Point;
pub use r#trait::{KdTreeIndex, Locations};
pub use traversal::{render, Level, LevelOrder, Slot, SENTINEL};
