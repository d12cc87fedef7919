#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;

pub use error::{KdTreeError, Result};
pub use kdtree::{KdTree, KdTreeBuilder, KdTreeIndex, Node, Point};
pub use r#type::IndexableNum;
