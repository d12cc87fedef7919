//! Builds a k-d tree from a small set of 3D points, then prints its nested structure followed
//! by the level-order dump.
//!
//! Run with `RUST_LOG=median_kdtree=trace` to see every split.

use median_kdtree::{KdTree, KdTreeIndex};
use tracing_subscriber::EnvFilter;

fn main() -> median_kdtree::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let points = [
        (5, 0, -3),
        (8, -1, -4),
        (2, -10, 8),
        (-8, 5, 6),
        (-7, 7, -6),
        (5, 7, 15),
        (7, 3, 4),
        (3, 2, 2),
        (-4, -1, 3),
        (9, 1, -4),
        (-1, 5, 7),
        (0, 7, 0),
        (0, 5, 2),
        (2, 4, -1),
        (4, 7, 4),
        (9, -8, 5),
        (10, -3, -7),
    ];

    let tree = KdTree::<i32>::build(points)?;

    match tree.root() {
        Some(root) => println!("{}", root),
        None => println!("None"),
    }
    for level in tree.levels() {
        println!("{}", level);
    }

    Ok(())
}
