//! Utilities to walk the KdTree level by level.

use std::collections::VecDeque;
use std::fmt;

use crate::kdtree::{Node, Point};
use crate::r#type::IndexableNum;

/// Marker printed in place of a missing node.
pub const SENTINEL: &str = "$";

/// One position of a rendered level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a, N: IndexableNum> {
    /// A real node, represented by its location
    Occupied(&'a Point<N>),
    /// A missing child
    Vacant,
}

impl<'a, N: IndexableNum> Slot<'a, N> {
    /// The location held by this slot, if any.
    pub fn location(&self) -> Option<&'a Point<N>> {
        match self {
            Slot::Occupied(point) => Some(point),
            Slot::Vacant => None,
        }
    }
}

impl<N: IndexableNum> fmt::Display for Slot<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Occupied(point) => fmt::Display::fmt(point, f),
            Slot::Vacant => f.write_str(SENTINEL),
        }
    }
}

/// One line of the level-order dump.
#[derive(Debug, Clone, PartialEq)]
pub struct Level<'a, N: IndexableNum> {
    slots: Vec<Slot<'a, N>>,

    /// Set on the only line of a tree without a root, which prints as a bare sentinel
    absent: bool,
}

impl<'a, N: IndexableNum> Level<'a, N> {
    /// The slots of this line, in queue order.
    pub fn slots(&self) -> &[Slot<'a, N>] {
        &self.slots
    }

    /// The locations of the real nodes on this line.
    pub fn locations(&self) -> impl Iterator<Item = &'a Point<N>> + '_ {
        self.slots.iter().filter_map(Slot::location)
    }

    /// Returns `true` if every slot of this line is a sentinel.
    pub fn is_padding(&self) -> bool {
        self.slots.iter().all(|slot| matches!(slot, Slot::Vacant))
    }

    /// The number of slots, sentinels included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if this is the line standing for a tree without a root.
    pub fn is_absent(&self) -> bool {
        self.absent
    }

    /// Returns `true` if this line has no slot at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Formats the line as `[(2, 3), (5, 4)]`, with `$` for missing nodes. The line of a tree
/// without a root is the bare `$`.
impl<N: IndexableNum> fmt::Display for Level<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absent {
            return f.write_str(SENTINEL);
        }
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", slot)?;
        }
        f.write_str("]")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No tree at all: a single sentinel line is left to emit.
    Absent,
    Walking,
    Done,
}

/// Breadth-first traversal producing one [`Level`] per line.
///
/// A line ends as soon as the last real node expected on it has been dequeued. Missing children
/// queued after that node therefore open the next line, and whatever is left in the queue once no
/// real node remains is emitted as a final line of sentinels.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, N: IndexableNum> {
    queue: VecDeque<Option<&'a Node<N>>>,

    /// Real nodes still to dequeue for the current line
    count: usize,

    state: State,
}

impl<'a, N: IndexableNum> LevelOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a Node<N>>) -> Self {
        match root {
            Some(root) => Self {
                queue: VecDeque::from([Some(root)]),
                count: 1,
                state: State::Walking,
            },
            None => Self {
                queue: VecDeque::new(),
                count: 0,
                state: State::Absent,
            },
        }
    }
}

impl<'a, N: IndexableNum> Iterator for LevelOrder<'a, N> {
    type Item = Level<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => None,
            State::Absent => {
                self.state = State::Done;
                Some(Level {
                    slots: vec![Slot::Vacant],
                    absent: true,
                })
            }
            State::Walking if self.count == 0 => {
                self.state = State::Done;
                let remaining = self.queue.len();
                self.queue.clear();
                Some(Level {
                    slots: vec![Slot::Vacant; remaining],
                    absent: false,
                })
            }
            State::Walking => {
                let mut slots = Vec::with_capacity(self.count);
                let mut next_count = 0;
                while self.count > 0 {
                    match self.queue.pop_front() {
                        Some(Some(node)) => {
                            slots.push(Slot::Occupied(&node.location));
                            self.count -= 1;
                            for child in [node.left(), node.right()] {
                                if child.is_some() {
                                    next_count += 1;
                                }
                                self.queue.push_back(child);
                            }
                        }
                        Some(None) => slots.push(Slot::Vacant),
                        // count never exceeds the real nodes still queued
                        None => break,
                    }
                }
                self.count = next_count;
                Some(Level {
                    slots,
                    absent: false,
                })
            }
        }
    }
}

/// Render the level-order dump of `root`, one string per line.
///
/// An absent root renders as the single line `$`.
pub fn render<N: IndexableNum>(root: Option<&Node<N>>) -> Vec<String> {
    LevelOrder::new(root)
        .map(|level| level.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdtree::{KdTree, KdTreeIndex};

    #[test]
    fn absent_root_renders_single_sentinel() {
        assert_eq!(render::<i32>(None), vec!["$"]);

        let tree = KdTree::<f64>::build(Vec::<(f64, f64)>::new()).unwrap();
        let levels: Vec<_> = tree.levels().collect();
        assert_eq!(levels.len(), 1);
        assert!(levels[0].is_padding());
        assert_eq!(levels[0].len(), 1);
        assert!(levels[0].is_absent());
        assert_eq!(levels[0].to_string(), SENTINEL);
    }

    #[test]
    fn single_node() {
        let tree = KdTree::<i32>::build([(7, 7)]).unwrap();
        assert_eq!(tree.render(), vec!["[(7, 7)]", "[$, $]"]);
        // padding after a real tree keeps its brackets
        assert!(tree.levels().all(|level| !level.is_absent()));
    }

    #[test]
    fn vacant_slots_trail_into_next_line() {
        // root (3, 1); (2, 3) has only a left child, (5, 4) is a leaf
        let tree = KdTree::<i32>::build([(1, 2), (3, 1), (5, 4), (2, 3)]).unwrap();
        let levels: Vec<_> = tree.levels().collect();
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[2].to_string(), "[(1, 2)]");
        assert_eq!(levels[3].len(), 5);
        assert!(levels[3].is_padding());
    }

    #[test]
    fn vacant_slots_lead_a_line() {
        // one axis: 3 at the root, then 2 and 5, each with only a left child.
        // The missing right child of (2,) precedes (4,) on the third line.
        let tree = KdTree::<i32>::build([[1], [2], [3], [4], [5]]).unwrap();
        assert_eq!(
            tree.render(),
            vec!["[(3,)]", "[(2,), (5,)]", "[(1,), $, (4,)]", "[$, $, $, $, $]"]
        );
    }

    #[test]
    fn level_locations_skip_sentinels() {
        let tree = KdTree::<i32>::build([[1], [2], [3], [4], [5]]).unwrap();
        let third = tree.levels().nth(2).unwrap();
        let coords: Vec<_> = third.locations().map(|p| p[0]).collect();
        assert_eq!(coords, vec![1, 4]);
        assert_eq!(third.slots()[1], Slot::Vacant);
        assert!(!third.is_padding());
    }

    #[test]
    fn iterator_is_fused_after_padding_line() {
        let tree = KdTree::<i32>::build([(1, 1)]).unwrap();
        let mut levels = tree.levels();
        assert!(levels.next().is_some());
        assert!(levels.next().is_some());
        assert!(levels.next().is_none());
        assert!(levels.next().is_none());
    }
}
