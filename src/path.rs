use std::collections::HashMap;
use std::hash::Hash;

/// A search node tagged with the number of steps taken to reach it.
///
/// The layer is only tracked while a depth ceiling is in force. Otherwise
/// it is always zero and every node has a single label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Label<T> {
    pub(crate) node: T,
    pub(crate) layer: usize,
}

impl<T> Label<T> {
    pub(crate) fn new(node: T, layer: usize) -> Self {
        Self { node, layer }
    }

    pub(crate) fn layered(node: T, depth: usize, track_depth: bool) -> Self {
        Self::new(node, if track_depth { depth } else { 0 })
    }
}

/// Walks a predecessor map backwards from a node until `start` is reached
/// or a node has no predecessor.
pub struct PredecessorWalk<'a, K> {
    predecessors: &'a HashMap<K, K>,
    start: &'a K,
    current: Option<K>,
}

impl<'a, K: Clone + Eq + Hash> PredecessorWalk<'a, K> {
    pub fn new(predecessors: &'a HashMap<K, K>, start: &'a K, end: K) -> Self {
        Self {
            predecessors,
            start,
            current: Some(end),
        }
    }
}

impl<'a, K: Clone + Eq + Hash> Iterator for PredecessorWalk<'a, K> {
    type Item = K;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if &current != self.start {
            self.current = self.predecessors.get(&current).cloned();
        }
        Some(current)
    }
}

pub(crate) fn make_path<T>(
    predecessors: &HashMap<Label<T>, Label<T>>,
    start: &Label<T>,
    end: Label<T>,
    path: &mut Vec<T>,
) where
    T: Clone + Eq + Hash,
{
    path.clear();
    path.extend(PredecessorWalk::new(predecessors, start, end).map(|label| label.node));
    path.reverse();
}
