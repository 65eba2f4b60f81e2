use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::ops::Add;
use log::{debug, trace};
use num_traits::Zero;
use crate::config::*;
use crate::error::*;
use crate::metadata::*;
use crate::path::{self, Label};
use crate::space::SearchSpace;

/// A frontier entry. The queue pops the smallest `(g + h, g, h)` first.
///
/// Entries are never updated once queued: a cheaper route to the same
/// payload pushes a fresh entry and the old one is skipped when popped.
#[derive(Debug, Clone)]
pub struct SearchItem<T, C> {
    payload: T,
    g: C,
    h: C,
    depth: usize,
}

impl<T, C: Copy + Add<Output = C>> SearchItem<T, C> {
    pub fn new(payload: T, g: C, h: C, depth: usize) -> Self {
        Self { payload, g, h, depth }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn g(&self) -> C {
        self.g
    }

    pub fn h(&self) -> C {
        self.h
    }

    pub fn f(&self) -> C {
        self.g + self.h
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<T, C: Copy + Add<Output = C> + PartialOrd> SearchItem<T, C> {
    fn priority_cmp(&self, other: &Self) -> Ordering {
        let by = |a: C, b: C| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        by(self.f(), other.f())
            .then_with(|| by(self.g, other.g))
            .then_with(|| by(self.h, other.h))
    }
}

impl<T, C: Copy + Add<Output = C> + PartialOrd> PartialEq for SearchItem<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority_cmp(other) == Ordering::Equal
    }
}

impl<T, C: Copy + Add<Output = C> + PartialOrd> Eq for SearchItem<T, C> {}

impl<T, C: Copy + Add<Output = C> + PartialOrd> PartialOrd for SearchItem<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Copy + Add<Output = C> + PartialOrd> Ord for SearchItem<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority_cmp(self)
    }
}

/// Reusable state for best-first searches over a `SearchSpace`.
///
/// After a search the context still answers which nodes were finalized
/// and what they cost, until the next search clears it. While a depth
/// ceiling is set a node may be finalized more than once, each time at a
/// smaller depth than before.
#[derive(Debug, Clone)]
pub struct SearchContext<T, C> {
    pub(crate) settled: HashMap<T, usize>,
    pub(crate) cheapest: HashMap<T, Label<T>>,
    pub(crate) g_scores: HashMap<Label<T>, C>,
    pub(crate) predecessors: HashMap<Label<T>, Label<T>>,
    pub(crate) priority_queue: BinaryHeap<SearchItem<T, C>>,
    pub(crate) start: Option<Label<T>>,
}

impl<T, C> Default for SearchContext<T, C>
where
    T: Clone + Eq + Hash,
    C: Copy + PartialOrd + Add<Output = C> + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> SearchContext<T, C>
where
    T: Clone + Eq + Hash,
    C: Copy + PartialOrd + Add<Output = C> + Zero,
{
    pub fn new() -> Self {
        Self {
            settled: HashMap::new(),
            cheapest: HashMap::new(),
            g_scores: HashMap::new(),
            predecessors: HashMap::new(),
            priority_queue: BinaryHeap::new(),
            start: None,
        }
    }

    /// Nodes finalized by the last search.
    pub fn seen(&self) -> impl Iterator<Item = &T> {
        self.settled.keys()
    }

    pub fn is_seen(&self, node: &T) -> bool {
        self.settled.contains_key(node)
    }

    /// Best cost found so far for `node`. Only final for seen nodes.
    pub fn cost_to(&self, node: &T) -> Option<C> {
        self.cheapest
            .get(node)
            .and_then(|label| self.g_scores.get(label))
            .cloned()
    }

    /// Path from the last search's start to `node` along its cheapest
    /// known route, if it was discovered.
    pub fn path_to(&self, node: &T) -> Option<Vec<T>> {
        let start = self.start.as_ref()?;
        let end = self.cheapest.get(node)?.clone();
        let mut path = Vec::new();
        path::make_path(&self.predecessors, start, end, &mut path);
        Some(path)
    }

    fn init(&mut self, start: T, h: C) {
        self.settled.clear();
        self.cheapest.clear();
        self.g_scores.clear();
        self.predecessors.clear();
        self.priority_queue.clear();
        let label = Label::new(start.clone(), 0);
        self.g_scores.insert(label.clone(), Zero::zero());
        self.cheapest.insert(start.clone(), label.clone());
        self.priority_queue
            .push(SearchItem::new(start, Zero::zero(), h, 0));
        self.start = Some(label);
    }

    /// A node already finalized at `layer` or shallower was reached more
    /// cheaply in no more steps.
    fn is_settled(&self, label: &Label<T>) -> bool {
        self.settled
            .get(&label.node)
            .map_or(false, |&settled| settled <= label.layer)
    }

    fn record(&mut self, label: Label<T>, g: C, predecessor: Label<T>) {
        let cheaper = self
            .cheapest
            .get(&label.node)
            .and_then(|best| self.g_scores.get(best))
            .map_or(true, |&best| g < best);
        if cheaper {
            self.cheapest.insert(label.node.clone(), label.clone());
        }
        self.g_scores.insert(label.clone(), g);
        self.predecessors.insert(label, predecessor);
    }

    /// Runs the search loop until `stop` accepts a finalized item or the
    /// queue empties. Returns the accepted item and the number of nodes
    /// expanded.
    pub(crate) fn run<S, H, F>(
        &mut self,
        space: &S,
        start: T,
        heuristic_fn: H,
        config: SearchConfig<C>,
        mut stop: F,
    ) -> (Option<SearchItem<T, C>>, usize)
    where
        S: SearchSpace<T, Cost = C>,
        H: Fn(&T) -> C,
        F: FnMut(&SearchItem<T, C>) -> bool,
    {
        let track_depth = config.max_depth.is_some();
        let h = heuristic_fn(&start);
        self.init(start, h);

        let mut num_nodes_visited = 0;
        let mut num_pruned = 0;

        while let Some(current) = self.priority_queue.pop() {
            let label = Label::layered(current.payload.clone(), current.depth, track_depth);
            if self.is_settled(&label) {
                continue;
            }

            if config.exceeded(&current.g, current.depth) {
                num_pruned += 1;
                continue;
            }

            self.settled.insert(label.node.clone(), label.layer);
            num_nodes_visited += 1;
            trace!(
                "expanding node {} at depth {} with {} queued",
                num_nodes_visited,
                current.depth,
                self.priority_queue.len()
            );

            if stop(&current) {
                debug!(
                    "search stopped after expanding {} nodes ({} pruned)",
                    num_nodes_visited, num_pruned
                );
                return (Some(current), num_nodes_visited);
            }

            let depth = current.depth + 1;
            for successor in space.adjacent(&current.payload) {
                let successor = Label::layered(successor, depth, track_depth);
                if self.is_settled(&successor) || !space.is_valid(&successor.node) {
                    continue;
                }
                let g = current.g + space.cost(&current.payload, &successor.node);
                if config.exceeded(&g, depth) {
                    num_pruned += 1;
                    continue;
                }
                let improves = self
                    .g_scores
                    .get(&successor)
                    .map_or(true, |&best| g < best);
                if improves {
                    let h = heuristic_fn(&successor.node);
                    self.record(successor.clone(), g, label.clone());
                    self.priority_queue
                        .push(SearchItem::new(successor.node, g, h, depth));
                }
            }
        }

        debug!(
            "search exhausted after expanding {} nodes ({} pruned)",
            num_nodes_visited, num_pruned
        );
        (None, num_nodes_visited)
    }

    pub(crate) fn search_general<S, H>(
        &mut self,
        space: &S,
        start: T,
        goal: T,
        heuristic_fn: H,
        config: SearchConfig<C>,
        path: &mut Vec<T>,
    ) -> Result<SearchMetadata<C>, Error>
    where
        S: SearchSpace<T, Cost = C>,
        H: Fn(&T, &T) -> C,
    {
        let (found, num_nodes_visited) = self.run(
            space,
            start.clone(),
            |node| heuristic_fn(node, &goal),
            config,
            |item| item.payload == goal,
        );

        let found = match found {
            Some(found) => found,
            None => {
                path.clear();
                return Err(Error::NoPath);
            }
        };
        let end = Label::layered(found.payload, found.depth, config.max_depth.is_some());
        path::make_path(&self.predecessors, &Label::new(start, 0), end, path);
        Ok(SearchMetadata {
            num_nodes_visited,
            cost: found.g,
            length: path.len(),
        })
    }

    /// Best-first search from `start` to `goal` guided by the space's own
    /// heuristic. On success `path` holds every node from `start` to `goal`.
    /// On failure it is left empty.
    pub fn search<S>(
        &mut self,
        space: &S,
        start: T,
        goal: T,
        config: SearchConfig<C>,
        path: &mut Vec<T>,
    ) -> Result<SearchMetadata<C>, Error>
    where
        S: SearchSpace<T, Cost = C>,
    {
        self.search_general(
            space,
            start,
            goal,
            |node, target| space.heuristic(node, target),
            config,
            path,
        )
    }

    /// Explores everything reachable within the ceilings and paths to the
    /// node with the greatest score. Nodes scored `None` are never chosen.
    pub fn best_reachable<S, K, F>(
        &mut self,
        space: &S,
        start: T,
        score: F,
        config: SearchConfig<C>,
        path: &mut Vec<T>,
    ) -> Result<SearchMetadata<C>, Error>
    where
        S: SearchSpace<T, Cost = C>,
        K: PartialOrd,
        F: Fn(&T) -> Option<K>,
    {
        let track_depth = config.max_depth.is_some();
        let mut best_map = best::BestMap::new();
        let (_, num_nodes_visited) = self.run(
            space,
            start.clone(),
            |_| Zero::zero(),
            config,
            |item| {
                if let Some(score) = score(&item.payload) {
                    let label = Label::layered(item.payload.clone(), item.depth, track_depth);
                    best_map.insert_gt(score, (label, item.g));
                }
                false
            },
        );

        let (best, cost) = match best_map.into_value() {
            Some(best) => best,
            None => {
                path.clear();
                return Err(Error::NoPath);
            }
        };
        path::make_path(&self.predecessors, &Label::new(start, 0), best, path);
        Ok(SearchMetadata {
            num_nodes_visited,
            cost,
            length: path.len(),
        })
    }
}
