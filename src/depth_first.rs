use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;
use log::debug;
use num_traits::Zero;
use crate::config::*;
use crate::error::*;
use crate::metadata::*;
use crate::path::{self, Label};
use crate::space::SearchSpace;

/// Stack-driven relaxation of shortest or longest distances.
///
/// Unlike `SearchContext` there is no priority order: the worklist is LIFO
/// and runs until empty, re-pushing a node each time its distance improves.
/// Longest paths are only well defined on acyclic graphs. With a depth
/// ceiling, distances are kept per node and step count, so a cheap route
/// that runs out of steps cannot hide a dearer one that does not.
#[derive(Debug, Clone)]
pub struct DepthFirstTraversal<T, C> {
    config: DepthFirstConfig,
    distance: HashMap<Label<T>, C>,
    depth: HashMap<Label<T>, usize>,
    best: HashMap<T, Label<T>>,
    predecessors: HashMap<Label<T>, Label<T>>,
    stack: Vec<Label<T>>,
}

impl<T, C> DepthFirstTraversal<T, C>
where
    T: Clone + Eq + Hash,
    C: Copy + PartialOrd + Add<Output = C> + Zero,
{
    pub fn new(config: DepthFirstConfig) -> Result<Self, Error> {
        if config.cyclic && config.longest_path {
            return Err(Error::ConflictingTraversalModes);
        }
        Ok(Self {
            config,
            distance: HashMap::new(),
            depth: HashMap::new(),
            best: HashMap::new(),
            predecessors: HashMap::new(),
            stack: Vec::new(),
        })
    }

    pub fn config(&self) -> DepthFirstConfig {
        self.config
    }

    /// Best distance found to `node` by the last traversal.
    pub fn distance_to(&self, node: &T) -> Option<C> {
        self.best
            .get(node)
            .and_then(|label| self.distance.get(label))
            .cloned()
    }

    fn improves(&self, candidate: C, best: C) -> bool {
        if self.config.longest_path {
            candidate > best
        } else {
            candidate < best
        }
    }

    fn record_best(&mut self, label: &Label<T>, candidate: C) {
        let replaces = match self.best.get(&label.node) {
            None => true,
            Some(best) if best == label => false,
            Some(best) => self
                .distance
                .get(best)
                .map_or(true, |&best| self.improves(candidate, best)),
        };
        if replaces {
            self.best.insert(label.node.clone(), label.clone());
        }
    }

    /// Relaxes the whole reachable graph from `start`, then reports the
    /// best distance to `target` and writes its path. On failure `path` is
    /// left empty.
    pub fn traverse<S>(
        &mut self,
        space: &S,
        start: T,
        target: T,
        path: &mut Vec<T>,
    ) -> Result<SearchMetadata<C>, Error>
    where
        S: SearchSpace<T, Cost = C>,
    {
        self.distance.clear();
        self.depth.clear();
        self.best.clear();
        self.predecessors.clear();
        self.stack.clear();
        path.clear();

        let track_depth = self.config.max_depth.is_some();
        let origin = Label::new(start.clone(), 0);
        self.distance.insert(origin.clone(), Zero::zero());
        self.depth.insert(origin.clone(), 0);
        self.best.insert(start.clone(), origin.clone());
        self.stack.push(origin.clone());

        let mut num_nodes_visited = 0;

        while let Some(current) = self.stack.pop() {
            num_nodes_visited += 1;

            if self.config.longest_path && current.node == target && current.node != start {
                continue;
            }

            let (current_distance, current_depth) =
                match (self.distance.get(&current), self.depth.get(&current)) {
                    (Some(&distance), Some(&depth)) => (distance, depth),
                    _ => continue,
                };

            if self
                .config
                .max_depth
                .map_or(false, |max_depth| current_depth >= max_depth)
            {
                continue;
            }

            let successor_depth = current_depth + 1;
            for successor in space.adjacent(&current.node) {
                if !space.is_valid(&successor) {
                    continue;
                }

                let candidate = current_distance + space.cost(&current.node, &successor);
                let successor = Label::layered(successor, successor_depth, track_depth);
                let improved = match self.distance.get(&successor) {
                    None => true,
                    Some(&best) => self.improves(candidate, best),
                };
                if !improved {
                    continue;
                }

                self.distance.insert(successor.clone(), candidate);
                self.depth.insert(successor.clone(), successor_depth);
                self.predecessors.insert(successor.clone(), current.clone());
                self.record_best(&successor, candidate);

                // A walk in an acyclic graph never repeats a node, so it is
                // shorter than the number of nodes discovered.
                if !self.config.cyclic && successor_depth >= self.best.len() {
                    return Err(Error::CycleDetected);
                }

                self.stack.push(successor);
            }
        }

        debug!("depth first traversal popped {} nodes", num_nodes_visited);

        let end = self.best.get(&target).cloned().ok_or(Error::NoPath)?;
        let cost = self.distance.get(&end).cloned().ok_or(Error::NoPath)?;
        path::make_path(&self.predecessors, &origin, end, path);
        Ok(SearchMetadata {
            num_nodes_visited,
            cost,
            length: path.len(),
        })
    }
}
