use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;
use num_traits::Zero;
use crate::config::*;
use crate::metadata::*;
use crate::path::{self, Label};
use crate::search::*;
use crate::space::SearchSpace;

/// Optimal costs from one origin to every node a search could finalize.
#[derive(Debug, Clone)]
pub struct DistanceMap<T, C> {
    pub(crate) costs: HashMap<T, C>,
    pub(crate) ends: HashMap<T, Label<T>>,
    pub(crate) predecessors: HashMap<Label<T>, Label<T>>,
    pub(crate) origin: Option<Label<T>>,
}

impl<T, C> Default for DistanceMap<T, C> {
    fn default() -> Self {
        Self {
            costs: HashMap::new(),
            ends: HashMap::new(),
            predecessors: HashMap::new(),
            origin: None,
        }
    }
}

impl<T, C> DistanceMap<T, C>
where
    T: Clone + Eq + Hash,
    C: Copy,
{
    pub fn new() -> Self {
        Default::default()
    }

    pub fn origin(&self) -> Option<&T> {
        self.origin.as_ref().map(|origin| &origin.node)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn cost(&self, node: &T) -> Option<C> {
        self.costs.get(node).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &C)> {
        self.costs.iter()
    }

    pub fn path_to(&self, node: &T) -> Option<Vec<T>> {
        let origin = self.origin.as_ref()?;
        let end = self.ends.get(node)?.clone();
        let mut path = Vec::new();
        path::make_path(&self.predecessors, origin, end, &mut path);
        Some(path)
    }
}

impl<T, C> SearchContext<T, C>
where
    T: Clone + Eq + Hash,
    C: Copy + PartialOrd + Add<Output = C> + Zero,
{
    /// Runs a uniform-cost search from `start` until the frontier is empty
    /// and records every finalized node in `distance_map`.
    pub fn populate_distance_map<S>(
        &mut self,
        space: &S,
        start: T,
        config: SearchConfig<C>,
        distance_map: &mut DistanceMap<T, C>,
    ) -> DistanceMapMetadata
    where
        S: SearchSpace<T, Cost = C>,
    {
        let (_, num_nodes_visited) =
            self.run(space, start.clone(), |_| Zero::zero(), config, |_| false);

        distance_map.costs.clear();
        distance_map.ends.clear();
        for node in self.settled.keys() {
            let label = match self.cheapest.get(node) {
                Some(label) => label,
                None => continue,
            };
            if let Some(&cost) = self.g_scores.get(label) {
                distance_map.costs.insert(node.clone(), cost);
                distance_map.ends.insert(node.clone(), label.clone());
            }
        }
        distance_map.predecessors.clone_from(&self.predecessors);
        distance_map.origin = Some(Label::new(start, 0));

        DistanceMapMetadata { num_nodes_visited }
    }
}
