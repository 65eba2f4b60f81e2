use std::hash::Hash;
use std::ops::Add;
use num_traits::Zero;
use crate::config::*;
use crate::error::*;
use crate::metadata::*;
use crate::search::*;
use crate::space::SearchSpace;

impl<T, C> SearchContext<T, C>
where
    T: Clone + Eq + Hash,
    C: Copy + PartialOrd + Add<Output = C> + Zero,
{
    /// Uniform-cost search: the space's heuristic is ignored.
    pub fn dijkstra<S>(
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
        self.search_general(space, start, goal, |_, _| Zero::zero(), config, path)
    }
}
