#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Ceilings for a best-first search. A route that would pass either ceiling
/// is abandoned, but other routes to the same node are still explored.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig<C> {
    pub max_cost: Option<C>,
    /// Number of steps from the start.
    pub max_depth: Option<usize>,
}

impl<C> Default for SearchConfig<C> {
    fn default() -> Self {
        Self {
            max_cost: None,
            max_depth: None,
        }
    }
}

impl<C: PartialOrd> SearchConfig<C> {
    pub fn with_max_cost(max_cost: C) -> Self {
        Self {
            max_cost: Some(max_cost),
            max_depth: None,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_cost: None,
            max_depth: Some(max_depth),
        }
    }

    pub(crate) fn exceeded(&self, cost: &C, depth: usize) -> bool {
        self.max_cost.as_ref().map_or(false, |max_cost| cost > max_cost)
            || self.max_depth.map_or(false, |max_depth| depth > max_depth)
    }
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirstConfig {
    /// The graph may contain cycles. Only valid for shortest paths.
    pub cyclic: bool,
    pub longest_path: bool,
    pub max_depth: Option<usize>,
}
