#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetadata<C> {
    /// Nodes expanded, not counting stale or pruned queue entries.
    pub num_nodes_visited: usize,
    pub cost: C,
    /// Number of nodes on the path, both ends included.
    pub length: usize,
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceMapMetadata {
    pub num_nodes_visited: usize,
}
