use std::ops::{Add, Mul};
use num_traits::{NumCast, Zero};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use crate::config::*;
use crate::error::*;
use crate::metadata::*;
use crate::point::LatticePoint;
use crate::search::*;
use crate::space::{GridSpace, SearchSpace};
use crate::grid::SolidGrid;

fn cast<Cost: NumCast + Zero>(distance: i32) -> Cost {
    // Zero is admissible.
    NumCast::from(distance).unwrap_or_else(Zero::zero)
}

pub fn manhattan_distance<Cost: NumCast + Zero>(a: &LatticePoint, b: &LatticePoint) -> Cost {
    cast(a.manhattan_distance(*b))
}

/// Cost of the cheapest 8-connected route on open ground, given the cost of
/// a cardinal and of an ordinal step.
pub fn diagonal_distance<Cost>(
    a: &LatticePoint,
    b: &LatticePoint,
    weights: &HeuristicDirectionWeights<Cost>,
) -> Cost
where
    Cost: Copy + Add<Cost, Output = Cost> + Mul<Cost, Output = Cost> + NumCast + Zero,
{
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (cardinal, ordinal) = if dx < dy {
        (dy - dx, dx)
    } else {
        (dx - dy, dy)
    };

    let cardinal: Cost = cast::<Cost>(cardinal) * weights.cardinal;
    let ordinal: Cost = cast::<Cost>(ordinal) * weights.ordinal;

    cardinal + ordinal
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct HeuristicDirectionWeights<Cost> {
    pub cardinal: Cost,
    pub ordinal: Cost,
}

impl<Cost> HeuristicDirectionWeights<Cost> {
    pub fn new(cardinal: Cost, ordinal: Cost) -> Self {
        Self { cardinal, ordinal }
    }
}

impl<Cost> SearchContext<LatticePoint, Cost>
where
    Cost: Copy
        + PartialOrd
        + Add<Cost, Output = Cost>
        + Mul<Cost, Output = Cost>
        + NumCast
        + Zero,
{
    /// A* with the manhattan distance, admissible when the space only
    /// steps between cardinal neighbours at a cost of at least one.
    pub fn astar_manhattan<S>(
        &mut self,
        space: &S,
        start: LatticePoint,
        goal: LatticePoint,
        config: SearchConfig<Cost>,
        path: &mut Vec<LatticePoint>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        S: SearchSpace<LatticePoint, Cost = Cost>,
    {
        self.search_general(space, start, goal, manhattan_distance::<Cost>, config, path)
    }

    pub fn astar_diagonal<S>(
        &mut self,
        space: &S,
        start: LatticePoint,
        goal: LatticePoint,
        weights: HeuristicDirectionWeights<Cost>,
        config: SearchConfig<Cost>,
        path: &mut Vec<LatticePoint>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        S: SearchSpace<LatticePoint, Cost = Cost>,
    {
        let heuristic_fn = |a: &LatticePoint, b: &LatticePoint| diagonal_distance(a, b, &weights);
        self.search_general(space, start, goal, heuristic_fn, config, path)
    }
}

impl SearchContext<LatticePoint, u32> {
    /// A* over a grid, picking the heuristic that matches its connectivity.
    pub fn astar_grid<G: SolidGrid>(
        &mut self,
        space: &GridSpace<'_, G>,
        start: LatticePoint,
        goal: LatticePoint,
        config: SearchConfig<u32>,
        path: &mut Vec<LatticePoint>,
    ) -> Result<SearchMetadata<u32>, Error> {
        if space.diagonals() {
            let weights = HeuristicDirectionWeights::new(1, 1);
            self.astar_diagonal(space, start, goal, weights, config, path)
        } else {
            self.astar_manhattan(space, start, goal, config, path)
        }
    }
}
