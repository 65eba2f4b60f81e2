use std::marker::PhantomData;
use std::ops::Add;
use num_traits::{One, Zero};
use crate::grid::SolidGrid;
use crate::point::LatticePoint;

/// An implicit graph: everything a search needs to know about its nodes.
///
/// Only `adjacent` is required. By default every successor is valid, every
/// step costs one and the heuristic is zero, which makes a search over the
/// space a breadth-first Dijkstra.
pub trait SearchSpace<T> {
    type Cost: Copy + PartialOrd + Add<Output = Self::Cost> + Zero + One;

    /// Candidate successors of `node`. Must not depend on search state.
    fn adjacent(&self, node: &T) -> Vec<T>;

    /// Successors for which this is false are never costed or queued.
    fn is_valid(&self, _node: &T) -> bool {
        true
    }

    fn cost(&self, _from: &T, _to: &T) -> Self::Cost {
        One::one()
    }

    /// Lower bound on the remaining cost from `node` to `target`.
    fn heuristic(&self, _node: &T, _target: &T) -> Self::Cost {
        Zero::zero()
    }
}

fn always_valid<T>(_: &T) -> bool {
    true
}

fn unit_cost<T, C: One>(_: &T, _: &T) -> C {
    One::one()
}

fn zero_heuristic<T, C: Zero>(_: &T, _: &T) -> C {
    Zero::zero()
}

/// A `SearchSpace` assembled from closures.
pub struct FnSearchSpace<T, C, A, V, W, H> {
    adjacency: A,
    validation: V,
    cost: W,
    heuristic: H,
    phantom: PhantomData<fn(&T) -> C>,
}

pub type DefaultFnSearchSpace<T, C, A> =
    FnSearchSpace<T, C, A, fn(&T) -> bool, fn(&T, &T) -> C, fn(&T, &T) -> C>;

/// Starts a closure-backed search space from its adjacency function.
pub fn search_fns<T, C, A>(adjacency: A) -> DefaultFnSearchSpace<T, C, A>
where
    A: Fn(&T) -> Vec<T>,
    C: Zero + One,
{
    FnSearchSpace {
        adjacency,
        validation: always_valid::<T> as fn(&T) -> bool,
        cost: unit_cost::<T, C> as fn(&T, &T) -> C,
        heuristic: zero_heuristic::<T, C> as fn(&T, &T) -> C,
        phantom: PhantomData,
    }
}

impl<T, C, A, V, W, H> FnSearchSpace<T, C, A, V, W, H> {
    pub fn with_validation<V2>(self, validation: V2) -> FnSearchSpace<T, C, A, V2, W, H>
    where
        V2: Fn(&T) -> bool,
    {
        FnSearchSpace {
            adjacency: self.adjacency,
            validation,
            cost: self.cost,
            heuristic: self.heuristic,
            phantom: PhantomData,
        }
    }

    pub fn with_cost<W2>(self, cost: W2) -> FnSearchSpace<T, C, A, V, W2, H>
    where
        W2: Fn(&T, &T) -> C,
    {
        FnSearchSpace {
            adjacency: self.adjacency,
            validation: self.validation,
            cost,
            heuristic: self.heuristic,
            phantom: PhantomData,
        }
    }

    pub fn with_heuristic<H2>(self, heuristic: H2) -> FnSearchSpace<T, C, A, V, W, H2>
    where
        H2: Fn(&T, &T) -> C,
    {
        FnSearchSpace {
            adjacency: self.adjacency,
            validation: self.validation,
            cost: self.cost,
            heuristic,
            phantom: PhantomData,
        }
    }
}

impl<T, C, A, V, W, H> SearchSpace<T> for FnSearchSpace<T, C, A, V, W, H>
where
    C: Copy + PartialOrd + Add<Output = C> + Zero + One,
    A: Fn(&T) -> Vec<T>,
    V: Fn(&T) -> bool,
    W: Fn(&T, &T) -> C,
    H: Fn(&T, &T) -> C,
{
    type Cost = C;

    fn adjacent(&self, node: &T) -> Vec<T> {
        (self.adjacency)(node)
    }

    fn is_valid(&self, node: &T) -> bool {
        (self.validation)(node)
    }

    fn cost(&self, from: &T, to: &T) -> C {
        (self.cost)(from, to)
    }

    fn heuristic(&self, node: &T, target: &T) -> C {
        (self.heuristic)(node, target)
    }
}

/// A grid walked one cell at a time, through cardinal or all eight
/// neighbours. Solid cells are invalid and every step costs one.
#[derive(Debug, Clone, Copy)]
pub struct GridSpace<'a, G> {
    grid: &'a G,
    diagonals: bool,
}

impl<'a, G: SolidGrid> GridSpace<'a, G> {
    pub fn new(grid: &'a G, diagonals: bool) -> Self {
        Self { grid, diagonals }
    }

    pub fn grid(&self) -> &'a G {
        self.grid
    }

    pub fn diagonals(&self) -> bool {
        self.diagonals
    }
}

impl<'a, G: SolidGrid> SearchSpace<LatticePoint> for GridSpace<'a, G> {
    type Cost = u32;

    fn adjacent(&self, node: &LatticePoint) -> Vec<LatticePoint> {
        node.adjacent(self.diagonals)
            .into_iter()
            .filter(|&p| self.grid.is_solid(p).is_some())
            .collect()
    }

    fn is_valid(&self, node: &LatticePoint) -> bool {
        !self.grid.is_solid_or_outside(*node)
    }
}
