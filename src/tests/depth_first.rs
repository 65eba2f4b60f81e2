use std::collections::HashMap;
use crate::config::*;
use crate::depth_first::*;
use crate::error::*;
use crate::grid::*;
use crate::point::*;
use crate::space::*;

fn dag() -> HashMap<u32, Vec<(u32, u32)>> {
    let mut edges = HashMap::new();
    edges.insert(0, vec![(1, 1), (2, 4)]);
    edges.insert(1, vec![(2, 1), (3, 6)]);
    edges.insert(2, vec![(3, 1)]);
    edges.insert(3, vec![]);
    edges.insert(4, vec![(0, 1)]);
    edges
}

fn traverse_dag(config: DepthFirstConfig, target: u32) -> (Result<u32, Error>, Vec<u32>) {
    let edges = dag();
    let space = search_fns(|node: &u32| edges[node].iter().map(|&(to, _)| to).collect())
        .with_cost(|from: &u32, to: &u32| {
            edges[from]
                .iter()
                .find(|&&(node, _)| node == *to)
                .map_or(0, |&(_, weight)| weight)
        });
    let mut traversal = DepthFirstTraversal::new(config).unwrap();
    let mut path = Vec::new();
    let result = traversal
        .traverse(&space, 0, target, &mut path)
        .map(|metadata| {
            assert_eq!(metadata.length, path.len());
            metadata.cost
        });
    (result, path)
}

#[test]
fn conflicting_modes() {
    let config = DepthFirstConfig {
        cyclic: true,
        longest_path: true,
        max_depth: None,
    };
    let result = DepthFirstTraversal::<u32, u32>::new(config);
    assert_eq!(result.err(), Some(Error::ConflictingTraversalModes));
}

#[test]
fn shortest_in_dag() {
    let (cost, path) = traverse_dag(Default::default(), 3);
    assert_eq!(cost, Ok(3));
    assert_eq!(path, vec![0, 1, 2, 3]);
}

#[test]
fn longest_in_dag() {
    let config = DepthFirstConfig {
        longest_path: true,
        ..Default::default()
    };
    let (cost, path) = traverse_dag(config, 3);
    assert_eq!(cost, Ok(7));
    assert_eq!(path, vec![0, 1, 3]);
}

#[test]
fn unreachable_target() {
    let (cost, _) = traverse_dag(Default::default(), 4);
    assert_eq!(cost, Err(Error::NoPath));
}

#[test]
fn start_is_target() {
    let (cost, path) = traverse_dag(Default::default(), 0);
    assert_eq!(cost, Ok(0));
    assert_eq!(path, vec![0]);
}

#[test]
fn depth_limit() {
    let config = DepthFirstConfig {
        max_depth: Some(1),
        ..Default::default()
    };
    let (cost, _) = traverse_dag(config, 3);
    assert_eq!(cost, Err(Error::NoPath));

    let config = DepthFirstConfig {
        max_depth: Some(2),
        ..Default::default()
    };
    let (cost, path) = traverse_dag(config, 3);
    assert_eq!(cost, Ok(5));
    assert_eq!(path, vec![0, 2, 3]);
}

#[test]
fn depth_limit_keeps_dearer_shallow_routes() {
    let mut edges: HashMap<u32, Vec<(u32, u32)>> = HashMap::new();
    edges.insert(0, vec![(4, 10), (1, 1)]);
    edges.insert(1, vec![(2, 1)]);
    edges.insert(2, vec![(5, 1)]);
    edges.insert(4, vec![(5, 1)]);
    edges.insert(5, vec![(9, 1)]);
    edges.insert(9, vec![]);
    let space = search_fns(|node: &u32| edges[node].iter().map(|&(to, _)| to).collect())
        .with_cost(|from: &u32, to: &u32| {
            edges[from]
                .iter()
                .find(|&&(node, _)| node == *to)
                .map_or(0, |&(_, weight)| weight)
        });
    let config = DepthFirstConfig {
        max_depth: Some(3),
        ..Default::default()
    };
    let mut traversal = DepthFirstTraversal::new(config).unwrap();
    let mut path = vec![7];

    let metadata = traversal.traverse(&space, 0, 9, &mut path).unwrap();
    assert_eq!(metadata.cost, 12);
    assert_eq!(path, vec![0, 4, 5, 9]);
    assert_eq!(traversal.distance_to(&5), Some(3));

    let result = traversal.traverse(&space, 0, 3, &mut path);
    assert_eq!(result, Err(Error::NoPath));
    assert!(path.is_empty());
}

#[test]
fn cyclic_grid_shortest() {
    let grid = Grid::blank(5, 5, LatticePoint::origin(), '.');
    let space = GridSpace::new(&grid, false);
    let config = DepthFirstConfig {
        cyclic: true,
        ..Default::default()
    };
    let mut traversal = DepthFirstTraversal::new(config).unwrap();
    let mut path = Vec::new();
    let start = LatticePoint::new(0, 0);
    let target = LatticePoint::new(4, 4);

    let metadata = traversal.traverse(&space, start, target, &mut path).unwrap();
    assert_eq!(metadata.cost, 8);
    assert_eq!(path.len(), 9);
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&target));
    assert_eq!(traversal.distance_to(&LatticePoint::new(2, 3)), Some(5));
}

#[test]
fn cycles_are_reported() {
    let grid = Grid::blank(3, 3, LatticePoint::origin(), '.');
    let space = GridSpace::new(&grid, false);
    let config = DepthFirstConfig {
        longest_path: true,
        ..Default::default()
    };
    let mut traversal = DepthFirstTraversal::new(config).unwrap();
    let mut path = Vec::new();
    let result = traversal.traverse(
        &space,
        LatticePoint::new(0, 0),
        LatticePoint::new(2, 2),
        &mut path,
    );
    assert_eq!(result, Err(Error::CycleDetected));
}
