use std::collections::HashSet;
use std::convert::TryFrom;
use rand::SeedableRng;
use rand_isaac::IsaacRng;
use crate::error::*;
use crate::point::*;

fn p(x: i32, y: i32) -> LatticePoint {
    LatticePoint::new(x, y)
}

fn set(points: Vec<LatticePoint>) -> HashSet<LatticePoint> {
    points.into_iter().collect()
}

#[test]
fn arithmetic() {
    assert_eq!(p(1, 1) + p(1, 1), p(2, 2));
    assert_eq!(p(1, -5) + p(0, 2), p(1, -3));
    assert_eq!(p(0, 2) - p(1, -5), p(-1, 7));
    assert_eq!(-p(-3, 5), p(3, -5));
    assert_eq!(p(1, -5) * -1, p(-1, 5));
    assert_eq!(p(-3, 5).abs(), p(3, 5));

    let mut q = p(1, 1);
    q += p(1, 1);
    assert_eq!(q, p(2, 2));
    q -= p(3, 0);
    assert_eq!(q, p(-1, 2));
}

#[test]
fn floor_division_and_modulo() {
    assert_eq!(p(1, 1) / 4, p(0, 0));
    assert_eq!(p(-3, 5) / -1, p(3, -5));
    assert_eq!(p(-3, 3) / 2, p(-2, 1));
    assert_eq!(p(3, -3) / -2, p(-2, 1));
    assert_eq!(p(-1, 7) % p(3, 3), p(2, 1));
    assert_eq!(p(1, 7) % p(-3, 3), p(-2, 1));
}

#[test]
fn exact_division() {
    assert_eq!(p(0, 2).exact_div(2), Ok(p(0, 1)));
    assert_eq!(p(1, 1).exact_div(2), Err(Error::InexactDivision));
    assert_eq!(p(-3, 5).exact_div(5), Err(Error::InexactDivision));
    assert_eq!(p(4, 4).exact_div(0), Err(Error::InexactDivision));
}

#[test]
fn lattice_midpoint_rounds_down() {
    assert_eq!(p(1, 1).lattice_midpoint(p(1, -5)), p(1, -2));
    assert_eq!(p(1, -5).lattice_midpoint(p(0, 2)), p(0, -2));
    assert_eq!(p(0, 2).lattice_midpoint(p(-3, 5)), p(-2, 3));
    assert_eq!(p(-3, 5).lattice_midpoint(p(1, 1)), p(-1, 3));
}

#[test]
fn distances() {
    assert_eq!(p(0, 0).manhattan_distance(p(3, -4)), 7);
    assert_eq!(p(0, 0).chebyshev_distance(p(3, -4)), 4);
}

#[test]
fn dominance_order() {
    assert!(p(0, 0) <= p(0, 0));
    assert!(p(0, 0) <= p(0, 3));
    assert!(p(0, 0).strictly_below(p(1, 1)));
    assert!(!p(0, 0).strictly_below(p(0, 3)));
    assert!(!(p(0, 3) <= p(3, 0)));
    assert!(!(p(3, 0) <= p(0, 3)));
    assert_eq!(p(0, 3).partial_cmp(&p(3, 0)), None);
    assert!(p(2, 2).in_bounds(p(2, 2), p(3, 3)));
    assert!(!p(3, 2).in_bounds(p(2, 2), p(3, 3)));
}

#[test]
fn cardinal_adjacency() {
    let origin = p(1, 1);
    let adjacent = origin.adjacent(false);
    assert_eq!(adjacent.len(), 4);
    assert!(adjacent.iter().all(|&q| q.manhattan_distance(origin) == 1));
    assert_eq!(set(adjacent), set(vec![p(0, 1), p(1, 0), p(2, 1), p(1, 2)]));
}

#[test]
fn diagonal_adjacency() {
    let origin = p(0, 2);
    let adjacent = origin.adjacent(true);
    assert_eq!(adjacent.len(), 8);
    assert!(adjacent.iter().all(|&q| q.chebyshev_distance(origin) == 1));
    assert_eq!(
        set(adjacent),
        set(vec![
            p(-1, 1),
            p(0, 1),
            p(1, 1),
            p(-1, 2),
            p(1, 2),
            p(-1, 3),
            p(0, 3),
            p(1, 3),
        ])
    );
}

#[test]
fn bounded_adjacency() {
    assert_eq!(
        set(p(-3, 5).adjacent_within(true, Some(p(-3, 5)), None)),
        set(vec![p(-2, 5), p(-3, 6), p(-2, 6)])
    );
    assert_eq!(
        p(1, -5).adjacent_within(true, Some(p(0, -6)), Some(p(1, -5))),
        vec![p(0, -6)]
    );

    let lower = p(0, 0);
    let upper = p(3, 3);
    for x in -1..4 {
        for y in -1..4 {
            for q in p(x, y).adjacent_within(true, Some(lower), Some(upper)) {
                assert!(q.in_bounds(lower, upper));
            }
        }
    }
}

#[test]
fn random_points_stay_in_bounds() {
    let mut rng = IsaacRng::seed_from_u64(0);
    for _ in 0..100 {
        let q = LatticePoint::random(p(1, 1), p(6, 6), &mut rng).unwrap();
        assert!(q.in_bounds(p(1, 1), p(6, 6)));
    }
    assert_eq!(
        LatticePoint::random(p(1, 1), p(1, 6), &mut rng),
        Err(Error::InvalidBounds {
            lower: p(1, 1),
            upper: p(1, 6),
        })
    );
}

#[test]
fn lattice_point_from_real_point() {
    assert_eq!(LatticePoint::try_from(Point::new(5.0, -2.0)), Ok(p(5, -2)));
    assert_eq!(
        LatticePoint::try_from(Point::new(5.0, 2.5)),
        Err(Error::NonIntegerCoordinate)
    );
    assert_eq!(
        LatticePoint::try_from(Point::new(0.001, 0.0)),
        Err(Error::NonIntegerCoordinate)
    );
    assert_eq!(
        LatticePoint::try_from(Point::new(std::f64::NAN, 0.0)),
        Err(Error::NonIntegerCoordinate)
    );
}

#[test]
fn real_points() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.euclidean_distance(b), 5.0);
    assert_eq!(a.manhattan_distance(b), 7.0);
    assert_eq!(a.midpoint(b), Point::new(1.5, 2.0));
    assert!(a.strictly_below(b));
    assert_eq!(Point::from(p(2, -1)), Point::new(2.0, -1.0));
}

#[test]
fn real_floor_division_and_modulo() {
    let a = Point::new(7.5, -7.5);
    assert_eq!(a.floor_div(2.0), Point::new(3.0, -4.0));
    assert_eq!(a % Point::new(2.0, 2.0), Point::new(1.5, 0.5));
    assert_eq!(a % Point::new(-2.0, -2.0), Point::new(-0.5, -1.5));
    assert_eq!(Point::new(-0.5, 2.25).floor(), Point::new(-1.0, 2.0));
}

#[test]
fn unit_steps() {
    let a = p(3, -2);
    assert_eq!(a.up(), p(3, -3));
    assert_eq!(a.down(), p(3, -1));
    assert_eq!(a.left(), p(2, -2));
    assert_eq!(a.right(), p(4, -2));
    assert_eq!(a.up().down().left().right(), a);
    assert_eq!(set(vec![a.up(), a.down(), a.left(), a.right()]), set(a.adjacent(false)));
}
