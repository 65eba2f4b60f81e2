use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};
use direction::{CardinalDirection, Direction, Directions, DirectionsCardinal};
use grid_2d::Coord;
use rand::Rng;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use crate::error::*;

/// Anything that sits at a position on the integer lattice.
pub trait Coordinates {
    fn coordinates(&self) -> LatticePoint;
}

fn floor_div(a: i32, b: i32) -> i32 {
    let quotient = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

fn floor_mod(a: i32, b: i32) -> i32 {
    a - b * floor_div(a, b)
}

fn product_order<T: PartialOrd>(ax: T, ay: T, bx: T, by: T) -> Option<Ordering> {
    match (ax.partial_cmp(&bx)?, ay.partial_cmp(&by)?) {
        (Ordering::Equal, Ordering::Equal) => Some(Ordering::Equal),
        (Ordering::Less, Ordering::Greater) | (Ordering::Greater, Ordering::Less) => None,
        (Ordering::Greater, _) | (_, Ordering::Greater) => Some(Ordering::Greater),
        _ => Some(Ordering::Less),
    }
}

/// A point on the integer lattice.
///
/// Comparison operators use the product order: `a <= b` holds only when it
/// holds for both components, so two points may be incomparable. Use
/// `strictly_below` when both components must be strictly smaller.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
}

impl LatticePoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    pub fn strictly_below(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// True if `lower <= self` and `self` is strictly below `upper`.
    pub fn in_bounds(self, lower: Self, upper: Self) -> bool {
        lower <= self && self.strictly_below(upper)
    }

    pub fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn chebyshev_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn lattice_midpoint(self, other: Self) -> Self {
        (self + other) / 2
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Divides both components by `scalar`, failing unless both divide
    /// exactly.
    pub fn exact_div(self, scalar: i32) -> Result<Self, Error> {
        if scalar == 0 || self.x % scalar != 0 || self.y % scalar != 0 {
            return Err(Error::InexactDivision);
        }
        Ok(self / scalar)
    }

    /// One step in `direction`. North is towards smaller `y`, the way grid
    /// rows are numbered.
    pub fn step(self, direction: CardinalDirection) -> Self {
        let offset = direction.coord();
        self + Self::new(offset.x, offset.y)
    }

    pub fn up(self) -> Self {
        self.step(CardinalDirection::North)
    }

    pub fn down(self) -> Self {
        self.step(CardinalDirection::South)
    }

    pub fn left(self) -> Self {
        self.step(CardinalDirection::West)
    }

    pub fn right(self) -> Self {
        self.step(CardinalDirection::East)
    }

    /// The 4 cardinal neighbours, or all 8 neighbours when `diagonals` is set.
    pub fn adjacent(self, diagonals: bool) -> Vec<Self> {
        let offsets: Vec<Direction> = if diagonals {
            Directions.into_iter().collect()
        } else {
            DirectionsCardinal.into_iter().map(Into::into).collect()
        };
        offsets
            .into_iter()
            .map(|direction| {
                let offset = direction.coord();
                self + Self::new(offset.x, offset.y)
            })
            .collect()
    }

    pub fn adjacent_within(
        self,
        diagonals: bool,
        lower: Option<Self>,
        upper: Option<Self>,
    ) -> Vec<Self> {
        Self::bounded_filter(self.adjacent(diagonals), lower, upper)
    }

    /// Keeps the points in the half-open box `[lower, upper)`. A missing
    /// bound does not constrain that side.
    pub fn bounded_filter<I>(points: I, lower: Option<Self>, upper: Option<Self>) -> Vec<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        points
            .into_iter()
            .filter(|&p| lower.map_or(true, |lower| lower <= p))
            .filter(|&p| upper.map_or(true, |upper| p.strictly_below(upper)))
            .collect()
    }

    /// A uniformly chosen point in `[lower, upper)`.
    pub fn random<R: Rng>(lower: Self, upper: Self, rng: &mut R) -> Result<Self, Error> {
        if !lower.strictly_below(upper) {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self::new(
            rng.gen_range(lower.x..upper.x),
            rng.gen_range(lower.y..upper.y),
        ))
    }
}

impl Coordinates for LatticePoint {
    fn coordinates(&self) -> LatticePoint {
        *self
    }
}

impl PartialOrd for LatticePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        product_order(self.x, self.y, other.x, other.y)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for LatticePoint {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for LatticePoint {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for LatticePoint {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for LatticePoint {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for LatticePoint {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for LatticePoint {
    type Output = Self;
    fn mul(self, scalar: i32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// Floor division, rounding towards negative infinity.
impl Div<i32> for LatticePoint {
    type Output = Self;
    fn div(self, scalar: i32) -> Self {
        Self::new(floor_div(self.x, scalar), floor_div(self.y, scalar))
    }
}

/// Component-wise modulo taking the sign of the divisor.
impl Rem for LatticePoint {
    type Output = Self;
    fn rem(self, divisor: Self) -> Self {
        Self::new(floor_mod(self.x, divisor.x), floor_mod(self.y, divisor.y))
    }
}

impl From<(i32, i32)> for LatticePoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for LatticePoint {
    fn from(coord: Coord) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<LatticePoint> for Coord {
    fn from(point: LatticePoint) -> Self {
        Coord::new(point.x, point.y)
    }
}

impl TryFrom<Point> for LatticePoint {
    type Error = Error;
    fn try_from(point: Point) -> Result<Self, Error> {
        let to_int = |v: f64| {
            if v.is_finite()
                && v.fract() == 0.0
                && v >= f64::from(i32::min_value())
                && v <= f64::from(i32::max_value())
            {
                Ok(v as i32)
            } else {
                Err(Error::NonIntegerCoordinate)
            }
        };
        Ok(Self::new(to_int(point.x)?, to_int(point.y)?))
    }
}

/// A point in the real plane, ordered like `LatticePoint`.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn strictly_below(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    pub fn in_bounds(self, lower: Self, upper: Self) -> bool {
        lower <= self && self.strictly_below(upper)
    }

    pub fn manhattan_distance(self, other: Self) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn euclidean_distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }

    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Divides both components by `scalar` and rounds towards negative
    /// infinity.
    pub fn floor_div(self, scalar: f64) -> Self {
        (self / scalar).floor()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        product_order(self.x, self.y, other.x, other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

/// Component-wise modulo whose result takes the sign of the divisor.
impl Rem for Point {
    type Output = Self;
    fn rem(self, divisor: Self) -> Self {
        let wrap = |a: f64, b: f64| a - b * (a / b).floor();
        Self::new(wrap(self.x, divisor.x), wrap(self.y, divisor.y))
    }
}

impl From<LatticePoint> for Point {
    fn from(point: LatticePoint) -> Self {
        Self::new(f64::from(point.x), f64::from(point.y))
    }
}
