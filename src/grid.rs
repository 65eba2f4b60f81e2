use std::collections::{HashMap, HashSet, VecDeque};
use std::convert::TryFrom;
use std::fmt;
use grid_2d::{Coord, Size};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use crate::error::*;
use crate::location::*;
use crate::point::*;

pub trait SolidGrid {
    /// `None` when the point is outside the grid.
    fn is_solid(&self, point: LatticePoint) -> Option<bool>;
    fn is_solid_or_outside(&self, point: LatticePoint) -> bool {
        self.is_solid(point).unwrap_or(true)
    }
}

/// A rectangular window of the lattice whose top-left cell sits at `offset`.
///
/// Every cell is a `Location` carrying its own absolute position; the grid
/// keeps those positions in step with `offset` when it is shifted or grown.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Grid {
    cells: grid_2d::Grid<Location>,
    offset: LatticePoint,
}

impl Grid {
    pub fn blank(width: u32, height: u32, offset: LatticePoint, fill: char) -> Self {
        let cells = grid_2d::Grid::new_fn(Size::new(width, height), |coord: Coord| {
            Location::open(offset + LatticePoint::from(coord), fill)
        });
        Self { cells, offset }
    }

    /// Builds a grid from equal-length rows of glyphs. Cells holding
    /// `wall_char` are impassable.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        wall_char: char,
        offset: LatticePoint,
    ) -> Result<Self, Error> {
        let glyphs: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();
        let width = glyphs.first().map_or(0, Vec::len);
        for (row, line) in glyphs.iter().enumerate() {
            if line.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
        }
        let size = Size::new(width as u32, glyphs.len() as u32);
        let cells = grid_2d::Grid::new_fn(size, |coord: Coord| {
            let rep = glyphs[coord.y as usize][coord.x as usize];
            let point = offset + LatticePoint::from(coord);
            if rep == wall_char {
                Location::impassable(point, rep)
            } else {
                Location::open(point, rep)
            }
        });
        Ok(Self { cells, offset })
    }

    /// Builds the smallest grid holding every location. Uncovered cells are
    /// open and drawn with `fill`.
    pub fn from_locations<I>(locations: I, fill: char) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Location>,
    {
        let locations: Vec<Location> = locations.into_iter().collect();
        let first = locations.first().ok_or(Error::NoLocations)?.point();
        let (min, max) = locations.iter().fold((first, first), |(min, max), location| {
            let p = location.point();
            (
                LatticePoint::new(min.x.min(p.x), min.y.min(p.y)),
                LatticePoint::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        let extent = max - min + LatticePoint::new(1, 1);
        let mut grid = Self::blank(extent.x as u32, extent.y as u32, min, fill);
        for location in locations {
            grid.set(location.point(), location)?;
        }
        Ok(grid)
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn size(&self) -> LatticePoint {
        LatticePoint::new(self.width() as i32, self.height() as i32)
    }

    pub fn offset(&self) -> LatticePoint {
        self.offset
    }

    /// Lower (inclusive) and upper (exclusive) corners.
    pub fn bounds(&self) -> (LatticePoint, LatticePoint) {
        (self.offset, self.offset + self.size())
    }

    pub fn contains<P: Coordinates>(&self, point: &P) -> bool {
        let (lower, upper) = self.bounds();
        point.coordinates().in_bounds(lower, upper)
    }

    fn local(&self, point: LatticePoint) -> Result<Coord, Error> {
        if self.contains(&point) {
            Ok((point - self.offset).into())
        } else {
            Err(Error::OutOfBounds(point))
        }
    }

    pub fn get<P: Coordinates>(&self, point: &P) -> Result<&Location, Error> {
        let point = point.coordinates();
        let coord = self.local(point)?;
        self.cells.get(coord).ok_or(Error::OutOfBounds(point))
    }

    pub fn get_mut<P: Coordinates>(&mut self, point: &P) -> Result<&mut Location, Error> {
        let point = point.coordinates();
        let coord = self.local(point)?;
        self.cells.get_mut(coord).ok_or(Error::OutOfBounds(point))
    }

    /// Stores `location` at `point`. The stored location is moved to `point`
    /// so cells always report their own position.
    pub fn set(&mut self, point: LatticePoint, mut location: Location) -> Result<(), Error> {
        location.set_point(point);
        *self.get_mut(&point)? = location;
        Ok(())
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.cells.iter()
    }

    pub fn points(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        self.cells.iter().map(Location::point)
    }

    pub fn char_positions(&self, chars: &[char]) -> HashMap<char, Vec<LatticePoint>> {
        let mut positions: HashMap<char, Vec<LatticePoint>> =
            chars.iter().map(|&ch| (ch, Vec::new())).collect();
        for location in self.iter() {
            if let Some(points) = positions.get_mut(&location.rep()) {
                points.push(location.point());
            }
        }
        positions
    }

    /// A copy of the grid where every point matching `predicate` is replaced
    /// by an impassable cell drawn with `rep`.
    pub fn conditional_walls<F>(&self, predicate: F, rep: char) -> Self
    where
        F: Fn(LatticePoint) -> bool,
    {
        let mut walled = self.clone();
        for location in walled.cells.iter_mut() {
            if predicate(location.point()) {
                *location = Location::impassable(location.point(), rep);
            }
        }
        walled
    }

    fn check_window(&self, lower: LatticePoint, upper: LatticePoint) -> Result<(), Error> {
        let (grid_lower, grid_upper) = self.bounds();
        if grid_lower <= lower && lower <= upper && upper <= grid_upper {
            Ok(())
        } else {
            Err(Error::InvalidBounds { lower, upper })
        }
    }

    /// An independent copy of the window `[lower, upper)`. Missing bounds
    /// default to the grid's own.
    pub fn subgrid(
        &self,
        lower: Option<LatticePoint>,
        upper: Option<LatticePoint>,
    ) -> Result<Self, Error> {
        let lower = lower.unwrap_or(self.offset);
        let upper = upper.unwrap_or_else(|| self.bounds().1);
        self.check_window(lower, upper)?;
        let extent = upper - lower;
        let shift = lower - self.offset;
        let cells = grid_2d::Grid::new_fn(
            Size::new(extent.x as u32, extent.y as u32),
            |coord: Coord| {
                let source = LatticePoint::from(coord) + shift;
                *self.cells.get_checked(source.into())
            },
        );
        Ok(Self {
            cells,
            offset: lower,
        })
    }

    /// A view of the window `[lower, upper)` that writes through to this grid.
    pub fn subgrid_mut(
        &mut self,
        lower: Option<LatticePoint>,
        upper: Option<LatticePoint>,
    ) -> Result<SubGridMut<'_>, Error> {
        let lower = lower.unwrap_or(self.offset);
        let upper = upper.unwrap_or_else(|| self.bounds().1);
        self.check_window(lower, upper)?;
        Ok(SubGridMut {
            grid: self,
            lower,
            upper,
        })
    }

    /// A copy of this grid with every cell of `other` not drawn as
    /// `empty_char` written on top. `other` must lie inside this grid.
    pub fn overlay(&self, other: &Grid, empty_char: char) -> Result<Self, Error> {
        let (lower, upper) = self.bounds();
        let (other_lower, other_upper) = other.bounds();
        if !(lower <= other_lower && other_upper <= upper) {
            return Err(Error::OverlayOutOfBounds);
        }
        let mut overlaid = self.clone();
        for location in other.iter().filter(|location| location.rep() != empty_char) {
            overlaid.set(location.point(), *location)?;
        }
        Ok(overlaid)
    }

    /// Breadth-first region growth over cardinal neighbours, stopping at
    /// cells for which `blocked` holds.
    pub fn flood_fill<P, F>(&self, start: &P, blocked: F) -> Result<HashSet<Location>, Error>
    where
        P: Coordinates,
        F: Fn(&Location) -> bool,
    {
        let start = *self.get(start)?;
        let mut region = HashSet::new();
        if blocked(&start) {
            return Ok(region);
        }
        let (lower, upper) = self.bounds();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start.point());
        queue.push_back(start);
        while let Some(location) = queue.pop_front() {
            for neighbour in location.point().adjacent_within(false, Some(lower), Some(upper)) {
                if !seen.insert(neighbour) {
                    continue;
                }
                let cell = *self.get(&neighbour)?;
                if !blocked(&cell) {
                    queue.push_back(cell);
                }
            }
            region.insert(location);
        }
        Ok(region)
    }

    pub fn draw_path<I>(&mut self, path: I, path_char: char)
    where
        I: IntoIterator<Item = LatticePoint>,
    {
        for point in path {
            if let Ok(location) = self.get_mut(&point) {
                location.set_rep(path_char);
            }
        }
    }

    /// Draws the explored points, then the path over them. Points outside
    /// the grid are ignored.
    pub fn draw_search<P, E>(&mut self, path: P, path_char: char, explored: E, explored_char: char)
    where
        P: IntoIterator<Item = LatticePoint>,
        E: IntoIterator<Item = LatticePoint>,
    {
        self.draw_path(explored, explored_char);
        self.draw_path(path, path_char);
    }

    /// Draws `count + 1` glyphs from `start`, advancing by `step`.
    pub fn draw_line(&mut self, rep: char, start: LatticePoint, step: LatticePoint, count: u32) {
        self.draw_path((0..=count as i32).map(|i| start + step * i), rep);
    }

    pub fn shift(&mut self, step: LatticePoint) {
        self.offset += step;
        for location in self.cells.iter_mut() {
            let point = location.point() + step;
            location.set_point(point);
        }
    }

    fn resize(&mut self, offset: LatticePoint, size: LatticePoint, fill: char) {
        let old = &self.cells;
        let old_offset = self.offset;
        let cells = grid_2d::Grid::new_fn(Size::new(size.x as u32, size.y as u32), |coord: Coord| {
            let point = offset + LatticePoint::from(coord);
            old.get(Coord::from(point - old_offset))
                .cloned()
                .unwrap_or_else(|| Location::open(point, fill))
        });
        self.cells = cells;
        self.offset = offset;
    }

    fn expand(
        &mut self,
        steps: u32,
        fill: char,
        grow: LatticePoint,
        move_offset: LatticePoint,
    ) -> Result<(), Error> {
        if steps == 0 {
            return Err(Error::ZeroExpansion);
        }
        let too_large = Error::ExpansionTooLarge(steps);
        let steps = i32::try_from(steps).map_err(|_| too_large)?;
        let (grown, moved) = (grow * steps, move_offset * steps);
        let size = self.size();
        let size = LatticePoint::new(
            size.x.checked_add(grown.x).ok_or(too_large)?,
            size.y.checked_add(grown.y).ok_or(too_large)?,
        );
        let offset = LatticePoint::new(
            self.offset.x.checked_sub(moved.x).ok_or(too_large)?,
            self.offset.y.checked_sub(moved.y).ok_or(too_large)?,
        );
        self.resize(offset, size, fill);
        Ok(())
    }

    /// Adds `steps` rows above the grid, moving the offset up.
    pub fn expand_up(&mut self, steps: u32, fill: char) -> Result<(), Error> {
        self.expand(steps, fill, LatticePoint::new(0, 1), LatticePoint::new(0, 1))
    }

    pub fn expand_down(&mut self, steps: u32, fill: char) -> Result<(), Error> {
        self.expand(steps, fill, LatticePoint::new(0, 1), LatticePoint::origin())
    }

    /// Adds `steps` columns left of the grid, moving the offset left.
    pub fn expand_left(&mut self, steps: u32, fill: char) -> Result<(), Error> {
        self.expand(steps, fill, LatticePoint::new(1, 0), LatticePoint::new(1, 0))
    }

    pub fn expand_right(&mut self, steps: u32, fill: char) -> Result<(), Error> {
        self.expand(steps, fill, LatticePoint::new(1, 0), LatticePoint::origin())
    }

    pub fn render(&self, separator: &str) -> String {
        let width = self.width() as usize;
        if width == 0 {
            return String::new();
        }
        let glyphs: Vec<String> = self.iter().map(|location| location.rep().to_string()).collect();
        glyphs
            .chunks(width)
            .map(|row| row.join(separator))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SolidGrid for Grid {
    fn is_solid(&self, point: LatticePoint) -> Option<bool> {
        self.get(&point).ok().map(|location| !location.passable())
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(""))
    }
}

/// A window of a `Grid` that reads and writes the parent's cells.
pub struct SubGridMut<'a> {
    grid: &'a mut Grid,
    lower: LatticePoint,
    upper: LatticePoint,
}

impl<'a> SubGridMut<'a> {
    pub fn offset(&self) -> LatticePoint {
        self.lower
    }

    pub fn bounds(&self) -> (LatticePoint, LatticePoint) {
        (self.lower, self.upper)
    }

    pub fn size(&self) -> LatticePoint {
        self.upper - self.lower
    }

    pub fn contains<P: Coordinates>(&self, point: &P) -> bool {
        point.coordinates().in_bounds(self.lower, self.upper)
    }

    fn check(&self, point: LatticePoint) -> Result<(), Error> {
        if self.contains(&point) {
            Ok(())
        } else {
            Err(Error::OutOfBounds(point))
        }
    }

    pub fn get<P: Coordinates>(&self, point: &P) -> Result<&Location, Error> {
        self.check(point.coordinates())?;
        self.grid.get(point)
    }

    pub fn get_mut<P: Coordinates>(&mut self, point: &P) -> Result<&mut Location, Error> {
        self.check(point.coordinates())?;
        self.grid.get_mut(point)
    }

    pub fn set(&mut self, point: LatticePoint, location: Location) -> Result<(), Error> {
        self.check(point)?;
        self.grid.set(point, location)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        let (lower, upper) = (self.lower, self.upper);
        self.grid
            .iter()
            .filter(move |location| location.point().in_bounds(lower, upper))
    }

    /// Detaches the window into an independent grid.
    pub fn to_grid(&self) -> Result<Grid, Error> {
        self.grid.subgrid(Some(self.lower), Some(self.upper))
    }
}

impl<'a> SolidGrid for SubGridMut<'a> {
    fn is_solid(&self, point: LatticePoint) -> Option<bool> {
        self.get(&point).ok().map(|location| !location.passable())
    }
}
