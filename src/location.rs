use std::fmt;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use crate::point::{Coordinates, LatticePoint};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Open,
    Impassable,
}

/// A grid cell: a lattice position together with its terrain and the glyph
/// used to draw it.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    point: LatticePoint,
    terrain: Terrain,
    rep: char,
}

impl Location {
    pub fn new(point: LatticePoint, terrain: Terrain, rep: char) -> Self {
        Self {
            point,
            terrain,
            rep,
        }
    }

    pub fn open(point: LatticePoint, rep: char) -> Self {
        Self::new(point, Terrain::Open, rep)
    }

    pub fn impassable(point: LatticePoint, rep: char) -> Self {
        Self::new(point, Terrain::Impassable, rep)
    }

    pub fn point(&self) -> LatticePoint {
        self.point
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn rep(&self) -> char {
        self.rep
    }

    pub fn passable(&self) -> bool {
        self.terrain != Terrain::Impassable
    }

    pub fn set_rep(&mut self, rep: char) {
        self.rep = rep;
    }

    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }

    pub(crate) fn set_point(&mut self, point: LatticePoint) {
        self.point = point;
    }
}

impl Coordinates for Location {
    fn coordinates(&self) -> LatticePoint {
        self.point
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rep)
    }
}
