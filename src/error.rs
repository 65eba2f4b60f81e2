use std::error;
use std::fmt;
use crate::point::LatticePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    OutOfBounds(LatticePoint),
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidBounds {
        lower: LatticePoint,
        upper: LatticePoint,
    },
    OverlayOutOfBounds,
    ZeroExpansion,
    ExpansionTooLarge(u32),
    NonIntegerCoordinate,
    InexactDivision,
    NoLocations,
    ConflictingTraversalModes,
    CycleDetected,
    NoPath,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfBounds(point) => write!(f, "point {} is not located on the grid", point),
            Error::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has length {} but rows must all have length {}",
                row, found, expected
            ),
            Error::InvalidBounds { lower, upper } => write!(
                f,
                "bounds {}..{} are not a window of the grid",
                lower, upper
            ),
            Error::OverlayOutOfBounds => write!(f, "overlaid grid is not fully within bounds"),
            Error::ZeroExpansion => write!(f, "can only expand by a positive number of steps"),
            Error::ExpansionTooLarge(steps) => {
                write!(f, "expanding by {} steps leaves the lattice", steps)
            }
            Error::NonIntegerCoordinate => write!(f, "lattice coordinates must be integers"),
            Error::InexactDivision => write!(f, "division leaves the lattice"),
            Error::NoLocations => write!(f, "cannot build a grid from zero locations"),
            Error::ConflictingTraversalModes => {
                write!(f, "a traversal cannot be both cyclic and longest path")
            }
            Error::CycleDetected => write!(f, "cycle found in a graph assumed to be acyclic"),
            Error::NoPath => write!(f, "no path to the target"),
        }
    }
}

impl error::Error for Error {}
