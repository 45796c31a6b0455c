//! failure values for expected, recoverable conditions
use std::error::Error;
use std::fmt;

use crate::types::{Coordinate, Direction};

/// Two coordinates have no common axis value, or no unbroken walk joins them
/// along the one they share.
///
/// Callers probe arbitrary pairs all the time, so this is a value to branch
/// on rather than a bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonAlignedCoordinates<C, R> {
    #[allow(missing_docs)]
    pub first: Coordinate<C, R>,
    #[allow(missing_docs)]
    pub second: Coordinate<C, R>,
}

impl<C: fmt::Debug, R: fmt::Debug> fmt::Display for NonAlignedCoordinates<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinates {:?} and {:?} are not aligned",
            self.first, self.second
        )
    }
}

impl<C: fmt::Debug, R: fmt::Debug> Error for NonAlignedCoordinates<C, R> {}

/// A member of a would-be alignment does not share the axis value its
/// direction requires with the first member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisalignedCoordinate<C, R> {
    #[allow(missing_docs)]
    pub direction: Direction,
    #[allow(missing_docs)]
    pub first: Coordinate<C, R>,
    /// the offending member
    pub stray: Coordinate<C, R>,
}

impl<C: fmt::Debug, R: fmt::Debug> fmt::Display for MisalignedCoordinate<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not {} with {:?}",
            self.stray, self.direction, self.first
        )
    }
}

impl<C: fmt::Debug, R: fmt::Debug> Error for MisalignedCoordinate<C, R> {}

/// Reasons a [`crate::standard::GridConfig`] cannot describe a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridConfigError {
    /// an axis has no cells
    EmptyAxis,
    /// there are more columns than letters
    TooManyColumns {
        #[allow(missing_docs)]
        columns: u8,
    },
}

impl fmt::Display for GridConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridConfigError::EmptyAxis => write!(f, "grid axes must have at least one cell"),
            GridConfigError::TooManyColumns { columns } => {
                write!(f, "{} columns requested but only 26 letters exist", columns)
            }
        }
    }
}

impl Error for GridConfigError {}

/// A string that does not read as a lettered column followed by a row number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordinateError {
    #[allow(missing_docs)]
    pub input: String,
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a coordinate like \"C3\"", self.input)
    }
}

impl Error for ParseCoordinateError {}
