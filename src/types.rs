//! value types shared by every navigation query
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::error::MisalignedCoordinate;

/// A single cell on the grid, addressed by one index per axis.
///
/// Indices are opaque: equality and hashing are structural, and all movement
/// happens through an [`crate::axis::Axis`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate<C, R> {
    /// column index
    pub column: C,
    /// row index
    pub row: R,
}

impl<C, R> Coordinate<C, R> {
    /// makes a coordinate from a column and a row
    pub fn new(column: C, row: R) -> Self {
        Coordinate { column, row }
    }
}

impl<C: fmt::Display, R: fmt::Display> fmt::Display for Coordinate<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// The axis along which a set of coordinates line up
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// coordinates share a row and vary in column
    Horizontal,
    /// coordinates share a column and vary in row
    Vertical,
}

impl Direction {
    /// returns both directions, horizontal first
    pub fn all() -> [Direction; 2] {
        [Direction::Horizontal, Direction::Vertical]
    }

    /// the other direction
    pub fn orthogonal(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// A run of coordinates lying on one line.
///
/// Members are deduplicated and kept in the order they were given; the
/// navigator always hands them over sorted. Every member shares the row
/// (for [`Direction::Horizontal`]) or the column (for [`Direction::Vertical`])
/// of the first one.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinateAlignment<C, R> {
    direction: Direction,
    coordinates: Vec<Coordinate<C, R>>,
}

impl<C, R> CoordinateAlignment<C, R>
where
    C: Clone + Eq + Hash + fmt::Debug,
    R: Clone + Eq + Hash + fmt::Debug,
{
    /// Builds an alignment, dropping repeated coordinates.
    ///
    /// Panics if a member does not share the axis value `direction` requires,
    /// that is a caller bug rather than a data condition.
    pub fn new(
        direction: Direction,
        coordinates: impl IntoIterator<Item = Coordinate<C, R>>,
    ) -> Self {
        match Self::try_new(direction, coordinates) {
            Ok(alignment) => alignment,
            Err(e) => panic!("{}", e),
        }
    }

    /// Like [`Self::new`] but hands back the first member off the line
    /// instead of panicking. Used for alignments that come from outside.
    pub fn try_new(
        direction: Direction,
        coordinates: impl IntoIterator<Item = Coordinate<C, R>>,
    ) -> Result<Self, MisalignedCoordinate<C, R>> {
        let coordinates = coordinates.into_iter().unique().collect_vec();
        if let Some(first) = coordinates.first() {
            let stray = coordinates.iter().find(|c| match direction {
                Direction::Horizontal => c.row != first.row,
                Direction::Vertical => c.column != first.column,
            });
            if let Some(stray) = stray {
                return Err(MisalignedCoordinate {
                    direction,
                    first: first.clone(),
                    stray: stray.clone(),
                });
            }
        }
        Ok(CoordinateAlignment {
            direction,
            coordinates,
        })
    }
}

impl<'de, C, R> Deserialize<'de> for CoordinateAlignment<C, R>
where
    C: Deserialize<'de> + Clone + Eq + Hash + fmt::Debug,
    R: Deserialize<'de> + Clone + Eq + Hash + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Unchecked<C, R> {
            direction: Direction,
            coordinates: Vec<Coordinate<C, R>>,
        }

        let unchecked = Unchecked::<C, R>::deserialize(deserializer)?;
        CoordinateAlignment::try_new(unchecked.direction, unchecked.coordinates)
            .map_err(serde::de::Error::custom)
    }
}

impl<C: PartialEq, R: PartialEq> CoordinateAlignment<C, R> {
    #[allow(missing_docs)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[allow(missing_docs)]
    pub fn coordinates(&self) -> &[Coordinate<C, R>] {
        &self.coordinates
    }

    /// number of coordinates in this alignment
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// checks if a given coordinate is a member of this alignment
    pub fn contains(&self, coordinate: &Coordinate<C, R>) -> bool {
        self.coordinates.contains(coordinate)
    }

    /// checks if every member of `other` is also a member of this alignment
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.direction == other.direction && other.coordinates.iter().all(|c| self.contains(c))
    }

    /// gives back the coordinates, consuming the alignment
    pub fn into_coordinates(self) -> Vec<Coordinate<C, R>> {
        self.coordinates
    }
}
