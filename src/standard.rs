//! The classic board: lettered columns and numbered rows.
//!
//! Nothing in the engine depends on these; they are one axis definition among
//! many, provided because most games want exactly this.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{GridConfigError, ParseCoordinateError};
use crate::navigator::CoordinateNavigator;
use crate::types::Coordinate;

const LETTERS: u8 = 26;

/// Columns `'A'` onwards, `len` letters long
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetteredAxis {
    len: u8,
}

impl LetteredAxis {
    /// `len` is clamped to `1..=26`
    pub fn new(len: u8) -> Self {
        Self {
            len: len.clamp(1, LETTERS),
        }
    }

    /// the last letter on this axis
    pub fn last(&self) -> char {
        (b'A' + self.len - 1) as char
    }

    fn contains(&self, c: char) -> bool {
        ('A'..=self.last()).contains(&c)
    }
}

impl Axis for LetteredAxis {
    type Index = char;

    fn previous(&self, index: &char) -> Option<char> {
        if self.contains(*index) && *index > 'A' {
            Some((*index as u8 - 1) as char)
        } else {
            None
        }
    }

    fn next(&self, index: &char) -> Option<char> {
        if self.contains(*index) && *index < self.last() {
            Some((*index as u8 + 1) as char)
        } else {
            None
        }
    }

    fn compare(&self, a: &char, b: &char) -> Ordering {
        a.cmp(b)
    }
}

/// Rows `1..=len`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberedAxis {
    len: u8,
}

impl NumberedAxis {
    #[allow(missing_docs)]
    pub fn new(len: u8) -> Self {
        debug_assert!(len >= 1);

        Self { len }
    }

    fn contains(&self, row: u8) -> bool {
        (1..=self.len).contains(&row)
    }
}

impl Axis for NumberedAxis {
    type Index = u8;

    fn previous(&self, index: &u8) -> Option<u8> {
        if self.contains(*index) && *index > 1 {
            Some(index - 1)
        } else {
            None
        }
    }

    fn next(&self, index: &u8) -> Option<u8> {
        if self.contains(*index) && *index < self.len {
            Some(index + 1)
        } else {
            None
        }
    }

    fn compare(&self, a: &u8, b: &u8) -> Ordering {
        a.cmp(b)
    }
}

/// Size of a lettered/numbered board, loadable from JSON.
///
/// Missing fields fall back to the classic 10x10 board.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct GridConfig {
    /// number of lettered columns, at most 26
    pub columns: u8,
    /// number of numbered rows
    pub rows: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            columns: 10,
            rows: 10,
        }
    }
}

impl GridConfig {
    /// checks that both axes are non empty and the columns fit in the alphabet
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GridConfigError::EmptyAxis);
        }
        if self.columns > LETTERS {
            return Err(GridConfigError::TooManyColumns {
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// the top left cell, `A1`
    pub fn origin(&self) -> Coordinate<char, u8> {
        Coordinate::new('A', 1)
    }

    /// builds a navigator over this board
    pub fn navigator(
        &self,
    ) -> Result<CoordinateNavigator<LetteredAxis, NumberedAxis>, GridConfigError> {
        self.validate()?;
        Ok(CoordinateNavigator::new(
            LetteredAxis::new(self.columns),
            NumberedAxis::new(self.rows),
            self.origin(),
        ))
    }
}

impl FromStr for Coordinate<char, u8> {
    type Err = ParseCoordinateError;

    /// parses `"C3"` style names, letters in either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError {
            input: s.to_string(),
        };
        let mut chars = s.chars();
        let column = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(err)?
            .to_ascii_uppercase();
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let row = digits.parse::<u8>().map_err(|_| err())?;
        Ok(Coordinate::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_config;

    #[test]
    fn test_lettered_axis() {
        let axis = LetteredAxis::new(3);
        assert_eq!(axis.next(&'A'), Some('B'));
        assert_eq!(axis.next(&'C'), None);
        assert_eq!(axis.previous(&'A'), None);
        assert_eq!(axis.previous(&'C'), Some('B'));
        assert_eq!(axis.next(&'Q'), None);
    }

    #[test]
    fn test_numbered_axis() {
        let axis = NumberedAxis::new(10);
        assert_eq!(axis.next(&9), Some(10));
        assert_eq!(axis.next(&10), None);
        assert_eq!(axis.previous(&1), None);
        assert_eq!(axis.previous(&0), None);
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!("C3".parse::<Coordinate<char, u8>>(), Ok(Coordinate::new('C', 3)));
        assert_eq!("j10".parse::<Coordinate<char, u8>>(), Ok(Coordinate::new('J', 10)));
        assert!("3C".parse::<Coordinate<char, u8>>().is_err());
        assert!("C".parse::<Coordinate<char, u8>>().is_err());
        assert!("".parse::<Coordinate<char, u8>>().is_err());
        assert!("C+3".parse::<Coordinate<char, u8>>().is_err());
        assert!("C-3".parse::<Coordinate<char, u8>>().is_err());
        assert!("C 3".parse::<Coordinate<char, u8>>().is_err());
        assert!("C300".parse::<Coordinate<char, u8>>().is_err());
    }

    #[test]
    fn test_lettered_axis_length_is_clamped() {
        assert_eq!(LetteredAxis::new(200).last(), 'Z');
        assert_eq!(LetteredAxis::new(0).last(), 'A');
        assert_eq!(LetteredAxis::new(200).next(&'Z'), None);
        assert_eq!(LetteredAxis::new(200).next(&'Y'), Some('Z'));
    }

    #[test]
    fn test_grid_config_from_json() {
        let config = grid_config(r#"{"columns": 8, "rows": 6}"#).unwrap();
        assert_eq!(config, GridConfig { columns: 8, rows: 6 });
        assert_eq!(grid_config("{}").unwrap(), GridConfig::default());
        assert!(grid_config(r#"{"columns": -1}"#).is_err());
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(grid_config(&json).unwrap(), config);
    }

    #[test]
    fn test_grid_config_validation() {
        assert_eq!(
            GridConfig { columns: 0, rows: 4 }.validate(),
            Err(GridConfigError::EmptyAxis)
        );
        assert_eq!(
            GridConfig { columns: 27, rows: 4 }.validate(),
            Err(GridConfigError::TooManyColumns { columns: 27 })
        );
        assert!(GridConfig { columns: 27, rows: 4 }.navigator().is_err());
    }

    #[test]
    fn test_classic_navigator() {
        let n = GridConfig::default().navigator().unwrap();
        let last = n.grid_coordinates().pop().unwrap();
        assert_eq!(last.to_string(), "J10");
        let json = serde_json::to_string(&last).unwrap();
        assert_eq!(json, r#"{"column":"J","row":10}"#);
        let back: Coordinate<char, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, last);
    }
}
