//! The navigator ties a column axis, a row axis and a reference coordinate
//! together and answers every geometric question the game logic asks.
use std::cmp::Ordering;
use std::sync::OnceLock;

use itertools::Itertools;
use tracing::debug;

use crate::alignment::{self, AxisAlignment, AxisCoordinate};
use crate::axis::{create_indices, find_first_index, Axis};
use crate::error::NonAlignedCoordinates;
use crate::traversal;
use crate::types::Coordinate;

/// Read only geometry over one grid.
///
/// The axes are fixed at construction, so the grid origin is computed on
/// first use and cached for the navigator's lifetime. A navigator can be
/// shared between threads whenever its axes can.
#[derive(Debug)]
pub struct CoordinateNavigator<CA: Axis, RA: Axis> {
    columns: CA,
    rows: RA,
    reference: AxisCoordinate<CA, RA>,
    origin: OnceLock<AxisCoordinate<CA, RA>>,
}

impl<CA: Axis, RA: Axis> CoordinateNavigator<CA, RA> {
    /// `reference` can be any cell on the grid; the origin is found by
    /// walking backwards from it on both axes.
    pub fn new(columns: CA, rows: RA, reference: AxisCoordinate<CA, RA>) -> Self {
        CoordinateNavigator {
            columns,
            rows,
            reference,
            origin: OnceLock::new(),
        }
    }

    #[allow(missing_docs)]
    pub fn columns(&self) -> &CA {
        &self.columns
    }

    #[allow(missing_docs)]
    pub fn rows(&self) -> &RA {
        &self.rows
    }

    #[allow(missing_docs)]
    pub fn reference(&self) -> &AxisCoordinate<CA, RA> {
        &self.reference
    }

    /// row major: compares rows, then columns
    pub fn compare_coordinates(
        &self,
        a: &AxisCoordinate<CA, RA>,
        b: &AxisCoordinate<CA, RA>,
    ) -> Ordering {
        alignment::compare_row_major(&self.columns, &self.rows, a, b)
    }

    /// sorts row major, dropping repeated coordinates
    pub fn sort_coordinates(
        &self,
        coordinates: impl IntoIterator<Item = AxisCoordinate<CA, RA>>,
    ) -> Vec<AxisCoordinate<CA, RA>> {
        alignment::sort_coordinates(&self.columns, &self.rows, coordinates)
    }

    /// The up to four cells one step away from `target` along a single axis,
    /// sorted row major. Cells past a boundary are left out.
    pub fn get_surrounding_coordinates(
        &self,
        target: &AxisCoordinate<CA, RA>,
    ) -> Vec<AxisCoordinate<CA, RA>> {
        let horizontal = [
            self.columns.previous(&target.column),
            self.columns.next(&target.column),
        ]
        .into_iter()
        .flatten()
        .map(|column| Coordinate::new(column, target.row.clone()));
        let vertical = [self.rows.previous(&target.row), self.rows.next(&target.row)]
            .into_iter()
            .flatten()
            .map(|row| Coordinate::new(target.column.clone(), row));
        self.sort_coordinates(horizontal.chain(vertical))
    }

    /// see [`alignment::calculate_distance`]
    pub fn calculate_distance(
        &self,
        first: &AxisCoordinate<CA, RA>,
        second: &AxisCoordinate<CA, RA>,
    ) -> Result<usize, NonAlignedCoordinates<CA::Index, RA::Index>> {
        alignment::calculate_distance(&self.columns, &self.rows, first, second)
    }

    /// see [`alignment::find_alignments`]
    pub fn find_alignments(
        &self,
        coordinates: impl IntoIterator<Item = AxisCoordinate<CA, RA>>,
        max_distance: usize,
    ) -> Vec<AxisAlignment<CA, RA>> {
        alignment::find_alignments(&self.columns, &self.rows, coordinates, max_distance)
    }

    /// see [`alignment::find_alignment_gaps`]
    pub fn find_alignment_gaps(
        &self,
        alignment: &AxisAlignment<CA, RA>,
    ) -> Vec<AxisCoordinate<CA, RA>> {
        alignment::find_alignment_gaps(&self.columns, &self.rows, alignment)
    }

    /// see [`alignment::find_next_extremums`]
    pub fn find_next_extremums(
        &self,
        alignment: &AxisAlignment<CA, RA>,
    ) -> Vec<AxisCoordinate<CA, RA>> {
        alignment::find_next_extremums(&self.columns, &self.rows, alignment)
    }

    /// The first coordinate on both axes, reached by walking `previous` from
    /// the reference coordinate. Computed once.
    pub fn get_grid_origin(&self) -> &AxisCoordinate<CA, RA> {
        self.origin.get_or_init(|| {
            let origin = Coordinate::new(
                find_first_index(&self.reference.column, |c| self.columns.previous(c)),
                find_first_index(&self.reference.row, |r| self.rows.previous(r)),
            );
            debug!(reference = ?self.reference, ?origin, "computed grid origin");
            origin
        })
    }

    /// see [`traversal::find_starting_coordinates`]
    pub fn find_starting_coordinates(&self, min_size: usize) -> Vec<AxisCoordinate<CA, RA>> {
        traversal::find_starting_coordinates(&self.rows, self.get_grid_origin(), min_size)
    }

    /// Diagonal search pattern for targets of at least `min_size` cells, see
    /// [`traversal::traverse_grid_diagonally`].
    pub fn traverse_grid(&self, min_size: usize) -> Vec<Vec<AxisCoordinate<CA, RA>>> {
        traversal::traverse_grid_diagonally(
            &self.columns,
            &self.rows,
            self.get_grid_origin(),
            min_size,
        )
    }

    /// [`Self::traverse_grid`] flattened into a single order with repeat
    /// visits removed
    pub fn traverse_grid_unique(&self, min_size: usize) -> Vec<AxisCoordinate<CA, RA>> {
        traversal::unique_visiting_order(self.traverse_grid(min_size))
    }

    /// every cell of the grid, row major from the origin
    pub fn grid_coordinates(&self) -> Vec<AxisCoordinate<CA, RA>> {
        let origin = self.get_grid_origin();
        let columns = create_indices(origin.column.clone(), |c| self.columns.next(c));
        create_indices(origin.row.clone(), |r| self.rows.next(r))
            .into_iter()
            .cartesian_product(columns)
            .map(|(row, column)| Coordinate::new(column, row))
            .collect_vec()
    }
}
