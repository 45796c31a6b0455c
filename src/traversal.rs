//! Diagonal search patterns.
//!
//! A target of length `min_size` laid along either axis always crosses a
//! cell whose row is congruent, modulo `min_size`, to any chosen residue
//! that shifts by one per column. Each diagonal here fixes such a pattern, so
//! visiting one diagonal is enough to hit every target of at least that size.

use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::alignment::AxisCoordinate;
use crate::axis::{create_indices, find_next_index_by_step, Axis};
use crate::loopable::LoopableIndices;
use crate::types::Coordinate;

/// The coordinates in the origin's column whose rows are `0..min_size` steps
/// from the origin's row, one per residue class. Fewer are returned if the
/// row axis is shorter than `min_size`.
pub fn find_starting_coordinates<C: Clone, RA: Axis>(
    rows: &RA,
    origin: &Coordinate<C, RA::Index>,
    min_size: usize,
) -> Vec<Coordinate<C, RA::Index>> {
    (0..min_size)
        .map_while(|steps| find_next_index_by_step(|r: &RA::Index| rows.next(r), &origin.row, steps))
        .map(|row| Coordinate::new(origin.column.clone(), row))
        .collect_vec()
}

/// Reflects every coordinate's row across the middle of `row_indices`, which
/// must list the whole row axis in order. Rows not in it are dropped.
pub fn mirror_rows<C: Clone, R: Clone + Eq + Hash>(
    diagonal: &[Coordinate<C, R>],
    row_indices: &[R],
) -> Vec<Coordinate<C, R>> {
    let positions: FxHashMap<&R, usize> = row_indices
        .iter()
        .enumerate()
        .map(|(i, row)| (row, i))
        .collect();
    diagonal
        .iter()
        .filter_map(|c| {
            let position = positions.get(&c.row)?;
            let mirrored = row_indices[row_indices.len() - 1 - position].clone();
            Some(Coordinate::new(c.column.clone(), mirrored))
        })
        .collect_vec()
}

/// Builds one diagonal per starting coordinate, each followed by its row
/// mirror. Every diagonal alone intersects any run of `min_size` cells.
///
/// Visits are not deduplicated across diagonals; see [`unique_visiting_order`].
///
/// Panics if `min_size` is zero.
#[instrument(level = "trace", skip_all, fields(min_size = min_size))]
pub fn traverse_grid_diagonally<CA: Axis, RA: Axis>(
    columns: &CA,
    rows: &RA,
    origin: &AxisCoordinate<CA, RA>,
    min_size: usize,
) -> Vec<Vec<AxisCoordinate<CA, RA>>> {
    assert!(min_size > 0, "a traversal needs a target size of at least 1");

    let column_indices = create_indices(origin.column.clone(), |c: &CA::Index| columns.next(c));
    let row_indices = create_indices(origin.row.clone(), |r: &RA::Index| rows.next(r));
    let starting_coordinates = find_starting_coordinates(rows, origin, min_size);
    let starting_rows = starting_coordinates
        .iter()
        .map(|c| c.row.clone())
        .collect_vec();
    let stepped =
        |r: &RA::Index| find_next_index_by_step(|i: &RA::Index| rows.next(i), r, min_size);

    let traversal = starting_coordinates
        .iter()
        .map(|start| {
            let column_starts = LoopableIndices::new(starting_rows.clone(), &start.row);
            column_indices
                .iter()
                .zip(column_starts)
                .flat_map(|(column, first_row)| {
                    create_indices(first_row, &stepped)
                        .into_iter()
                        .map(move |row| Coordinate::new(column.clone(), row))
                })
                .collect_vec()
        })
        .flat_map(|diagonal| {
            let mirrored = mirror_rows(&diagonal, &row_indices);
            [diagonal, mirrored]
        })
        .filter(|diagonal| !diagonal.is_empty())
        .collect_vec();

    debug!(
        diagonals = traversal.len(),
        columns = column_indices.len(),
        rows = row_indices.len(),
        "built diagonal traversal"
    );
    traversal
}

/// Flattens a traversal into one visiting order, keeping the first visit of
/// each coordinate.
pub fn unique_visiting_order<C, R>(traversal: Vec<Vec<Coordinate<C, R>>>) -> Vec<Coordinate<C, R>>
where
    C: Clone + Eq + Hash,
    R: Clone + Eq + Hash,
{
    let mut seen = FxHashSet::default();
    traversal
        .into_iter()
        .flatten()
        .filter(|c| seen.insert(c.clone()))
        .collect_vec()
}
