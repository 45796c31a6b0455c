//! distance, collinearity and gap finding over opaque axes
use std::cmp::Ordering;
use std::iter;

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::{instrument, trace};

use crate::axis::Axis;
use crate::error::NonAlignedCoordinates;
use crate::types::{Coordinate, CoordinateAlignment, Direction};

/// A coordinate on the grid formed by a column axis and a row axis
pub type AxisCoordinate<CA, RA> = Coordinate<<CA as Axis>::Index, <RA as Axis>::Index>;

/// An alignment on the grid formed by a column axis and a row axis
pub type AxisAlignment<CA, RA> = CoordinateAlignment<<CA as Axis>::Index, <RA as Axis>::Index>;

/// Row major ordering: rows first, then columns.
pub fn compare_row_major<CA: Axis, RA: Axis>(
    columns: &CA,
    rows: &RA,
    a: &AxisCoordinate<CA, RA>,
    b: &AxisCoordinate<CA, RA>,
) -> Ordering {
    rows.compare(&a.row, &b.row)
        .then_with(|| columns.compare(&a.column, &b.column))
}

/// Sorts row major and drops repeats
pub fn sort_coordinates<CA: Axis, RA: Axis>(
    columns: &CA,
    rows: &RA,
    coordinates: impl IntoIterator<Item = AxisCoordinate<CA, RA>>,
) -> Vec<AxisCoordinate<CA, RA>> {
    coordinates
        .into_iter()
        .unique()
        .sorted_by(|a, b| compare_row_major(columns, rows, a, b))
        .collect_vec()
}

/// The direction two distinct coordinates line up in, if they do
pub fn alignment_direction<C: PartialEq, R: PartialEq>(
    first: &Coordinate<C, R>,
    second: &Coordinate<C, R>,
) -> Option<Direction> {
    match (first.column == second.column, first.row == second.row) {
        (true, true) | (false, false) => None,
        (false, true) => Some(Direction::Horizontal),
        (true, false) => Some(Direction::Vertical),
    }
}

// number of `next` steps from the lower of a and b to the higher
fn steps_between<A: Axis>(axis: &A, a: &A::Index, b: &A::Index) -> Option<usize> {
    let (low, high) = match axis.compare(a, b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };
    let mut current = low.clone();
    let mut steps = 0;
    while &current != high {
        current = axis.next(&current)?;
        steps += 1;
    }
    Some(steps)
}

/// Number of steps between two coordinates sharing a row or a column.
///
/// The pair is put in axis order first, so the result does not depend on
/// argument order. A coordinate is at distance 0 from itself.
pub fn calculate_distance<CA: Axis, RA: Axis>(
    columns: &CA,
    rows: &RA,
    first: &AxisCoordinate<CA, RA>,
    second: &AxisCoordinate<CA, RA>,
) -> Result<usize, NonAlignedCoordinates<CA::Index, RA::Index>> {
    let steps = if first.column == second.column {
        steps_between(rows, &first.row, &second.row)
    } else if first.row == second.row {
        steps_between(columns, &first.column, &second.column)
    } else {
        None
    };
    steps.ok_or_else(|| NonAlignedCoordinates {
        first: first.clone(),
        second: second.clone(),
    })
}

/// Groups coordinates into lines whose members are within `max_distance`
/// steps (inclusive) of the line's lowest member.
///
/// Each coordinate, in row major order, acts as a reference for the
/// coordinates sorted after it; the aligned ones are grouped by direction,
/// horizontal first. A group already contained in an alignment emitted
/// earlier is dropped.
#[instrument(level = "trace", skip_all, fields(max_distance = max_distance))]
pub fn find_alignments<CA: Axis, RA: Axis>(
    columns: &CA,
    rows: &RA,
    coordinates: impl IntoIterator<Item = AxisCoordinate<CA, RA>>,
    max_distance: usize,
) -> Vec<AxisAlignment<CA, RA>> {
    let sorted = sort_coordinates(columns, rows, coordinates);
    let mut alignments: Vec<AxisAlignment<CA, RA>> = vec![];

    for (i, reference) in sorted.iter().enumerate() {
        let mut by_direction = sorted[i + 1..]
            .iter()
            .filter_map(|candidate| {
                let direction = alignment_direction(reference, candidate)?;
                match calculate_distance(columns, rows, reference, candidate) {
                    Ok(distance) if distance <= max_distance => {
                        Some((direction, candidate.clone()))
                    }
                    Ok(distance) => {
                        trace!(?reference, ?candidate, distance, "candidate out of range");
                        None
                    }
                    Err(e) => {
                        trace!(%e, "candidate unreachable");
                        None
                    }
                }
            })
            .into_group_map();

        for direction in Direction::all() {
            let candidates = match by_direction.remove(&direction) {
                Some(candidates) => candidates,
                None => continue,
            };
            let alignment = CoordinateAlignment::new(
                direction,
                iter::once(reference.clone()).chain(candidates),
            );
            // a later reference sorts after every earlier one, so it can only
            // ever produce a subset of what is already there, never a superset
            if alignments.iter().any(|a| a.is_superset_of(&alignment)) {
                trace!(?alignment, "dropping redundant alignment");
                continue;
            }
            alignments.push(alignment);
        }
    }

    alignments
}

// indices strictly between the lowest and highest of `present` that are not in it
fn missing_between<A: Axis>(
    axis: &A,
    present: impl IntoIterator<Item = A::Index>,
) -> Vec<A::Index> {
    let present: FxHashSet<A::Index> = present.into_iter().collect();
    let (first, last) = match (
        present.iter().min_by(|a, b| axis.compare(a, b)),
        present.iter().max_by(|a, b| axis.compare(a, b)),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => return vec![],
    };

    let mut missing = vec![];
    let mut current = first.clone();
    while &current != last {
        current = match axis.next(&current) {
            Some(next) => next,
            None => break,
        };
        if !present.contains(&current) {
            missing.push(current.clone());
        }
    }
    missing
}

/// The coordinates that would make the alignment a contiguous run.
///
/// Alignments with fewer than two members have no gaps.
pub fn find_alignment_gaps<CA: Axis, RA: Axis>(
    columns: &CA,
    rows: &RA,
    alignment: &AxisAlignment<CA, RA>,
) -> Vec<AxisCoordinate<CA, RA>> {
    let first = match alignment.coordinates().first() {
        Some(first) if alignment.len() > 1 => first,
        _ => return vec![],
    };
    match alignment.direction() {
        Direction::Horizontal => {
            missing_between(columns, alignment.coordinates().iter().map(|c| c.column.clone()))
                .into_iter()
                .map(|column| Coordinate::new(column, first.row.clone()))
                .collect_vec()
        }
        Direction::Vertical => {
            missing_between(rows, alignment.coordinates().iter().map(|c| c.row.clone()))
                .into_iter()
                .map(|row| Coordinate::new(first.column.clone(), row))
                .collect_vec()
        }
    }
}

/// The coordinates just before the lowest member and just after the highest
/// member of the alignment, along its axis. Either is left out at a boundary.
pub fn find_next_extremums<CA: Axis, RA: Axis>(
    columns: &CA,
    rows: &RA,
    alignment: &AxisAlignment<CA, RA>,
) -> Vec<AxisCoordinate<CA, RA>> {
    let coordinates = alignment.coordinates();
    match alignment.direction() {
        Direction::Horizontal => {
            let lowest = coordinates
                .iter()
                .min_by(|a, b| columns.compare(&a.column, &b.column));
            let highest = coordinates
                .iter()
                .max_by(|a, b| columns.compare(&a.column, &b.column));
            let before = lowest.and_then(|c| {
                columns
                    .previous(&c.column)
                    .map(|column| Coordinate::new(column, c.row.clone()))
            });
            let after = highest.and_then(|c| {
                columns
                    .next(&c.column)
                    .map(|column| Coordinate::new(column, c.row.clone()))
            });
            before.into_iter().chain(after).collect_vec()
        }
        Direction::Vertical => {
            let lowest = coordinates
                .iter()
                .min_by(|a, b| rows.compare(&a.row, &b.row));
            let highest = coordinates
                .iter()
                .max_by(|a, b| rows.compare(&a.row, &b.row));
            let before = lowest.and_then(|c| {
                rows.previous(&c.row)
                    .map(|row| Coordinate::new(c.column.clone(), row))
            });
            let after = highest.and_then(|c| {
                rows.next(&c.row)
                    .map(|row| Coordinate::new(c.column.clone(), row))
            });
            before.into_iter().chain(after).collect_vec()
        }
    }
}
