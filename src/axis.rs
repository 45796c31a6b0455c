//! Axis adjacency and the arithmetic built on top of it.
//!
//! Nothing here assumes an index is a number. An axis is defined entirely by
//! its neighbour functions and an ordering, which the caller supplies.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// One axis of the grid.
///
/// `previous` and `next` return `None` at a boundary. Walking `next` from any
/// index must terminate; the engine does not guard against cyclic axes.
pub trait Axis {
    #[allow(missing_docs)]
    type Index: Debug + Clone + Eq + Hash;

    /// the index immediately before `index`, if there is one
    fn previous(&self, index: &Self::Index) -> Option<Self::Index>;

    /// the index immediately after `index`, if there is one
    fn next(&self, index: &Self::Index) -> Option<Self::Index>;

    /// total order over indices of this axis
    fn compare(&self, a: &Self::Index, b: &Self::Index) -> Ordering;
}

/// An [`Axis`] assembled from three closures
pub struct FnAxis<I, P, N, O> {
    previous: P,
    next: N,
    compare: O,
    _index: std::marker::PhantomData<fn() -> I>,
}

impl<I, P, N, O> FnAxis<I, P, N, O>
where
    P: Fn(&I) -> Option<I>,
    N: Fn(&I) -> Option<I>,
    O: Fn(&I, &I) -> Ordering,
{
    #[allow(missing_docs)]
    pub fn new(previous: P, next: N, compare: O) -> Self {
        FnAxis {
            previous,
            next,
            compare,
            _index: std::marker::PhantomData,
        }
    }
}

impl<I, P, N, O> Debug for FnAxis<I, P, N, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAxis").finish_non_exhaustive()
    }
}

impl<I, P, N, O> Axis for FnAxis<I, P, N, O>
where
    I: Debug + Clone + Eq + Hash,
    P: Fn(&I) -> Option<I>,
    N: Fn(&I) -> Option<I>,
    O: Fn(&I, &I) -> Ordering,
{
    type Index = I;

    fn previous(&self, index: &I) -> Option<I> {
        (self.previous)(index)
    }

    fn next(&self, index: &I) -> Option<I> {
        (self.next)(index)
    }

    fn compare(&self, a: &I, b: &I) -> Ordering {
        (self.compare)(a, b)
    }
}

/// Every index reachable from `origin` by repeated `next`, `origin` first.
pub fn create_indices<I, F>(origin: I, next: F) -> Vec<I>
where
    F: Fn(&I) -> Option<I>,
{
    let mut indices = vec![origin];
    while let Some(following) = indices.last().and_then(&next) {
        indices.push(following);
    }
    indices
}

/// Applies `next` exactly `steps` times, or `None` if a boundary gets in the way.
pub fn find_next_index_by_step<I, F>(next: F, initial: &I, steps: usize) -> Option<I>
where
    I: Clone,
    F: Fn(&I) -> Option<I>,
{
    (0..steps).try_fold(initial.clone(), |current, _| next(&current))
}

/// Walks `previous` from `reference` until the boundary and returns the last index seen
pub fn find_first_index<I, F>(reference: &I, previous: F) -> I
where
    I: Clone,
    F: Fn(&I) -> Option<I>,
{
    let mut first = reference.clone();
    while let Some(before) = previous(&first) {
        first = before;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    // first..=last with no wrap
    fn bounded(first: i32, last: i32) -> impl Axis<Index = i32> {
        FnAxis::new(
            move |i: &i32| if *i > first { Some(i - 1) } else { None },
            move |i: &i32| if *i < last { Some(i + 1) } else { None },
            |a: &i32, b: &i32| a.cmp(b),
        )
    }

    #[test]
    fn test_create_indices() {
        let axis = bounded(1, 5);
        assert_eq!(create_indices(1, |i| axis.next(i)), vec![1, 2, 3, 4, 5]);
        assert_eq!(create_indices(4, |i| axis.next(i)), vec![4, 5]);
        assert_eq!(create_indices(5, |i| axis.next(i)), vec![5]);
    }

    #[test]
    fn test_create_indices_with_stepped_adjacency() {
        let axis = bounded(1, 10);
        let stepped = |i: &i32| find_next_index_by_step(|j: &i32| axis.next(j), i, 3);
        assert_eq!(create_indices(2, stepped), vec![2, 5, 8]);
    }

    #[test]
    fn test_find_next_index_by_step() {
        let axis = bounded(1, 5);
        let next = |i: &i32| axis.next(i);
        assert_eq!(find_next_index_by_step(next, &1, 0), Some(1));
        assert_eq!(find_next_index_by_step(next, &1, 4), Some(5));
        assert_eq!(find_next_index_by_step(next, &1, 5), None);
        assert_eq!(find_next_index_by_step(next, &3, 3), None);
    }

    #[test]
    fn test_find_first_index() {
        let axis = bounded(-2, 5);
        assert_eq!(find_first_index(&3, |i| axis.previous(i)), -2);
        assert_eq!(find_first_index(&-2, |i| axis.previous(i)), -2);
    }

    #[test]
    fn test_non_numeric_axis() {
        let letters = ['A', 'B', 'C'];
        let axis = FnAxis::new(
            move |c: &char| {
                let i = letters.iter().position(|l| l == c)?;
                i.checked_sub(1).map(|p| letters[p])
            },
            move |c: &char| {
                let i = letters.iter().position(|l| l == c)?;
                letters.get(i + 1).copied()
            },
            |a: &char, b: &char| a.cmp(b),
        );
        assert_eq!(create_indices('A', |c| axis.next(c)), vec!['A', 'B', 'C']);
        assert_eq!(find_first_index(&'C', |c| axis.previous(c)), 'A');
        assert_eq!(axis.compare(&'B', &'A'), Ordering::Greater);
    }
}
