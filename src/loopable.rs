//! cyclic cursor over a fixed sequence of axis indices
use std::fmt::Debug;

/// Hands out the indices of a sequence forever, starting at a chosen member
/// and wrapping back to the first element after the last.
///
/// This lets the traversal stagger starting rows across columns without doing
/// modulo arithmetic on opaque indices.
#[derive(Debug, Clone)]
pub struct LoopableIndices<I> {
    indices: Vec<I>,
    cursor: usize,
}

impl<I: PartialEq + Debug> LoopableIndices<I> {
    /// Panics if `initial` is not a member of `indices`.
    pub fn new(indices: Vec<I>, initial: &I) -> Self {
        let cursor = match indices.iter().position(|i| i == initial) {
            Some(position) => position,
            None => panic!("{:?} is not one of {:?}", initial, indices),
        };
        LoopableIndices { indices, cursor }
    }
}

impl<I: Clone> Iterator for LoopableIndices<I> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        let current = self.indices[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.indices.len();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::LoopableIndices;

    #[test]
    fn test_starts_at_initial_and_wraps() {
        let l = LoopableIndices::new(vec!['a', 'b', 'c'], &'b');
        assert_eq!(l.take(7).collect_vec(), vec!['b', 'c', 'a', 'b', 'c', 'a', 'b']);
    }

    #[test]
    fn test_single_element() {
        let l = LoopableIndices::new(vec![4], &4);
        assert_eq!(l.take(3).collect_vec(), vec![4, 4, 4]);
    }

    #[test]
    #[should_panic]
    fn test_initial_must_be_a_member() {
        LoopableIndices::new(vec![1, 2, 3], &9);
    }
}
