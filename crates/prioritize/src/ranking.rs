use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::error::BuildError;

/// A strict total order over items, most important first.
///
/// Only the insertion algorithm can add to a `Ranking`, and it only inserts
/// at the position its search resolved, so the relative order of items already
/// placed never changes.
#[derive(Debug, PartialEq, Eq)]
pub struct Ranking<T> {
    pub(crate) order: Vec<T>,
}

impl<T: Clone> Clone for Ranking<T> {
    fn clone(&self) -> Self {
        Self { order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.order.clone_from(&source.order);
    }
}

impl<T> Ranking<T> {
    /// An empty ranking with room for `n` items. Reserving everything up front
    /// means inserts never reallocate in the middle of a run.
    pub(crate) fn with_room(n: usize) -> Result<Self, BuildError> {
        let mut order = Vec::new();
        order.try_reserve_exact(n).or(Err(BuildError::AllocationFailure { requested: n }))?;
        Ok(Ranking { order })
    }

    /// Place `x` at `position`, shifting everything from `position` on down one
    /// step.
    pub(crate) fn insert(&mut self, position: usize, x: T) {
        debug_assert!(position <= self.order.len());
        self.order.insert(position, x);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.order.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.order
    }

    /// Position of the first item equal to `x`. Items are only identified by
    /// position, so with duplicate values this is the highest ranked one.
    pub fn position(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.order.iter().position(|y| y == x)
    }

    /// The same order with every item passed through `f`, e.g. to turn
    /// handles back into labels.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Ranking<U> {
        Ranking { order: self.order.into_iter().map(f).collect() }
    }

    pub fn into_vec(self) -> Vec<T> {
        let Self { order } = self;
        order
    }
}

impl<T> Index<usize> for Ranking<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.order[i]
    }
}

impl<T> IntoIterator for Ranking<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ranking<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// One numbered line per item, starting at 1.
impl<T: Display> Display for Ranking<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.order.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, x)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_shifts_down() {
        let mut r = Ranking::with_room(4).unwrap();
        r.insert(0, "b");
        r.insert(1, "d");
        r.insert(0, "a");
        r.insert(2, "c");
        assert_eq!(r.as_slice(), &["a", "b", "c", "d"]);
        assert_eq!(r[2], "c");
        assert_eq!(r.position(&"d"), Some(3));
        assert_eq!(r.position(&"e"), None);
    }

    #[test]
    fn allocation_failure() {
        match Ranking::<u64>::with_room(usize::MAX) {
            Err(BuildError::AllocationFailure { requested }) => assert_eq!(requested, usize::MAX),
            other => panic!("expected allocation failure, got {:?}", other),
        }
    }

    #[test]
    fn display_numbered() {
        let mut r = Ranking::with_room(2).unwrap();
        r.insert(0, "walk the dog");
        r.insert(1, "taxes");
        assert_eq!(r.to_string(), "1. walk the dog\n2. taxes\n");
    }

    #[test]
    fn map_keeps_order() {
        let labels = ["c", "a", "b"];
        let mut r = Ranking::with_room(3).unwrap();
        r.insert(0, 1);
        r.insert(1, 2);
        r.insert(0, 0);
        assert_eq!(r.map(|i| labels[i]).as_slice(), &["c", "a", "b"]);
    }

    #[test]
    fn display_empty() {
        assert_eq!(Ranking::<String>::with_room(0).unwrap().to_string(), "");
    }

    #[test]
    fn duplicate_values_kept_apart() {
        let mut r = Ranking::with_room(3).unwrap();
        r.insert(0, "same");
        r.insert(0, "same");
        r.insert(1, "same");
        assert_eq!(r.len(), 3);
        assert_eq!(r.position(&"same"), Some(0));
        assert_eq!(r.into_vec(), vec!["same"; 3]);
    }
}
