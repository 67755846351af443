//! The oracle that decides which of two items outranks the other.
//!
//! The builder only ever talks to a [`Comparator`], so the same run can be
//! driven by a person at a prompt, a scripted simulation or any other judge.

use std::marker::PhantomData;

use crate::{error::OracleError, verdict::Verdict};

mod audit;
mod hidden;
mod recording;

pub use audit::Audited;
pub use hidden::HiddenRanking;
pub use recording::Recording;

/// Decides which of two items outranks the other.
///
/// A comparator must never answer with a tie. If the judge behind it is
/// undecided it should keep asking until it gets a definite answer, and if it
/// can't get one it returns an [`OracleError`] instead. Retrying is up to the
/// comparator, the builder never asks the same question twice.
pub trait Comparator<T: ?Sized> {
    /// [`Verdict::First`] if `first` outranks `second`, [`Verdict::Second`]
    /// otherwise.
    fn compare(&mut self, first: &T, second: &T) -> Result<Verdict, OracleError>;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &mut C {
    fn compare(&mut self, first: &T, second: &T) -> Result<Verdict, OracleError> {
        (**self).compare(first, second)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Box<C> {
    fn compare(&mut self, first: &T, second: &T) -> Result<Verdict, OracleError> {
        (**self).compare(first, second)
    }
}

/// A comparator calling `f`. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Use a closure as a comparator.
///
/// ```
/// use prioritize::{build_order, comparator::from_fn, Verdict};
///
/// let mut shortest_first = from_fn(|a: &String, b: &String| {
///     Ok(if a.len() < b.len() { Verdict::First } else { Verdict::Second })
/// });
/// let items = vec!["ccc".to_string(), "a".to_string(), "bb".to_string()];
/// let ranking = build_order(items, &mut shortest_first).unwrap();
/// assert_eq!(ranking.as_slice(), ["a", "bb", "ccc"]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Result<Verdict, OracleError>,
{
    FromFn(f)
}

impl<T: ?Sized, F> Comparator<T> for FromFn<F>
where
    F: FnMut(&T, &T) -> Result<Verdict, OracleError>,
{
    fn compare(&mut self, first: &T, second: &T) -> Result<Verdict, OracleError> {
        (self.0)(first, second)
    }
}

/// A comparator where the item with the larger key outranks the other.
/// Created by [`by_key`].
pub struct ByKey<F, T: ?Sized> {
    key: F,
    _item: PhantomData<fn(&T)>,
}

/// Rank items by a key, largest first. Two items with equal keys would be a
/// tie, which is reported as [`OracleError::Contract`].
pub fn by_key<T, K, F>(key: F) -> ByKey<F, T>
where
    T: ?Sized,
    K: Ord,
    F: FnMut(&T) -> K,
{
    ByKey { key, _item: PhantomData }
}

impl<T: ?Sized, K: Ord, F: FnMut(&T) -> K> Comparator<T> for ByKey<F, T> {
    fn compare(&mut self, first: &T, second: &T) -> Result<Verdict, OracleError> {
        let a = (self.key)(first);
        let b = (self.key)(second);
        Verdict::from_ordering(a.cmp(&b))
            .ok_or_else(|| OracleError::contract("comparator produced a tie"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_key_larger_wins() {
        let mut c = by_key(|x: &(u32, char)| x.0);
        assert_eq!(c.compare(&(3, 'a'), &(1, 'b')).unwrap(), Verdict::First);
        assert_eq!(c.compare(&(1, 'a'), &(3, 'b')).unwrap(), Verdict::Second);
    }

    #[test]
    fn by_key_tie() {
        let mut c = by_key(|x: &(u32, char)| x.0);
        assert!(matches!(c.compare(&(2, 'a'), &(2, 'b')), Err(OracleError::Contract(_))));
    }

    fn ask<C: Comparator<u32>>(mut c: C, a: u32, b: u32) -> Verdict {
        c.compare(&a, &b).unwrap()
    }

    #[test]
    fn boxed_dyn() {
        let mut c: Box<dyn Comparator<u32>> = Box::new(from_fn(|a: &u32, b: &u32| {
            Ok(if a > b { Verdict::First } else { Verdict::Second })
        }));
        assert_eq!(ask(&mut c, 1, 2), Verdict::Second);
        assert_eq!(ask(c, 2, 1), Verdict::First);
    }
}
