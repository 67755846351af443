//! Build a strict total order over a fixed set of items by asking an oracle
//! which of two items outranks the other, using as few questions as possible.
//!
//! Every item after the first is binary-inserted into the order built so far.
//! A new item has never been compared before its insertion starts, so no
//! question asked can contradict an earlier answer, and the shrinking search
//! interval never asks about a pair whose order is already implied.
//!
//! The pieces are
//! - [`Comparator`], the oracle. Anything from a human prompt to a
//!   [`HiddenRanking`] used in simulations.
//! - [`build_order`] and [`OrderBuilder`], which drive a whole run and hand back
//!   a [`Ranking`], most important item first.
//! - [`Session`], the same algorithm as a state machine for callers that
//!   cannot block inside a comparator, e.g. an event loop waiting for a click.
//! - [`PreferenceGraph`], the relation implied by the answers given so far,
//!   used by [`Audited`] to check that a run never asks a redundant question.
//!
//! ```
//! use prioritize::{build_order, HiddenRanking};
//!
//! // Item 2 is the most important, then 0, then 1.
//! let mut oracle = HiddenRanking::from_order(&[2, 0, 1]).unwrap();
//! let ranking = build_order(vec![0, 1, 2], &mut oracle).unwrap();
//! assert_eq!(ranking.as_slice(), &[2, 0, 1]);
//! ```

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod builder;
pub mod comparator;
pub mod error;
pub mod preference;
pub mod ranking;
pub mod session;
mod verdict;

pub use builder::{build_order, BuildOptions, OrderBuilder, Shuffle};
pub use comparator::{by_key, from_fn, Audited, ByKey, Comparator, FromFn, HiddenRanking, Recording};
pub use error::{BuildError, OracleError};
pub use preference::PreferenceGraph;
pub use ranking::Ranking;
pub use session::{Comparison, Session, Step};
pub use verdict::Verdict;

/// Most comparisons needed to insert one item into an order of `k` items,
/// i.e. ⌈log2(k + 1)⌉.
pub const fn insertion_bound(k: usize) -> usize {
    match k.checked_add(1) {
        Some(x) => match x.checked_next_power_of_two() {
            Some(p) => p.trailing_zeros() as usize,
            None => usize::BITS as usize,
        },
        None => usize::BITS as usize,
    }
}

/// Most comparisons needed to order `n` items.
pub fn max_comparisons(n: usize) -> usize {
    (1..n).map(insertion_bound).sum()
}
