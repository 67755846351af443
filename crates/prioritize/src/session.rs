//! Order construction as a state machine.
//!
//! A [`Session`] holds the order built so far, the item currently being
//! inserted (the candidate) and the half-open interval `[lo, hi)` of positions
//! the candidate can still end up at. Each answer halves the interval. When it
//! is empty the candidate is inserted at `lo` and the next item becomes the
//! candidate.

use std::vec;

use tracing::{debug, trace};

use crate::{error::BuildError, ranking::Ranking, verdict::Verdict};

/// The question a [`Session`] is waiting on: does `candidate` outrank `pivot`?
#[derive(Debug)]
pub struct Comparison<'a, T> {
    pub candidate: &'a T,
    pub pivot: &'a T,
    /// Where `pivot` sits in the order built so far.
    pub pivot_position: usize,
    /// The interval `[lo, hi)` of positions still open to the candidate.
    pub bounds: (usize, usize),
}

/// What an answer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The search interval shrank, another comparison follows.
    Narrowed,
    /// The candidate was inserted at `position` and the next item is up.
    Inserted { position: usize },
    /// The last item was inserted. The session is done.
    Finished { position: usize },
}

#[derive(Debug)]
struct Search<T> {
    candidate: T,
    // Index of `candidate` in the input
    index: usize,
    lo: usize,
    hi: usize,
    spent: usize,
}

impl<T> Search<T> {
    fn mid(&self) -> usize {
        self.lo + (self.hi - self.lo) / 2
    }
}

/// Step-driven binary-insertion ordering. See the module docs.
#[derive(Debug)]
pub struct Session<T> {
    ranked: Ranking<T>,
    search: Option<Search<T>>,
    rest: vec::IntoIter<T>,
    next_index: usize,
    comparisons: usize,
}

impl<T> Session<T> {
    /// Start ordering `items`, in the order given. The first item seeds the
    /// order, so with fewer than two items the session is done immediately.
    pub fn start(items: Vec<T>) -> Result<Self, BuildError> {
        let n = items.len();
        let mut ranked = Ranking::with_room(n)?;
        let mut rest = items.into_iter();
        if let Some(first) = rest.next() {
            ranked.insert(0, first);
        }
        debug!(items = n, "starting order construction");
        let mut session = Session { ranked, search: None, rest, next_index: 1, comparisons: 0 };
        session.next_candidate();
        Ok(session)
    }

    fn next_candidate(&mut self) {
        self.search = self.rest.next().map(|candidate| {
            let s = Search {
                candidate,
                index: self.next_index,
                lo: 0,
                hi: self.ranked.len(),
                spent: 0,
            };
            self.next_index += 1;
            s
        });
    }

    /// The comparison to answer next, or `None` if the session is done.
    pub fn pending(&self) -> Option<Comparison<'_, T>> {
        self.search.as_ref().map(|s| {
            let mid = s.mid();
            Comparison {
                candidate: &s.candidate,
                pivot: &self.ranked[mid],
                pivot_position: mid,
                bounds: (s.lo, s.hi),
            }
        })
    }

    /// Feed back the answer to the [pending](Session::pending) comparison,
    /// where [`Verdict::First`] means the candidate outranks the pivot.
    pub fn answer(&mut self, verdict: Verdict) -> Result<Step, BuildError> {
        let Some(mut s) = self.search.take() else {
            return Err(BuildError::InvalidArgument("no comparison is pending"));
        };
        let mid = s.mid();
        trace!(item = s.index, lo = s.lo, hi = s.hi, pivot = mid, ?verdict, "answered");
        match verdict {
            // The candidate goes somewhere above the pivot
            Verdict::First => s.hi = mid,
            // The candidate goes somewhere below the pivot
            Verdict::Second => s.lo = mid + 1,
        }
        s.spent += 1;
        self.comparisons += 1;
        if s.lo < s.hi {
            self.search = Some(s);
            return Ok(Step::Narrowed);
        }

        let Search { candidate, index, lo, spent, .. } = s;
        debug_assert!(spent <= crate::insertion_bound(self.ranked.len()));
        self.ranked.insert(lo, candidate);
        debug!(item = index, position = lo, comparisons = spent, "inserted");
        self.next_candidate();
        if self.search.is_some() {
            Ok(Step::Inserted { position: lo })
        } else {
            debug!(items = self.ranked.len(), comparisons = self.comparisons, "order complete");
            Ok(Step::Finished { position: lo })
        }
    }

    pub fn is_done(&self) -> bool {
        self.search.is_none()
    }

    /// Comparisons answered so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Items not yet placed, counting the current candidate.
    pub fn remaining(&self) -> usize {
        self.rest.len() + usize::from(self.search.is_some())
    }

    /// The order built so far. Before the session is done it only covers
    /// the items placed so far.
    pub fn ranked(&self) -> &Ranking<T> {
        &self.ranked
    }

    /// The finished order. Fails if comparisons are still pending.
    pub fn finish(self) -> Result<Ranking<T>, BuildError> {
        if self.search.is_some() {
            return Err(BuildError::InvalidArgument("comparisons are still pending"));
        }
        Ok(self.ranked)
    }

    /// Give back every item without finishing: the items placed so far in
    /// their current order, then the candidate, then the items not yet seen.
    /// Nothing is promised about how the result is ordered as a whole.
    pub fn abandon(self) -> Vec<T> {
        let Session { ranked, search, rest, .. } = self;
        let mut items = ranked.into_vec();
        items.extend(search.map(|s| s.candidate));
        items.extend(rest);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Answer with "larger number outranks"
    fn run(items: Vec<u32>) -> (Vec<u32>, usize) {
        let mut session = Session::start(items).unwrap();
        while let Some(c) = session.pending() {
            let v = if c.candidate > c.pivot { Verdict::First } else { Verdict::Second };
            session.answer(v).unwrap();
        }
        let comparisons = session.comparisons();
        (session.finish().unwrap().into_vec(), comparisons)
    }

    #[test]
    fn empty_is_done() {
        let session = Session::<u32>::start(Vec::new()).unwrap();
        assert!(session.is_done());
        assert!(session.pending().is_none());
        assert_eq!(session.remaining(), 0);
        assert!(session.finish().unwrap().is_empty());
    }

    #[test]
    fn single_is_done() {
        let session = Session::start(vec![7]).unwrap();
        assert!(session.is_done());
        assert_eq!(session.finish().unwrap().as_slice(), &[7]);
    }

    #[test]
    fn answer_without_pending() {
        let mut session = Session::start(vec![7]).unwrap();
        assert!(matches!(session.answer(Verdict::First), Err(BuildError::InvalidArgument(_))));
        assert_eq!(session.comparisons(), 0);
    }

    #[test]
    fn finish_early() {
        let session = Session::start(vec![1, 2]).unwrap();
        assert!(matches!(session.finish(), Err(BuildError::InvalidArgument(_))));
    }

    #[test]
    fn pending_pair() {
        let mut session = Session::start(vec!['a', 'b', 'c']).unwrap();
        let c = session.pending().unwrap();
        assert_eq!((*c.candidate, *c.pivot, c.pivot_position, c.bounds), ('b', 'a', 0, (0, 1)));
        assert_eq!(session.answer(Verdict::Second).unwrap(), Step::Inserted { position: 1 });
        assert_eq!(session.ranked().as_slice(), &['a', 'b']);

        let c = session.pending().unwrap();
        assert_eq!((*c.candidate, *c.pivot, c.pivot_position, c.bounds), ('c', 'b', 1, (0, 2)));
        assert_eq!(session.answer(Verdict::First).unwrap(), Step::Narrowed);

        let c = session.pending().unwrap();
        assert_eq!((*c.candidate, *c.pivot, c.pivot_position, c.bounds), ('c', 'a', 0, (0, 1)));
        assert_eq!(session.answer(Verdict::Second).unwrap(), Step::Finished { position: 1 });
        assert!(session.is_done());
        assert_eq!(session.finish().unwrap().as_slice(), &['a', 'c', 'b']);
    }

    #[test]
    fn abandon_returns_everything() {
        let mut session = Session::start(vec![1, 2, 3, 4]).unwrap();
        session.answer(Verdict::First).unwrap();
        assert_eq!(session.remaining(), 2);
        let mut items = session.abandon();
        assert_eq!(&items[..3], &[2, 1, 3]);
        items.sort();
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn descending_result() {
        let (out, comparisons) = run(vec![3, 1, 4, 5, 9, 2, 6, 8, 7, 0]);
        assert_eq!(out, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert!(comparisons <= crate::max_comparisons(10));
    }

    #[quickcheck]
    fn comparisons_within_bound(items: Vec<u32>) -> bool {
        let n = items.len();
        let mut expected = items.clone();
        expected.sort_by(|a, b| b.cmp(a));
        let (out, comparisons) = run(items);
        out == expected && comparisons <= crate::max_comparisons(n)
    }
}
