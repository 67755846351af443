use bool_matrix::MatrixBool;

use crate::{error::BuildError, verdict::Verdict};

mod bool_matrix;

/// Everything implied by the verdicts given so far, over items `0..n`.
///
/// Recording "a outranks b" also records every relation that follows from it
/// by transitivity, so the graph is always a strict partial order.
#[derive(Debug, PartialEq, Eq)]
pub struct PreferenceGraph {
    // matrix[(a, b)] is `true` if a outranks b
    matrix: MatrixBool,
}

impl Clone for PreferenceGraph {
    fn clone(&self) -> Self {
        Self { matrix: self.matrix.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.matrix.clone_from(&source.matrix);
    }
}

impl PreferenceGraph {
    /// A graph over `n` items where nothing is known yet.
    pub fn new(n: usize) -> Self {
        Self { matrix: MatrixBool::new(n) }
    }

    /// Like [`PreferenceGraph::new`], but fails instead of aborting when the
    /// `n * n` matrix can't be allocated.
    pub fn try_new(n: usize) -> Result<Self, BuildError> {
        let matrix = MatrixBool::try_new(n).ok_or(BuildError::AllocationFailure { requested: n })?;
        Ok(Self { matrix })
    }

    pub fn elements(&self) -> usize {
        self.matrix.dim
    }

    /// Returns true if and only if `a` is known to outrank `b`.
    #[must_use]
    pub fn outranks(&self, a: usize, b: usize) -> bool {
        assert!(a < self.elements() && b < self.elements());
        self.matrix[(a, b)]
    }

    /// The known relation between `a` and `b`, as the verdict a comparator
    /// asked `(a, b)` would have to give.
    pub fn relation(&self, a: usize, b: usize) -> Option<Verdict> {
        if self.outranks(a, b) {
            Some(Verdict::First)
        } else if self.outranks(b, a) {
            Some(Verdict::Second)
        } else {
            None
        }
    }

    /// Record that `winner` outranks `loser`, and every relation that follows.
    /// Returns `Ok(false)` if this was already known. Fails without changing
    /// anything if it would contradict what is known.
    pub fn record(&mut self, winner: usize, loser: usize) -> Result<bool, &'static str> {
        if winner >= self.elements() || loser >= self.elements() {
            return Err("Item outside of the preference graph");
        }
        if winner == loser {
            return Err("An item can't outrank itself");
        }
        if self.outranks(loser, winner) {
            return Err("Contradicts an earlier verdict");
        }
        if self.outranks(winner, loser) {
            return Ok(false);
        }

        let n = self.elements();
        let above: Vec<usize> =
            (0..n).filter(|&i| i == winner || self.matrix[(i, winner)]).collect();
        let below: Vec<usize> =
            (0..n).filter(|&j| j == loser || self.matrix[(loser, j)]).collect();
        for &i in &above {
            for &j in &below {
                self.matrix[(i, j)] = true;
            }
        }
        Ok(true)
    }

    /// Record the verdict on the ordered pair `(a, b)`.
    pub fn record_verdict(
        &mut self,
        a: usize,
        b: usize,
        verdict: Verdict,
    ) -> Result<bool, &'static str> {
        match verdict {
            Verdict::First => self.record(a, b),
            Verdict::Second => self.record(b, a),
        }
    }

    /// Number of ordered pairs `(a, b)` where `a` is known to outrank `b`.
    pub fn edges(&self) -> usize {
        self.matrix.count()
    }

    /// Whether every pair of distinct items is related, i.e. the graph is a
    /// strict total order.
    pub fn is_total(&self) -> bool {
        let n = self.elements();
        self.edges() == n * n.saturating_sub(1) / 2
    }

    pub fn is_strict_order(&self) -> bool {
        self.matrix.is_irreflexive() && self.matrix.is_transitive()
    }
}
