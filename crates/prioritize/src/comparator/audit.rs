use super::Comparator;
use crate::{
    error::{BuildError, OracleError},
    preference::PreferenceGraph,
    verdict::Verdict,
};

/// Wraps a comparator over items `0..n` and refuses any question whose answer
/// already follows from earlier answers.
///
/// A refused question is reported as [`OracleError::Contract`], so a run that
/// asks one fails with a contract violation instead of silently asking a
/// person something they could contradict.
#[derive(Debug, Clone)]
pub struct Audited<C> {
    inner: C,
    graph: PreferenceGraph,
}

impl<C> Audited<C> {
    pub fn new(inner: C, n: usize) -> Self {
        Audited { inner, graph: PreferenceGraph::new(n) }
    }

    /// Like [`Audited::new`], but fails instead of aborting when there isn't
    /// room for the `n * n` relation matrix.
    pub fn try_new(inner: C, n: usize) -> Result<Self, BuildError> {
        Ok(Audited { inner, graph: PreferenceGraph::try_new(n)? })
    }

    /// Everything the answers so far imply.
    pub fn graph(&self) -> &PreferenceGraph {
        &self.graph
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Comparator<usize>> Comparator<usize> for Audited<C> {
    fn compare(&mut self, first: &usize, second: &usize) -> Result<Verdict, OracleError> {
        let (a, b) = (*first, *second);
        if a >= self.graph.elements() || b >= self.graph.elements() {
            let reason = format!("query ({a}, {b}) is outside of the audited items");
            return Err(OracleError::contract(reason));
        }
        if a == b {
            return Err(OracleError::contract(format!("item {a} compared with itself")));
        }
        if let Some(known) = self.graph.relation(a, b) {
            let reason = format!("query ({a}, {b}) was already decided as {known:?}");
            return Err(OracleError::contract(reason));
        }
        let verdict = self.inner.compare(first, second)?;
        self.graph.record_verdict(a, b, verdict).map_err(OracleError::contract)?;
        Ok(verdict)
    }
}
