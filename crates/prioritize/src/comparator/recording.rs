use super::Comparator;
use crate::{error::OracleError, verdict::Verdict};

/// Wraps a comparator and remembers every question asked of it.
#[derive(Debug, Clone)]
pub struct Recording<C, T> {
    inner: C,
    queries: Vec<(T, T)>,
}

impl<C, T> Recording<C, T> {
    pub fn new(inner: C) -> Self {
        Recording { inner, queries: Vec::new() }
    }

    /// Every pair asked, in order, including ones the inner comparator failed
    /// to answer.
    pub fn queries(&self) -> &[(T, T)] {
        &self.queries
    }

    pub fn calls(&self) -> usize {
        self.queries.len()
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: Clone, C: Comparator<T>> Comparator<T> for Recording<C, T> {
    fn compare(&mut self, first: &T, second: &T) -> Result<Verdict, OracleError> {
        self.queries.push((first.clone(), second.clone()));
        self.inner.compare(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::HiddenRanking;

    #[test]
    fn records_in_order() {
        let hidden = HiddenRanking::from_order(&[1, 0, 2]).unwrap();
        let mut c = Recording::new(hidden);
        assert_eq!(c.compare(&0, &1).unwrap(), Verdict::Second);
        assert_eq!(c.compare(&2, &0).unwrap(), Verdict::Second);
        assert!(c.compare(&5, &0).is_err());
        assert_eq!(c.queries(), &[(0, 1), (2, 0), (5, 0)]);
        assert_eq!(c.calls(), 3);
        assert_eq!(c.into_inner().order(), &[1, 0, 2]);
    }
}
