use rand::{seq::SliceRandom, Rng};

use super::Comparator;
use crate::{error::OracleError, verdict::Verdict};

/// A comparator over items `0..n` that answers according to a fixed strict
/// total order, for simulating a perfectly consistent judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenRanking {
    // Most important first
    order: Vec<usize>,
    // rank[i] is the position of item `i` in `order`
    rank: Vec<usize>,
}

// Every value is less than `order.len()` and unique, i.e. the slice is a
// permutation of `0..order.len()`.
fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &i in order {
        if i >= order.len() || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

impl HiddenRanking {
    /// The ranking `order`, most important first. Returns `None` unless
    /// `order` is a permutation of `0..order.len()`.
    pub fn from_order(order: &[usize]) -> Option<Self> {
        if !is_permutation(order) {
            return None;
        }
        let mut rank = vec![0; order.len()];
        for (position, &i) in order.iter().enumerate() {
            rank[i] = position;
        }
        Some(HiddenRanking { order: order.to_vec(), rank })
    }

    /// A uniformly random ranking of `n` items.
    pub fn random<R: Rng>(rng: &mut R, n: usize) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        let mut rank = vec![0; n];
        for (position, &i) in order.iter().enumerate() {
            rank[i] = position;
        }
        HiddenRanking { order, rank }
    }

    /// Most important first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Comparator<usize> for HiddenRanking {
    fn compare(&mut self, first: &usize, second: &usize) -> Result<Verdict, OracleError> {
        let (Some(a), Some(b)) = (self.rank.get(*first), self.rank.get(*second)) else {
            return Err(OracleError::contract("item outside of the hidden ranking"));
        };
        Verdict::from_ordering(b.cmp(a))
            .ok_or_else(|| OracleError::contract("item compared with itself"))
    }
}
