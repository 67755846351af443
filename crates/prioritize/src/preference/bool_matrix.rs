use std::ops::{Index, IndexMut};

#[derive(Debug, PartialEq, Eq, Default)]
pub(crate) struct MatrixBool {
    pub(crate) dim: usize,
    pub(crate) elements: Vec<bool>,
}

impl Clone for MatrixBool {
    fn clone(&self) -> Self {
        Self { dim: self.dim, elements: self.elements.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.dim = source.dim;
        self.elements.clone_from(&source.elements);
    }
}

impl MatrixBool {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim, elements: vec![false; dim * dim] }
    }

    /// Like [`MatrixBool::new`], but `None` if `dim * dim` overflows or can't
    /// be allocated.
    pub fn try_new(dim: usize) -> Option<Self> {
        let len = dim.checked_mul(dim)?;
        let mut elements = Vec::new();
        elements.try_reserve_exact(len).ok()?;
        elements.resize(len, false);
        Some(Self { dim, elements })
    }

    pub fn count(&self) -> usize {
        self.elements.iter().filter(|&&b| b).count()
    }

    pub fn is_irreflexive(&self) -> bool {
        (0..self.dim).all(|a| !self[(a, a)])
    }

    pub fn is_transitive(&self) -> bool {
        for a in 0..self.dim {
            for b in 0..self.dim {
                if !self[(a, b)] {
                    continue;
                }
                for c in 0..self.dim {
                    if self[(b, c)] && !self[(a, c)] {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Index<(usize, usize)> for MatrixBool {
    type Output = bool;

    fn index(&self, i: (usize, usize)) -> &Self::Output {
        &self.elements[i.0 + self.dim * i.1]
    }
}

impl IndexMut<(usize, usize)> for MatrixBool {
    fn index_mut(&mut self, i: (usize, usize)) -> &mut Self::Output {
        &mut self.elements[i.0 + self.dim * i.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_overflow() {
        assert!(MatrixBool::try_new(usize::MAX).is_none());
        assert!(MatrixBool::try_new(1 << (usize::BITS / 2)).is_none());
    }

    #[test]
    fn try_new_small() {
        let m = MatrixBool::try_new(3).unwrap();
        assert_eq!(m, MatrixBool::new(3));
    }

    #[test]
    fn transitive_check() {
        let mut m = MatrixBool::new(3);
        m[(0, 1)] = true;
        m[(1, 2)] = true;
        assert!(!m.is_transitive());
        m[(0, 2)] = true;
        assert!(m.is_transitive());
        assert!(m.is_irreflexive());
        assert_eq!(m.count(), 3);
        m[(1, 1)] = true;
        assert!(!m.is_irreflexive());
    }
}
