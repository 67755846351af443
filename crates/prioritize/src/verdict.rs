use std::cmp::Ordering;

/// The answer to "which of these two outranks the other". There is no tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The first item outranks the second.
    First,
    /// The second item outranks the first.
    Second,
}

impl Verdict {
    /// The same answer with the items swapped.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Verdict::First => Verdict::Second,
            Verdict::Second => Verdict::First,
        }
    }

    /// `Greater` means the first item outranks the second. `Equal` is not a
    /// verdict.
    pub fn from_ordering(o: Ordering) -> Option<Self> {
        match o {
            Ordering::Greater => Some(Verdict::First),
            Ordering::Less => Some(Verdict::Second),
            Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_conversion() {
        assert_eq!(Verdict::from_ordering(Ordering::Greater), Some(Verdict::First));
        assert_eq!(Verdict::from_ordering(Ordering::Less), Some(Verdict::Second));
        assert_eq!(Verdict::from_ordering(Ordering::Equal), None);
    }

    #[quickcheck]
    fn flip_twice(first: bool) -> bool {
        let v = if first { Verdict::First } else { Verdict::Second };
        v.flip() != v && v.flip().flip() == v
    }
}
