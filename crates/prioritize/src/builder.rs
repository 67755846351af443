//! Whole-run order construction against a blocking [`Comparator`].

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{
    comparator::Comparator,
    error::BuildError,
    ranking::Ranking,
    session::Session,
};

/// Whether to shuffle the items before ordering them. Shuffling spreads out
/// any bias a judge has towards items in a particular position and never
/// changes which order comes out of a consistent judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shuffle {
    /// Keep the order the items came in.
    #[default]
    Off,
    /// Shuffle reproducibly from a seed.
    Seeded(u64),
    /// Shuffle from the thread-local rng.
    Entropy,
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub shuffle: Shuffle,
}

/// Builds orders with a fixed set of [`BuildOptions`].
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    options: BuildOptions,
}

impl OrderBuilder {
    pub fn new(options: BuildOptions) -> Self {
        OrderBuilder { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Order `items`, most important first, by asking `comparator`.
    ///
    /// Inserting into an order of `k` items asks at most
    /// [`insertion_bound(k)`](crate::insertion_bound) questions. Any error
    /// aborts the run and the items are dropped.
    pub fn build<T, C>(
        &self,
        mut items: Vec<T>,
        comparator: &mut C,
    ) -> Result<Ranking<T>, BuildError>
    where
        C: Comparator<T> + ?Sized,
    {
        match self.options.shuffle {
            Shuffle::Off => {}
            Shuffle::Seeded(seed) => items.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)),
            Shuffle::Entropy => items.shuffle(&mut rand::rng()),
        }
        let mut session = Session::start(items)?;
        while let Some(c) = session.pending() {
            let verdict = comparator.compare(c.candidate, c.pivot)?;
            session.answer(verdict)?;
        }
        debug!(comparisons = session.comparisons(), "built order");
        session.finish()
    }
}

/// Order `items`, most important first, by asking `comparator`. The same as
/// [`OrderBuilder::build`] with default options.
pub fn build_order<T, C>(items: Vec<T>, comparator: &mut C) -> Result<Ranking<T>, BuildError>
where
    C: Comparator<T> + ?Sized,
{
    OrderBuilder::default().build(items, comparator)
}
