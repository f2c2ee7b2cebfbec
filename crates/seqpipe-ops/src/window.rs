//! Skip/Take window: elements `[skip, skip + take)` of the upstream,
//! clamped to what actually remains.

use seqpipe_core::{IndexedSequence, Sequence};

#[derive(Clone)]
pub struct SkipTake<S> {
    source: S,
    skip: usize,
    // `usize::MAX` stands in for "unbounded"; it exceeds any realizable
    // sequence length.
    take: usize,
}

impl<S> SkipTake<S> {
    pub(crate) fn skipping(source: S, skip: usize) -> Self {
        Self {
            source,
            skip,
            take: usize::MAX,
        }
    }

    pub(crate) fn taking(source: S, take: usize) -> Self {
        Self {
            source,
            skip: 0,
            take,
        }
    }

    /// Tightens the take bound to `min(existing, count)`; skip unchanged.
    pub fn take(self, count: usize) -> Self {
        Self {
            take: self.take.min(count),
            ..self
        }
    }

    /// Replaces the skip bound with `count`, preserving the take bound.
    ///
    /// Skip applied to an existing window resets the bound rather than
    /// adding to it. Kept exactly for compatibility with the windowed-slice
    /// contract.
    pub fn skip(self, count: usize) -> Self {
        Self {
            skip: count,
            ..self
        }
    }
}

impl<S: Sequence> Sequence for SkipTake<S> {
    type Item = S::Item;
    type Iter = SkipTakeIter<S::Iter>;

    fn iter(&self) -> Self::Iter {
        SkipTakeIter {
            inner: self.source.iter(),
            to_skip: self.skip,
            remaining: self.take,
        }
    }

    fn exact_len(&self) -> Option<usize> {
        self.source
            .exact_len()
            .map(|len| len.saturating_sub(self.skip).min(self.take))
    }
}

// Random-access upstreams get the window as an O(1) sub-range view.
impl<S: IndexedSequence> IndexedSequence for SkipTake<S> {
    fn len(&self) -> usize {
        self.source.len().saturating_sub(self.skip).min(self.take)
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        if index < self.len() {
            self.source.get(self.skip + index)
        } else {
            None
        }
    }
}

/// Forward-only evaluation: discard `to_skip` elements, then yield at most
/// `remaining` more.
pub struct SkipTakeIter<I> {
    inner: I,
    to_skip: usize,
    remaining: usize,
}

impl<I: Iterator> Iterator for SkipTakeIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.to_skip > 0 {
            self.inner.next()?;
            self.to_skip -= 1;
        }
        if self.remaining == 0 {
            return None;
        }
        match self.inner.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}
