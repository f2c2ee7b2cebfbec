//! Finite and infinite cyclic repetition of an upstream sequence.
//!
//! Forward-only upstreams are re-acquired with a fresh iterator at the end
//! of each cycle; indexed upstreams answer `len`/`get` without copying.
//! Repeating an empty sequence yields nothing in either variant.

use seqpipe_core::{Error, IndexedSequence, Result, Sequence};

#[derive(Clone)]
pub struct Repeat<S> {
    source: S,
    times: usize,
}

impl<S: Sequence> Repeat<S> {
    /// Fails at construction when the upstream length is known and
    /// `len * times` exceeds the maximum representable length.
    pub(crate) fn new(source: S, times: usize) -> Result<Self> {
        if let Some(len) = source.exact_len() {
            len.checked_mul(times).ok_or(Error::LengthOverflow {
                source_len: len,
                times,
                limit: usize::MAX,
            })?;
        }
        Ok(Self { source, times })
    }
}

impl<S> Sequence for Repeat<S>
where
    S: Sequence + Clone,
{
    type Item = S::Item;
    type Iter = RepeatIter<S>;

    fn iter(&self) -> Self::Iter {
        RepeatIter {
            source: self.source.clone(),
            inner: self.source.iter(),
            cycles_left: self.times,
            yielded: false,
        }
    }

    fn exact_len(&self) -> Option<usize> {
        self.source
            .exact_len()
            .and_then(|len| len.checked_mul(self.times))
    }
}

impl<S> IndexedSequence for Repeat<S>
where
    S: IndexedSequence + Clone,
{
    fn len(&self) -> usize {
        // Construction already rejected an overflowing product for indexed
        // upstreams.
        self.source.len().saturating_mul(self.times)
    }

    fn get(&self, index: usize) -> Option<S::Item> {
        let cycle = self.source.len();
        if cycle == 0 || index >= self.len() {
            return None;
        }
        self.source.get(index % cycle)
    }
}

pub struct RepeatIter<S: Sequence> {
    source: S,
    inner: S::Iter,
    cycles_left: usize,
    yielded: bool,
}

impl<S: Sequence> Iterator for RepeatIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.cycles_left == 0 {
            return None;
        }
        loop {
            if let Some(item) = self.inner.next() {
                self.yielded = true;
                return Some(item);
            }
            // An empty cycle means an empty upstream: stop instead of
            // spinning through the remaining cycles.
            if !self.yielded {
                self.cycles_left = 0;
                return None;
            }
            self.cycles_left -= 1;
            if self.cycles_left == 0 {
                return None;
            }
            self.inner = self.source.iter();
            self.yielded = false;
        }
    }
}

/// Infinite repetition; callers bound consumption externally (e.g. `take`).
#[derive(Clone)]
pub struct RepeatForever<S> {
    source: S,
}

impl<S> RepeatForever<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> Sequence for RepeatForever<S>
where
    S: Sequence + Clone,
{
    type Item = S::Item;
    type Iter = RepeatForeverIter<S>;

    fn iter(&self) -> Self::Iter {
        RepeatForeverIter {
            source: self.source.clone(),
            inner: self.source.iter(),
            yielded: false,
        }
    }
}

pub struct RepeatForeverIter<S: Sequence> {
    source: S,
    inner: S::Iter,
    yielded: bool,
}

impl<S: Sequence> Iterator for RepeatForeverIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if let Some(item) = self.inner.next() {
                self.yielded = true;
                return Some(item);
            }
            if !self.yielded {
                return None;
            }
            self.inner = self.source.iter();
            self.yielded = false;
        }
    }
}
