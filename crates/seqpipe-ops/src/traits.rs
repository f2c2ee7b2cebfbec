//! Pipeline entry points: operator constructors and terminals.
//!
//! Operator entry points take `self` by value (descriptors are cheap
//! `Clone` values) and return a new composed descriptor; they never
//! consume or alter the upstream. Fusion happens at construction time:
//! inherent methods on `Filter`/`Map`/`FilterMap`/`SkipTake` shadow the
//! generic methods here, so `filter(..).map(..)` builds one fused stage
//! while staying observably identical to the unfused chain.
//!
//! Terminal entry points take `&self` and traverse only the minimal
//! necessary prefix.

use seqpipe_core::{BoxedSeq, Error, Result, Sequence};
use seqpipe_mem::{SegmentPool, SegmentedBuf};

use crate::filter::Filter;
use crate::map::Map;
use crate::repeat::{Repeat, RepeatForever};
use crate::window::SkipTake;

pub trait SequenceExt: Sequence + Sized {
    // ----- operators -----

    /// Elements for which the predicate holds, in original order.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }

    /// Element-wise lazy transformation; output length equals input length.
    fn map<F, R>(self, transform: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> R + Clone,
    {
        Map::new(self, transform)
    }

    /// Drop the first `count` elements (clamped to the sequence length).
    fn skip(self, count: usize) -> SkipTake<Self> {
        SkipTake::skipping(self, count)
    }

    /// Keep at most the first `count` elements.
    fn take(self, count: usize) -> SkipTake<Self> {
        SkipTake::taking(self, count)
    }

    /// The whole sequence cycled `times` times.
    fn repeat(self, times: usize) -> Result<Repeat<Self>> {
        Repeat::new(self, times)
    }

    /// The whole sequence cycled endlessly; bound consumption with `take`.
    fn repeat_forever(self) -> RepeatForever<Self> {
        RepeatForever::new(self)
    }

    /// Erase the concrete pipeline type behind the uniform dynamic handle.
    fn boxed(self) -> BoxedSeq<Self::Item>
    where
        Self: Send + Sync + 'static,
        Self::Iter: 'static,
    {
        BoxedSeq::new(self)
    }

    // ----- terminals -----

    /// O(1) when the length is knowable, otherwise a full traversal.
    fn count(&self) -> usize {
        match self.exact_len() {
            Some(len) => len,
            None => self.iter().count(),
        }
    }

    /// Stops at the first match.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|item| item == *value)
    }

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|item| item == *value)
    }

    fn first(&self) -> Result<Self::Item> {
        self.iter()
            .next()
            .ok_or(Error::EmptySequence { terminal: "first" })
    }

    fn first_or_none(&self) -> Option<Self::Item> {
        self.iter().next()
    }

    /// The only element; fails on empty input and as soon as a second
    /// element is observed.
    fn single(&self) -> Result<Self::Item> {
        let mut iter = self.iter();
        let first = iter
            .next()
            .ok_or(Error::EmptySequence { terminal: "single" })?;
        if iter.next().is_some() {
            return Err(Error::MultipleElements { terminal: "single" });
        }
        Ok(first)
    }

    /// `None` on empty input; still fails on a second element.
    fn single_or_none(&self) -> Result<Option<Self::Item>> {
        let mut iter = self.iter();
        let first = match iter.next() {
            Some(item) => item,
            None => return Ok(None),
        };
        if iter.next().is_some() {
            return Err(Error::MultipleElements {
                terminal: "single_or_none",
            });
        }
        Ok(Some(first))
    }

    fn sum<A>(&self) -> A
    where
        A: std::iter::Sum<Self::Item>,
    {
        self.iter().sum()
    }

    fn min(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.iter()
            .min()
            .ok_or(Error::EmptySequence { terminal: "min" })
    }

    fn max(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.iter()
            .max()
            .ok_or(Error::EmptySequence { terminal: "max" })
    }

    // ----- materialization -----

    /// Collect into a `Vec` with exactly one allocation for the result.
    ///
    /// With a knowable length the destination is allocated up front;
    /// otherwise elements stream through a segmented buffer whose pooled
    /// segments are all returned before this call comes back, success or
    /// not.
    fn to_vec(&self) -> Result<Vec<Self::Item>> {
        match self.exact_len() {
            Some(len) => {
                let mut out = Vec::with_capacity(len);
                out.extend(self.iter());
                Ok(out)
            }
            None => self.to_vec_in(&SegmentPool::new()),
        }
    }

    /// Like `to_vec`, but renting overflow segments from the caller's pool.
    fn to_vec_in(&self, pool: &SegmentPool<Self::Item>) -> Result<Vec<Self::Item>> {
        let mut buf = SegmentedBuf::new(pool);
        for item in self.iter() {
            buf.push(item)?;
        }
        Ok(buf.finish())
    }

    fn to_boxed_slice(&self) -> Result<Box<[Self::Item]>> {
        Ok(self.to_vec()?.into_boxed_slice())
    }
}

impl<S: Sequence> SequenceExt for S {}
