//! Source adapters: wrap concrete containers as pipeline-ready sequences.
//!
//! Contiguous-buffer adapters (`SliceSeq`, `SharedSeq`) and the factory
//! sequences expose O(1) length and indexing so terminals can bypass full
//! traversal. `IterSeq` covers generic iterables without random access;
//! `OnceSeq` is the documented single-pass exception.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;

use seqpipe_core::{Error, IndexedSequence, Result, Sequence};

/// Sequence over a borrowed contiguous buffer. Elements are cloned out on
/// yield.
pub struct SliceSeq<'a, T> {
    data: &'a [T],
}

impl<T> Clone for SliceSeq<'_, T> {
    fn clone(&self) -> Self {
        Self { data: self.data }
    }
}

impl<T> Copy for SliceSeq<'_, T> {}

impl<'a, T: Clone> Sequence for SliceSeq<'a, T> {
    type Item = T;
    type Iter = std::iter::Cloned<std::slice::Iter<'a, T>>;

    fn iter(&self) -> Self::Iter {
        self.data.iter().cloned()
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

impl<T: Clone> IndexedSequence for SliceSeq<'_, T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).cloned()
    }
}

/// Sequence over an owned, shared contiguous buffer (`Arc<[T]>`).
///
/// Cheap to clone and `'static`, which makes it the owned counterpart of
/// `SliceSeq` and the natural choice for boxed pipelines.
pub struct SharedSeq<T> {
    data: Arc<[T]>,
}

impl<T> Clone for SharedSeq<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone> Sequence for SharedSeq<T> {
    type Item = T;
    type Iter = SharedIter<T>;

    fn iter(&self) -> Self::Iter {
        SharedIter {
            data: Arc::clone(&self.data),
            pos: 0,
        }
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

impl<T: Clone> IndexedSequence for SharedSeq<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).cloned()
    }
}

pub struct SharedIter<T> {
    data: Arc<[T]>,
    pos: usize,
}

impl<T: Clone> Iterator for SharedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.data.get(self.pos).cloned()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

/// Arithmetic progression of `i64` values with step 1.
#[derive(Clone, Copy)]
pub struct RangeSeq {
    start: i64,
    count: usize,
}

impl Sequence for RangeSeq {
    type Item = i64;
    type Iter = std::ops::Range<i64>;

    fn iter(&self) -> Self::Iter {
        // Construction validated that `start + count` stays in range.
        self.start..self.start + self.count as i64
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.count)
    }
}

impl IndexedSequence for RangeSeq {
    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Option<i64> {
        if index < self.count {
            Some(self.start + index as i64)
        } else {
            None
        }
    }
}

/// The zero-element sequence.
pub struct EmptySeq<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for EmptySeq<T> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Copy for EmptySeq<T> {}

impl<T> Sequence for EmptySeq<T> {
    type Item = T;
    type Iter = std::iter::Empty<T>;

    fn iter(&self) -> Self::Iter {
        std::iter::empty()
    }

    fn exact_len(&self) -> Option<usize> {
        Some(0)
    }
}

impl<T> IndexedSequence for EmptySeq<T> {
    fn len(&self) -> usize {
        0
    }

    fn get(&self, _index: usize) -> Option<T> {
        None
    }
}

/// One value repeated a fixed number of times.
#[derive(Clone)]
pub struct RepeatValueSeq<T> {
    value: T,
    count: usize,
}

impl<T: Clone> Sequence for RepeatValueSeq<T> {
    type Item = T;
    type Iter = std::iter::Take<std::iter::Repeat<T>>;

    fn iter(&self) -> Self::Iter {
        std::iter::repeat(self.value.clone()).take(self.count)
    }

    fn exact_len(&self) -> Option<usize> {
        Some(self.count)
    }
}

impl<T: Clone> IndexedSequence for RepeatValueSeq<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Option<T> {
        if index < self.count {
            Some(self.value.clone())
        } else {
            None
        }
    }
}

/// Re-iterable adapter over a generic iterable without random access.
///
/// Each traversal clones the iterable; the clone must produce the same
/// elements for the sequence to be re-iterable.
#[derive(Clone)]
pub struct IterSeq<I> {
    inner: I,
}

impl<I> Sequence for IterSeq<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Iter = std::iter::Fuse<I::IntoIter>;

    fn iter(&self) -> Self::Iter {
        self.inner.clone().into_iter().fuse()
    }
}

/// Single-pass adapter over an external iterator.
///
/// The first traversal consumes the iterator; every later traversal is
/// empty. Not safe for concurrent traversal. This is the caller-contract
/// exception to re-iterability.
pub struct OnceSeq<I> {
    inner: RefCell<Option<I>>,
}

impl<I: Iterator> Sequence for OnceSeq<I> {
    type Item = I::Item;
    type Iter = OnceIter<I>;

    fn iter(&self) -> Self::Iter {
        OnceIter {
            inner: self.inner.borrow_mut().take().map(Iterator::fuse),
        }
    }
}

pub struct OnceIter<I> {
    inner: Option<std::iter::Fuse<I>>,
}

impl<I: Iterator> Iterator for OnceIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.as_mut()?.next()
    }
}

// ----- factory entry points -----

/// `count` integers starting at `start`.
///
/// Fails at construction when the end of the range is not representable.
pub fn range(start: i64, count: usize) -> Result<RangeSeq> {
    let count_i64 = i64::try_from(count)
        .map_err(|_| Error::InvalidArgument(format!("range count {count} too large")))?;
    start.checked_add(count_i64).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "range start {start} + count {count} overflows i64"
        ))
    })?;
    Ok(RangeSeq { start, count })
}

pub fn empty<T>() -> EmptySeq<T> {
    EmptySeq {
        _marker: PhantomData,
    }
}

pub fn repeat_value<T: Clone>(value: T, count: usize) -> RepeatValueSeq<T> {
    RepeatValueSeq { value, count }
}

pub fn from_slice<T: Clone>(data: &[T]) -> SliceSeq<'_, T> {
    SliceSeq { data }
}

pub fn from_vec<T: Clone>(data: Vec<T>) -> SharedSeq<T> {
    SharedSeq { data: data.into() }
}

pub fn from_iter<I: IntoIterator + Clone>(iterable: I) -> IterSeq<I> {
    IterSeq { inner: iterable }
}

pub fn once_iter<I: Iterator>(iter: I) -> OnceSeq<I> {
    OnceSeq {
        inner: RefCell::new(Some(iter)),
    }
}
