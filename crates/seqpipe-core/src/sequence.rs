//! The traversal contract every source adapter and operator implements.
//!
//! A sequence is an immutable value describing how to produce an ordered,
//! possibly infinite stream of items. Traversal state lives entirely in the
//! iterator returned by `iter()`, so independent traversals never interfere
//! and a sequence over a reusable source may be walked from several threads
//! at once. Operators are generic over `S: Sequence` and monomorphize per
//! concrete source, which keeps the per-element path free of indirect calls
//! whenever the source type is statically known (see `dynamic` for the
//! boxed fallback).

/// Lazily evaluated, re-iterable stream of `Item`s.
///
/// Invariants:
/// - `iter()` returns a fresh, independent cursor; calling it never
///   observes or disturbs other traversals.
/// - Iterators keep returning `None` once exhausted (idempotent
///   termination). Adapters over foreign iterators must `fuse()` them.
/// - The single-pass exception (`OnceSeq` in the ops crate) documents its
///   deviation: later traversals are empty.
pub trait Sequence {
    type Item;
    type Iter: Iterator<Item = Self::Item>;

    /// Fresh cursor positioned before the first element.
    fn iter(&self) -> Self::Iter;

    /// Exact number of elements when knowable without traversal.
    ///
    /// Terminals use this to bypass full traversal (`count`) and to
    /// materialize with a single up-front allocation. Operators that cannot
    /// know their output length (filter, infinite repeat) return `None`.
    fn exact_len(&self) -> Option<usize> {
        None
    }
}

/// Random access for sequences whose backing structure supports O(1)
/// length and element lookup.
///
/// `get` yields the element by value, applying any pending lazy transform
/// on demand; it returns `None` past the end.
pub trait IndexedSequence: Sequence {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
