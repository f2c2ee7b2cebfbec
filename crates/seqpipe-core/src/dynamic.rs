//! Dynamic-dispatch fallback for pipelines whose concrete source type is
//! not visible at the call site.
//!
//! The generic path monomorphizes and should be preferred; `BoxedSeq` is
//! the safety net: one indirect call per element, uniform type. Sources
//! whose iterators borrow local data (e.g. a slice adapter over a stack
//! buffer) cannot be boxed; use an owning adapter instead.

use std::sync::Arc;

use crate::sequence::Sequence;

/// Object-safe mirror of [`Sequence`].
///
/// Implemented automatically for every sequence whose cursor owns its
/// state (`Iter: 'static`).
pub trait DynSequence<T>: Send + Sync {
    fn dyn_iter(&self) -> Box<dyn Iterator<Item = T>>;

    fn dyn_exact_len(&self) -> Option<usize>;
}

impl<S> DynSequence<S::Item> for S
where
    S: Sequence + Send + Sync,
    S::Iter: 'static,
{
    fn dyn_iter(&self) -> Box<dyn Iterator<Item = S::Item>> {
        Box::new(self.iter())
    }

    fn dyn_exact_len(&self) -> Option<usize> {
        self.exact_len()
    }
}

/// Uniform, indirectly-dispatched sequence handle.
///
/// Cheap to clone (shared descriptor); each traversal still gets an
/// independent boxed cursor.
pub struct BoxedSeq<T> {
    inner: Arc<dyn DynSequence<T>>,
}

impl<T> Clone for BoxedSeq<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> BoxedSeq<T> {
    pub fn new<S>(source: S) -> Self
    where
        S: Sequence<Item = T> + Send + Sync + 'static,
        S::Iter: 'static,
    {
        Self {
            inner: Arc::new(source),
        }
    }
}

impl<T> Sequence for BoxedSeq<T> {
    type Item = T;
    type Iter = Box<dyn Iterator<Item = T>>;

    fn iter(&self) -> Self::Iter {
        self.inner.dyn_iter()
    }

    fn exact_len(&self) -> Option<usize> {
        self.inner.dyn_exact_len()
    }
}
