//! Filter operator: order-preserving subsequence selection.
//!
//! The predicate is re-evaluated on every traversal; nothing is memoized
//! across traversals.

use seqpipe_core::Sequence;

#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }

    /// Fuses with a following map into one combined stage.
    ///
    /// The predicate always tests the pre-transform value; the transform
    /// runs only on elements that pass. Filter-before-map ordering is part
    /// of the contract and is never reordered.
    pub fn map<F, R>(self, transform: F) -> FilterMap<S, P, F>
    where
        S: Sequence,
        P: Fn(&S::Item) -> bool + Clone,
        F: Fn(S::Item) -> R + Clone,
    {
        FilterMap {
            source: self.source,
            predicate: self.predicate,
            transform,
        }
    }

    /// Fuses two adjacent filters into one conjunction stage, observably
    /// identical to running both separately.
    pub fn filter<Q>(self, predicate: Q) -> Filter<S, impl Fn(&S::Item) -> bool + Clone>
    where
        S: Sequence,
        P: Fn(&S::Item) -> bool + Clone,
        Q: Fn(&S::Item) -> bool + Clone,
    {
        let first = self.predicate;
        Filter::new(self.source, move |item: &S::Item| {
            first(item) && predicate(item)
        })
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Iter = FilterIter<S::Iter, P>;

    fn iter(&self) -> Self::Iter {
        FilterIter {
            inner: self.source.iter(),
            predicate: self.predicate.clone(),
        }
    }
}

pub struct FilterIter<I, P> {
    inner: I,
    predicate: P,
}

impl<I, P> Iterator for FilterIter<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            match self.inner.next() {
                Some(item) if (self.predicate)(&item) => return Some(item),
                Some(_) => continue,
                None => return None,
            }
        }
    }
}

/// Fusion composite of a filter stage and a map stage.
#[derive(Clone)]
pub struct FilterMap<S, P, F> {
    source: S,
    predicate: P,
    transform: F,
}

impl<S, P, F> FilterMap<S, P, F> {
    /// Fuses a further map by composing the transforms, earlier one first.
    pub fn map<G, R, R2>(
        self,
        transform: G,
    ) -> FilterMap<S, P, impl Fn(S::Item) -> R2 + Clone>
    where
        S: Sequence,
        F: Fn(S::Item) -> R + Clone,
        G: Fn(R) -> R2 + Clone,
    {
        let inner = self.transform;
        FilterMap {
            source: self.source,
            predicate: self.predicate,
            transform: move |item: S::Item| transform(inner(item)),
        }
    }
}

impl<S, P, F, R> Sequence for FilterMap<S, P, F>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
    F: Fn(S::Item) -> R + Clone,
{
    type Item = R;
    type Iter = FilterMapIter<S::Iter, P, F>;

    fn iter(&self) -> Self::Iter {
        FilterMapIter {
            inner: self.source.iter(),
            predicate: self.predicate.clone(),
            transform: self.transform.clone(),
        }
    }
}

pub struct FilterMapIter<I, P, F> {
    inner: I,
    predicate: P,
    transform: F,
}

impl<I, P, F, R> Iterator for FilterMapIter<I, P, F>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
    F: Fn(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            match self.inner.next() {
                Some(item) if (self.predicate)(&item) => {
                    return Some((self.transform)(item))
                }
                Some(_) => continue,
                None => return None,
            }
        }
    }
}
