//! Map operator: element-wise lazy transformation.

use seqpipe_core::{IndexedSequence, Sequence};

#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }

    /// Fuses consecutive maps into one composed stage, applying the earlier
    /// transform first.
    ///
    /// Evaluation stays lazy: the composed function runs when an element is
    /// produced, and runs again if the same position is produced again.
    /// There is no caching.
    pub fn map<G, R, R2>(self, transform: G) -> Map<S, impl Fn(S::Item) -> R2 + Clone>
    where
        S: Sequence,
        F: Fn(S::Item) -> R + Clone,
        G: Fn(R) -> R2 + Clone,
    {
        let inner = self.transform;
        Map::new(self.source, move |item: S::Item| transform(inner(item)))
    }
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R + Clone,
{
    type Item = R;
    type Iter = MapIter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        MapIter {
            inner: self.source.iter(),
            transform: self.transform.clone(),
        }
    }

    fn exact_len(&self) -> Option<usize> {
        self.source.exact_len()
    }
}

// Indexed upstreams keep O(1) length and indexing; the transform is
// applied on demand per lookup.
impl<S, F, R> IndexedSequence for Map<S, F>
where
    S: IndexedSequence,
    F: Fn(S::Item) -> R + Clone,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<R> {
        self.source.get(index).map(|item| (self.transform)(item))
    }
}

pub struct MapIter<I, F> {
    inner: I,
    transform: F,
}

impl<I, F, R> Iterator for MapIter<I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.inner.next().map(|item| (self.transform)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
