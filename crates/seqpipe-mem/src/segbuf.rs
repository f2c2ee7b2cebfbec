//! Growable segmented buffer used to materialize a traversal.
//!
//! Appends land in a fixed inline segment first (no heap backing), then in
//! pooled segments whose requested capacities double per growth. `finish`
//! performs the single exact-size allocation for the final result and
//! returns every pooled segment; so does dropping the buffer early.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::pool::{PooledSegment, SegmentPool};

/// Elements held before the pool is touched at all.
pub const INLINE_LEN: usize = 8;

pub struct SegmentedBuf<T> {
    pool: SegmentPool<T>,
    inline: SmallVec<[T; INLINE_LEN]>,
    segments: Vec<PooledSegment<T>>,
    next_capacity: usize,
    len: usize,
}

impl<T> SegmentedBuf<T> {
    pub fn new(pool: &SegmentPool<T>) -> Self {
        Self {
            pool: pool.clone(),
            inline: SmallVec::new(),
            segments: Vec::new(),
            next_capacity: pool.config().min_segment,
            len: 0,
        }
    }

    /// Number of successful appends so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one element, growing into a freshly rented segment when the
    /// current one is full.
    pub fn push(&mut self, item: T) -> Result<()> {
        let next_len = self
            .len
            .checked_add(1)
            .ok_or(Error::CapacityOverflow { limit: usize::MAX })?;

        if self.segments.is_empty() && self.inline.len() < INLINE_LEN {
            self.inline.push(item);
            self.len = next_len;
            return Ok(());
        }

        let needs_segment = match self.segments.last() {
            Some(seg) => seg.len() == seg.capacity(),
            None => true,
        };
        if needs_segment {
            let requested = self.next_capacity;
            let seg = self.pool.rent(requested);
            // A reused segment may be larger than requested; keep the
            // capacity progression strictly increasing either way.
            self.next_capacity = seg.capacity().max(requested).saturating_mul(2);
            self.segments.push(seg);
        }
        if let Some(seg) = self.segments.last_mut() {
            seg.push(item);
        }
        self.len = next_len;
        Ok(())
    }

    /// Copy all filled segment portions, in order, into one exactly-sized
    /// `Vec`. Pooled segments are returned as they drain.
    pub fn finish(self) -> Vec<T> {
        let Self {
            pool: _pool,
            mut inline,
            mut segments,
            next_capacity: _,
            len,
        } = self;

        #[cfg(feature = "tracing")]
        tracing::trace!(len, segments = segments.len(), "materializing buffer");

        let mut out = Vec::with_capacity(len);
        out.extend(inline.drain(..));
        for mut seg in segments.drain(..) {
            out.extend(seg.drain(..));
        }
        out
    }
}
