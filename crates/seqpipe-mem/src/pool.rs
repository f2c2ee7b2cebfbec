//! Segment pool with strict rent/return accounting.
//!
//! Every overflow segment used during materialization is rented here and
//! returned on drop, so a materialization that stops early (or fails) can
//! never leak a segment. The pool is the only shared resource in the
//! workspace; acquire/release is thread-safe here so the buffer does not
//! have to reimplement it.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::Lazy;
use seqpipe_core::PoolConfig;

use crate::error::{Error, Result};
use crate::tracking::PeakTracker;

/// Process-wide config snapshot backing `SegmentPool::new`.
static SHARED_CONFIG: Lazy<PoolConfig> = Lazy::new(PoolConfig::from_env);

struct PoolInner<T> {
    config: PoolConfig,
    free: Mutex<Vec<Vec<T>>>,
    rented: AtomicUsize,
    returned: AtomicUsize,
    peak: PeakTracker,
}

/// Shared handle to a pool of reusable segments for one element type.
///
/// Cloning shares the same pool.
pub struct SegmentPool<T> {
    inner: Arc<PoolInner<T>>,
}

impl<T> Clone for SegmentPool<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SegmentPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Advisory counters; `rented == returned` must hold whenever no buffer is
/// live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub rented: usize,
    pub returned: usize,
    pub retained: usize,
    pub peak_outstanding: usize,
}

impl<T> SegmentPool<T> {
    /// Pool using the process-wide environment config.
    pub fn new() -> Self {
        // `PoolConfig::from_env` only accepts valid values, so this cannot
        // fail validation.
        Self::from_parts(SHARED_CONFIG.clone())
    }

    pub fn with_config(config: PoolConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: PoolConfig) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                config,
                free: Mutex::new(Vec::new()),
                rented: AtomicUsize::new(0),
                returned: AtomicUsize::new(0),
                peak: PeakTracker::new(),
            }),
        }
    }

    /// Take a segment with at least `min_capacity` spare room, reusing a
    /// returned one when possible. The segment goes back to the pool when
    /// the returned guard is dropped.
    pub fn rent(&self, min_capacity: usize) -> PooledSegment<T> {
        let buf = {
            let mut free = self
                .inner
                .free
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match free.iter().position(|b| b.capacity() >= min_capacity) {
                Some(i) => free.remove(i),
                None => Vec::with_capacity(min_capacity),
            }
        };

        let rented = self.inner.rented.fetch_add(1, Ordering::AcqRel) + 1;
        let returned = self.inner.returned.load(Ordering::Acquire);
        let outstanding = rented.saturating_sub(returned);
        self.inner.peak.record(outstanding);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            capacity = buf.capacity(),
            outstanding,
            "segment rented"
        );

        PooledSegment {
            inner: Arc::clone(&self.inner),
            buf,
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.inner.config
    }

    pub fn stats(&self) -> PoolStats {
        let retained = self
            .inner
            .free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        PoolStats {
            rented: self.inner.rented.load(Ordering::Acquire),
            returned: self.inner.returned.load(Ordering::Acquire),
            retained,
            peak_outstanding: self.inner.peak.peak(),
        }
    }
}

/// RAII guard over one rented segment.
///
/// Dereferences to the underlying `Vec<T>`. Dropping it clears the segment
/// and hands the allocation back to the pool exactly once (panic-safe).
pub struct PooledSegment<T> {
    inner: Arc<PoolInner<T>>,
    buf: Vec<T>,
}

impl<T> Deref for PooledSegment<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T> DerefMut for PooledSegment<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T> Drop for PooledSegment<T> {
    fn drop(&mut self) {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        {
            let mut free = self
                .inner
                .free
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if free.len() < self.inner.config.max_retained_segments {
                free.push(buf);
            }
        }
        self.inner.returned.fetch_add(1, Ordering::AcqRel);
        // NOTE: do not log here to keep the drop path fast.
    }
}
