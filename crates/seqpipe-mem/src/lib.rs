#![forbid(unsafe_code)]
//! seqpipe-mem: segment pool and growable segmented buffer.
//!
//! This crate provides the materialization memory layer for the pipeline
//! engine: a thread-safe rent/return segment pool with strict accounting,
//! and the append-only segmented buffer that turns a traversal of unknown
//! length into one exactly-sized `Vec` with a single final allocation.
//!
//! No async or IO lives here.

pub mod error;
pub mod pool;
pub mod segbuf;
pub mod tracking;

pub use error::{Error, Result};
pub use pool::{PoolStats, PooledSegment, SegmentPool};
pub use segbuf::{SegmentedBuf, INLINE_LEN};
