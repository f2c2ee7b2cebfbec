#![forbid(unsafe_code)]
//! seqpipe: composable, allocation-conscious lazy sequence pipelines.
//!
//! Chained operators execute in a single pass, fuse at construction time,
//! and materialize with one exact-size final allocation backed by a
//! rent/return segment pool.
//!
//! ```
//! use seqpipe::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let out = seqpipe::from_slice(&data)
//!     .filter(|x: &i32| x % 2 == 0)
//!     .map(|x| x * 2)
//!     .to_vec()?;
//! assert_eq!(out, vec![4, 8, 12]);
//! # Ok::<(), seqpipe::Error>(())
//! ```

pub use seqpipe_core::{
    BoxedSeq, DynSequence, Error, IndexedSequence, PoolConfig, Result, Sequence,
};
pub use seqpipe_mem::{PoolStats, PooledSegment, SegmentPool, SegmentedBuf, INLINE_LEN};
pub use seqpipe_ops::{
    empty, from_iter, from_slice, from_vec, once_iter, range, repeat_value, EmptySeq,
    Filter, FilterMap, IterSeq, Map, OnceSeq, RangeSeq, Repeat, RepeatForever,
    RepeatValueSeq, SequenceExt, SharedSeq, SkipTake, SliceSeq,
};

pub mod prelude {
    //! One-stop import for pipeline construction.

    pub use seqpipe_core::{Error, IndexedSequence, Result, Sequence};
    pub use seqpipe_ops::{
        empty, from_iter, from_slice, from_vec, once_iter, range, repeat_value,
        SequenceExt,
    };
}
