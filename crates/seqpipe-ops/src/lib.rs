#![forbid(unsafe_code)]
//! seqpipe-ops: source adapters, fused operators, and terminals.
//!
//! Design intent:
//! - Everything here is pure and synchronous (no async, no internal
//!   threads).
//! - Operators are immutable descriptor values composed at construction
//!   time; adjacent compatible stages fuse into one (see `filter`/`map`).
//! - Materialization flows through `seqpipe-mem` so pooled segments are
//!   acquired and released with strict accounting.

pub mod filter;
pub mod map;
pub mod repeat;
pub mod source;
pub mod traits;
pub mod window;

pub use filter::{Filter, FilterMap};
pub use map::Map;
pub use repeat::{Repeat, RepeatForever};
pub use source::{
    empty, from_iter, from_slice, from_vec, once_iter, range, repeat_value, EmptySeq,
    IterSeq, OnceSeq, RangeSeq, RepeatValueSeq, SharedSeq, SliceSeq,
};
pub use traits::SequenceExt;
pub use window::SkipTake;
