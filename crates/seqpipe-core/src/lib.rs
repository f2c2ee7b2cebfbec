#![forbid(unsafe_code)]
//! seqpipe-core: sequence contracts, canonical errors, and pool config.
//!
//! This crate holds only the *interfaces* the rest of the workspace builds
//! on: the `Sequence`/`IndexedSequence` traversal contract, the boxed
//! dynamic fallback, the canonical error taxonomy, and the pool
//! configuration. Source adapters and operators live in `seqpipe-ops`; the
//! segment pool and materialization buffer live in `seqpipe-mem`.

pub mod config;
pub mod dynamic;
pub mod error;
pub mod prelude;
pub mod sequence;

pub use config::PoolConfig;
pub use dynamic::{BoxedSeq, DynSequence};
pub use error::{Error, Result};
pub use sequence::{IndexedSequence, Sequence};
