//! Convenient re-exports for downstream crates.

pub use crate::config::PoolConfig;
pub use crate::dynamic::{BoxedSeq, DynSequence};
pub use crate::error::{Error, Result};
pub use crate::sequence::{IndexedSequence, Sequence};
