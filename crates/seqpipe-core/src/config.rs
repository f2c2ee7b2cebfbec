//! Pool configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Capacity of the first pooled segment rented when the inline segment
    /// is exhausted. Each further segment doubles the previous request.
    pub min_segment: usize,

    /// How many returned segments the pool keeps around for reuse. Segments
    /// returned beyond this count are simply dropped.
    pub max_retained_segments: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_segment: 16,
            max_retained_segments: 8,
        }
    }
}

impl PoolConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQPIPE_MIN_SEGMENT`: first pooled segment capacity
    /// - `SEQPIPE_MAX_RETAINED_SEGMENTS`: pool retention bound
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQPIPE_MIN_SEGMENT") {
            if let Ok(v) = s.parse::<usize>() {
                if v > 0 {
                    cfg.min_segment = v;
                }
            }
        }

        if let Ok(s) = std::env::var("SEQPIPE_MAX_RETAINED_SEGMENTS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_retained_segments = v;
            }
        }

        cfg
    }

    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Fail early on values the pool cannot operate with.
    pub fn validate(&self) -> Result<()> {
        if self.min_segment == 0 {
            return Err(Error::InvalidArgument(
                "min_segment must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
