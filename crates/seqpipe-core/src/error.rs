use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Raised by `first`/`single`/`min`/`max` once the terminal has
    // determined that no qualifying element exists.
    #[error("Sequence contains no element ({terminal})")]
    EmptySequence { terminal: &'static str },

    // Raised as soon as `single`/`single_or_none` observes a second match.
    #[error("Sequence contains more than one element ({terminal})")]
    MultipleElements { terminal: &'static str },

    #[error(
        "Repeated length overflows: {source_len} elements x {times} exceeds {limit}"
    )]
    LengthOverflow {
        source_len: usize,
        times: usize,
        limit: usize,
    },

    #[error("Buffer length exceeds the maximum representable length ({limit})")]
    CapacityOverflow { limit: usize },

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidArgument(e.to_string())
    }
}
