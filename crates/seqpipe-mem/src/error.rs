use thiserror::Error;

/// Result type local to seqpipe-mem.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("buffer length exceeds the maximum representable length ({limit})")]
    CapacityOverflow { limit: usize },

    #[error("pool configuration error: {0}")]
    Config(String),
}

impl From<Error> for seqpipe_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::CapacityOverflow { limit } => {
                seqpipe_core::Error::CapacityOverflow { limit }
            }
            Error::Config(msg) => seqpipe_core::Error::InvalidArgument(msg),
        }
    }
}
