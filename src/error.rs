//! Error types for page fetching.

use thiserror::Error;

/// Failure modes of a single page fetch.
///
/// `Clone` because the page cache shares one result among all callers
/// coalesced onto the same in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network failure or non-success HTTP status.
    #[error("{message}")]
    Transport { message: String },

    /// Response body could not be decoded as the expected JSON shape.
    #[error("{message}")]
    Decode { message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
