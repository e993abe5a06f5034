//! Error types for the DESFire transport
//!
//! Transport failures come from the physical link and abort any chain in
//! flight; everything else is a protocol error raised by this crate after
//! a successful exchange.

use crate::status::StatusWord;
use crate::transport::TransportError;

/// Result type for transport operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for all transport operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The physical exchange failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A received status word was neither the expected value nor a
    /// continuation code
    #[error("unexpected status word: expected {expected}, got {actual}")]
    UnexpectedStatus {
        /// Status word the caller expected
        expected: StatusWord,
        /// Status word the card returned
        actual: StatusWord,
    },

    /// A chained exchange exceeded its safety bound
    #[error("command chain exceeded {limit} continuation frames")]
    ChainLimitExceeded {
        /// Configured continuation-frame limit
        limit: usize,
    },

    /// A response was shorter than a status word
    #[error("response too short for a status word: {len} bytes")]
    TruncatedResponse {
        /// Number of bytes actually received
        len: usize,
    },

    /// Command parameters do not fit a short-form Lc byte
    #[error("command data too long for short-form APDU: {len} bytes")]
    DataTooLong {
        /// Number of parameter bytes supplied
        len: usize,
    },

    /// A parameter sub-range fell outside its buffer
    #[error("range {offset}+{length} out of bounds for buffer of {available} bytes")]
    RangeOutOfBounds {
        /// Start of the requested range
        offset: usize,
        /// Length of the requested range
        length: usize,
        /// Length of the underlying buffer
        available: usize,
    },
}

impl Error {
    /// Whether this error came from the physical link
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether this error was raised by the protocol layer itself
    pub const fn is_protocol(&self) -> bool {
        !self.is_transport()
    }
}
