//! Error types for cipher operations
//!
//! Every argument is validated before the underlying cipher primitive is
//! touched; a failed validation never produces partial or garbage output.

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for cipher operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key does not match the cipher's key size
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Key length the cipher requires
        expected: usize,
        /// Key length actually supplied
        actual: usize,
    },

    /// The IV does not match the cipher's block size
    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength {
        /// IV length the cipher requires
        expected: usize,
        /// IV length actually supplied
        actual: usize,
    },

    /// The message (or selected range) is not block-aligned
    #[error("message length {length} is not a multiple of the {block_size}-byte block size")]
    UnalignedLength {
        /// Length of the message or selected range
        length: usize,
        /// Block size of the cipher
        block_size: usize,
    },

    /// A sub-range fell outside its buffer
    #[error("range {offset}+{length} out of bounds for buffer of {available} bytes")]
    RangeOutOfBounds {
        /// Start of the requested range
        offset: usize,
        /// Length of the requested range
        length: usize,
        /// Length of the underlying buffer
        available: usize,
    },

    /// DES key material is not one of the accepted widths
    #[error("DES key material must be 8, 16 or 24 bytes, got {actual}")]
    InvalidDesKeyLength {
        /// Key length actually supplied
        actual: usize,
    },
}
