//! Session cryptography for DESFire-family contactless cards
//!
//! Stateless AES-128-CBC and Triple-DES-CBC operations with **no
//! padding**, as required by DESFire session-key authentication and
//! secure messaging: callers supply block-aligned buffers and get back a
//! buffer of exactly the same length.
//!
//! Because secure messaging encrypts and decrypts sub-ranges of larger
//! APDU buffers (status and header bytes are excluded), the decrypt
//! operations come in whole-buffer and offset/length variants; bytes
//! outside the selected range are never read.
//!
//! Every operation is a pure function of its arguments: nothing is
//! retained between calls, and key/IV/message arguments are never
//! mutated. Invalid key, IV or message lengths are reported as typed
//! [`Error`]s before the underlying cipher is invoked. This crate
//! deliberately performs no logging of any kind.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod aes;
pub mod tdes;

mod error;
mod util;

pub use error::{Error, Result};

// Re-export bytes for convenience
pub use bytes::Bytes;

/// AES block length in bytes
pub const AES_BLOCK_LEN: usize = 16;
/// AES-128 key length in bytes
pub const AES_KEY_LEN: usize = 16;
/// DES block length in bytes
pub const DES_BLOCK_LEN: usize = 8;
/// 3DES EDE key length in bytes
pub const TDES_KEY_LEN: usize = 24;
