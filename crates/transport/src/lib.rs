//! Command transport for DESFire-family contactless cards
//!
//! This crate implements the command-transport layer used to talk to a
//! DESFire card over an ISO14443-4 / ISO7816-4 link:
//!
//! - wrapping native DESFire commands in ISO7816-4 short-form APDUs;
//! - driving multi-frame exchanges: while the card answers `91 AF`, a
//!   continuation frame is sent and the data fragments are reassembled
//!   into a single response, status words stripped;
//! - validating final status words against caller expectations, with
//!   typed errors carrying the expected and actual values.
//!
//! The physical link is supplied by the caller as a [`CardTransport`]:
//! a synchronous one-frame-out, one-frame-back exchange primitive. This
//! crate never performs NFC discovery or polling and holds no card or
//! session state of its own.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};

pub mod command;
pub mod constants;
pub mod executor;
pub mod response;
pub mod status;
pub mod transport;

mod error;
pub use error::{Error, Result};

// Re-exports for common types
pub use command::Command;
pub use executor::{CardExecutor, DEFAULT_CHAIN_LIMIT, Executor};
pub use response::Response;
pub use status::StatusWord;
pub use transport::{CardTransport, TransportError};

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{
        Bytes, BytesMut, CardExecutor, CardTransport, Command, Error, Executor, Response, Result,
        StatusWord, TransportError,
    };
}
