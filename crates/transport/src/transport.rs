//! Transport layer for card communication
//!
//! This module provides the trait for the raw byte-exchange collaborator:
//! one physical frame out, one physical frame back.

use std::fmt;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised by the physical link
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to connect to the reader or card
    #[error("failed to connect to device")]
    Connection,

    /// Failed to transmit data
    #[error("failed to transmit data")]
    Transmission,

    /// Reader or device error
    #[error("device error")]
    Device,

    /// The tag left the field during an exchange
    #[error("tag lost")]
    TagLost,

    /// Operation timed out
    #[error("operation timed out")]
    Timeout,

    /// Operation cancelled
    #[error("operation cancelled")]
    Cancelled,

    /// Other error with message
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Create a general other error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other(message.into())
    }
}

/// Trait for raw card transports
///
/// A transport is responsible for exchanging raw frames with the card. It
/// has no knowledge of command structure, chaining, or status words.
pub trait CardTransport: Send + Sync + fmt::Debug {
    /// Send raw bytes to the card and return the response bytes
    ///
    /// Logs the exchange at `trace` level before delegating to
    /// [`do_transmit_raw`](Self::do_transmit_raw).
    fn transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        trace!(command = ?hex::encode(command), "Transmitting raw frame");
        let result = self.do_transmit_raw(command);
        match &result {
            Ok(response) => {
                trace!(response = ?hex::encode(response), "Received raw frame");
            }
            Err(e) => {
                debug!(error = ?e, "Transport error during transmission");
            }
        }
        result
    }

    /// Internal implementation of transmit_raw
    ///
    /// This is the method concrete implementations should override.
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError>;

    /// Reset the transport connection
    fn reset(&mut self) -> Result<(), TransportError>;
}

#[cfg(test)]
pub(crate) use mock::MockTransport;
