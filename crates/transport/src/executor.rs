//! Command execution and frame chaining
//!
//! This module drives request/response exchanges against a raw
//! [`CardTransport`]. Single-shot commands perform exactly one physical
//! exchange; chained commands keep requesting additional frames for as
//! long as the card answers `91 AF`, reassembling the fragments into one
//! response.

use core::fmt;

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::command::Command;
use crate::constants::status;
use crate::error::{Error, Result};
use crate::response::Response;
use crate::status::StatusWord;
use crate::transport::CardTransport;

/// Default bound on continuation frames per chain
///
/// A DESFire frame carries on the order of fifty data bytes, so this
/// covers the largest file a card can hold with ample headroom. A card
/// that answers `91 AF` past this bound is misbehaving and the chain is
/// aborted with [`Error::ChainLimitExceeded`].
pub const DEFAULT_CHAIN_LIMIT: usize = 256;

/// Trait for DESFire command execution
///
/// Two orthogonal choices, each expressed as its own method: single-shot
/// versus chained exchange, and command-plus-parameters versus a
/// caller-built APDU. The whole-buffer methods are shims over their
/// range variants.
pub trait Executor: Send + Sync + fmt::Debug {
    /// Send a single wrapped command and check the status word
    ///
    /// Performs exactly one physical exchange and returns the data bytes
    /// preceding the status word, which must equal `expected`.
    fn send_command(
        &mut self,
        command: u8,
        parameters: &[u8],
        expected: StatusWord,
    ) -> Result<Bytes> {
        self.send_command_range(command, parameters, 0, parameters.len(), expected)
    }

    /// Like [`send_command`](Self::send_command), taking the parameters
    /// from `parameters[offset..offset + length]`
    fn send_command_range(
        &mut self,
        command: u8,
        parameters: &[u8],
        offset: usize,
        length: usize,
        expected: StatusWord,
    ) -> Result<Bytes>;

    /// Send a wrapped command and follow the additional-frame chain
    ///
    /// Returns the concatenation of every data fragment received; status
    /// words are never part of the result.
    fn send_command_chain(&mut self, command: u8, parameters: &[u8]) -> Result<Bytes> {
        self.send_command_chain_range(command, parameters, 0, parameters.len())
    }

    /// Like [`send_command_chain`](Self::send_command_chain), taking the
    /// parameters from `parameters[offset..offset + length]`
    fn send_command_chain_range(
        &mut self,
        command: u8,
        parameters: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<Bytes>;

    /// Follow the additional-frame chain for a caller-built APDU
    ///
    /// The first frame is sent exactly as given; continuation frames use
    /// the standard `90 AF 00 00 00` envelope.
    fn send_apdu_chain(&mut self, apdu: &[u8]) -> Result<Bytes>;
}

/// Card executor combining a raw transport with the chaining logic
#[derive(Debug)]
pub struct CardExecutor<T: CardTransport> {
    /// The transport used for communication
    transport: T,
    /// Bound on continuation frames per chain
    chain_limit: usize,
}

impl<T: CardTransport> CardExecutor<T> {
    /// Create a new executor with the default chain limit
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            chain_limit: DEFAULT_CHAIN_LIMIT,
        }
    }

    /// Create a new executor with a custom continuation-frame bound
    pub const fn with_chain_limit(transport: T, chain_limit: usize) -> Self {
        Self {
            transport,
            chain_limit,
        }
    }

    /// Get a reference to the underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the underlying transport
    pub const fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Take ownership of the transport and return it
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// The configured continuation-frame bound
    pub const fn chain_limit(&self) -> usize {
        self.chain_limit
    }

    /// One physical exchange, parsed into payload and status word
    fn exchange(&mut self, frame: &[u8]) -> Result<Response> {
        let raw = self.transport.transmit_raw(frame)?;
        Response::from_bytes(&raw)
    }

    /// Drive a chain to completion starting from an already-built frame
    ///
    /// Any transport failure aborts immediately and the accumulated
    /// fragments are discarded.
    fn transmit_chain(&mut self, first: &[u8]) -> Result<Bytes> {
        let mut accumulated = BytesMut::new();
        let mut continuations = 0usize;
        let mut response = self.exchange(first)?;

        loop {
            if let Some(fragment) = response.payload() {
                accumulated.extend_from_slice(fragment);
            }

            let sw = response.status();
            if sw.is_operation_ok() {
                trace!(
                    frames = continuations + 1,
                    total_len = accumulated.len(),
                    "Chain complete"
                );
                return Ok(accumulated.freeze());
            }
            if !sw.is_additional_frame() {
                return Err(Error::UnexpectedStatus {
                    expected: status::OPERATION_OK,
                    actual: sw,
                });
            }
            if continuations >= self.chain_limit {
                return Err(Error::ChainLimitExceeded {
                    limit: self.chain_limit,
                });
            }

            continuations += 1;
            trace!(frame = continuations, "Requesting additional frame");
            response = self.exchange(&Command::additional_frame().to_bytes())?;
        }
    }
}

impl<T: CardTransport> Executor for CardExecutor<T> {
    fn send_command_range(
        &mut self,
        command: u8,
        parameters: &[u8],
        offset: usize,
        length: usize,
        expected: StatusWord,
    ) -> Result<Bytes> {
        let frame = Command::desfire(command, slice_range(parameters, offset, length)?)?;
        let response = self.exchange(&frame.to_bytes())?;

        let sw = response.status();
        if sw != expected {
            return Err(Error::UnexpectedStatus {
                expected,
                actual: sw,
            });
        }
        Ok(response.into_payload())
    }

    fn send_command_chain_range(
        &mut self,
        command: u8,
        parameters: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<Bytes> {
        let frame = Command::desfire(command, slice_range(parameters, offset, length)?)?;
        self.transmit_chain(&frame.to_bytes())
    }

    fn send_apdu_chain(&mut self, apdu: &[u8]) -> Result<Bytes> {
        self.transmit_chain(apdu)
    }
}

/// Borrow `buffer[offset..offset + length]`, with a typed error on overrun
fn slice_range(buffer: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    offset
        .checked_add(length)
        .filter(|&end| end <= buffer.len())
        .map(|end| &buffer[offset..end])
        .ok_or(Error::RangeOutOfBounds {
            offset,
            length,
            available: buffer.len(),
        })
}
