//! Command frame construction
//!
//! Builds the ISO7816-4 short-form APDUs that carry native DESFire
//! commands over an ISO14443-4 link.

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::{cla, ins};
use crate::error::Error;

/// Maximum parameter length a short-form Lc byte can carry
pub const MAX_PARAMETER_LEN: usize = 255;

/// An ISO7816-4 short-form command APDU
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command data (optional)
    pub data: Option<Bytes>,
    /// Expected length (optional)
    pub le: Option<u8>,
}

impl Command {
    /// Create a new command with just the header bytes
    pub const fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: None,
            le: None,
        }
    }

    /// Create a new command with expected response length (Le)
    pub const fn new_with_le(cla: u8, ins: u8, p1: u8, p2: u8, le: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: None,
            le: Some(le),
        }
    }

    /// Wrap a native DESFire command byte and its parameters
    ///
    /// Produces `90 INS 00 00 Lc <parameters> 00`; the Lc byte is omitted
    /// when there are no parameters. Parameters longer than
    /// [`MAX_PARAMETER_LEN`] do not fit a short-form Lc and are rejected.
    pub fn desfire(command: u8, parameters: &[u8]) -> Result<Self, Error> {
        if parameters.len() > MAX_PARAMETER_LEN {
            return Err(Error::DataTooLong {
                len: parameters.len(),
            });
        }

        let mut wrapped = Self::new_with_le(cla::DESFIRE, command, 0x00, 0x00, 0x00);
        if !parameters.is_empty() {
            wrapped.data = Some(Bytes::copy_from_slice(parameters));
        }
        Ok(wrapped)
    }

    /// Continuation frame requesting the next fragment of a chained response
    ///
    /// Produces `90 AF 00 00 00`.
    pub const fn additional_frame() -> Self {
        Self::new_with_le(cla::DESFIRE, ins::ADDITIONAL_FRAME, 0x00, 0x00, 0x00)
    }

    /// Convert to raw APDU bytes
    pub fn to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.encoded_len());

        // Header: CLA, INS, P1, P2
        buffer.put_u8(self.cla);
        buffer.put_u8(self.ins);
        buffer.put_u8(self.p1);
        buffer.put_u8(self.p2);

        // Lc and data if present
        if let Some(data) = self.data.as_ref() {
            buffer.put_u8(data.len() as u8);
            buffer.put_slice(data);
        }

        // Le if present
        if let Some(le) = self.le {
            buffer.put_u8(le);
        }

        buffer.freeze()
    }

    /// Length of the serialized command
    pub fn encoded_len(&self) -> usize {
        let mut length = 4;
        if let Some(data) = self.data.as_ref() {
            length += 1 + data.len();
        }
        if self.le.is_some() {
            length += 1;
        }
        length
    }
}
