//! Response parsing
//!
//! Splits a raw exchange into its data payload and trailing status word.

use bytes::Bytes;

use crate::error::Error;
use crate::status::StatusWord;

/// A card response: data payload plus trailing status word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response payload data, without the status word
    payload: Option<Bytes>,
    /// Status word
    status: StatusWord,
}

impl Response {
    /// Create a new response with payload and status
    pub fn new(payload: Option<Bytes>, status: impl Into<StatusWord>) -> Self {
        Self {
            payload,
            status: status.into(),
        }
    }

    /// Parse a response from raw bytes (payload followed by SW1 SW2)
    pub fn from_bytes(data: &Bytes) -> Result<Self, Error> {
        if data.len() < 2 {
            return Err(Error::TruncatedResponse { len: data.len() });
        }

        let split = data.len() - 2;
        let status = StatusWord::new(data[split], data[split + 1]);
        let payload = (split > 0).then(|| data.slice(..split));

        Ok(Self { payload, status })
    }

    /// Get the response payload data
    pub const fn payload(&self) -> Option<&Bytes> {
        self.payload.as_ref()
    }

    /// Get the status word
    pub const fn status(&self) -> StatusWord {
        self.status
    }

    /// Consume the response, returning the payload (empty when absent)
    pub fn into_payload(self) -> Bytes {
        self.payload.unwrap_or_default()
    }
}

impl TryFrom<&[u8]> for Response {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Error> {
        Self::from_bytes(&Bytes::copy_from_slice(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_response_from_bytes() {
        let data = Bytes::from_static(&hex!("0102039100"));
        let resp = Response::from_bytes(&data).unwrap();
        assert_eq!(resp.payload().unwrap().as_ref(), &hex!("010203"));
        assert_eq!(resp.status(), StatusWord::new(0x91, 0x00));
        assert!(resp.status().is_operation_ok());
    }

    #[test]
    fn test_response_status_only() {
        let data = Bytes::from_static(&hex!("91AF"));
        let resp = Response::from_bytes(&data).unwrap();
        assert!(resp.payload().is_none());
        assert!(resp.status().is_additional_frame());
        assert_eq!(resp.into_payload().len(), 0);
    }

    #[test]
    fn test_response_truncated() {
        let data = Bytes::from_static(&[0x91]);
        assert!(matches!(
            Response::from_bytes(&data),
            Err(Error::TruncatedResponse { len: 1 })
        ));

        let data = Bytes::new();
        assert!(matches!(
            Response::from_bytes(&data),
            Err(Error::TruncatedResponse { len: 0 })
        ));
    }
}
