//! AES-128-CBC with no padding
//!
//! Used by the AES secure-messaging mode. Callers supply block-aligned
//! buffers; nothing is padded or truncated on either side.

use bytes::{Bytes, BytesMut};
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::NoPadding};

use crate::error::{Error, Result};
use crate::util::{check_aligned, check_iv, check_key, sub_range};
use crate::{AES_BLOCK_LEN, AES_KEY_LEN};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Encrypt a block-aligned message with AES-128-CBC
///
/// The returned buffer has exactly the length of `message`; the key and
/// IV arguments are never modified.
pub fn encrypt(key: &[u8], iv: &[u8], message: &[u8]) -> Result<Bytes> {
    check_key(key, AES_KEY_LEN)?;
    check_iv(iv, AES_BLOCK_LEN)?;
    check_aligned(message.len(), AES_BLOCK_LEN)?;

    let mut buf = BytesMut::from(message);
    let len = buf.len();
    Aes128CbcEnc::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidKeyLength {
            expected: AES_KEY_LEN,
            actual: key.len(),
        })?
        .encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .map_err(|_| Error::UnalignedLength {
            length: len,
            block_size: AES_BLOCK_LEN,
        })?;
    Ok(buf.freeze())
}

/// Decrypt a block-aligned message with AES-128-CBC
pub fn decrypt(key: &[u8], iv: &[u8], message: &[u8]) -> Result<Bytes> {
    decrypt_range(key, iv, message, 0, message.len())
}

/// Decrypt `message[offset..offset + length]` with AES-128-CBC
///
/// Bytes outside the range are never read; the range itself must be
/// block-aligned.
pub fn decrypt_range(
    key: &[u8],
    iv: &[u8],
    message: &[u8],
    offset: usize,
    length: usize,
) -> Result<Bytes> {
    let range = sub_range(message, offset, length)?;
    check_key(key, AES_KEY_LEN)?;
    check_iv(iv, AES_BLOCK_LEN)?;
    check_aligned(range.len(), AES_BLOCK_LEN)?;

    let mut buf = BytesMut::from(range);
    Aes128CbcDec::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidKeyLength {
            expected: AES_KEY_LEN,
            actual: key.len(),
        })?
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| Error::UnalignedLength {
            length: range.len(),
            block_size: AES_BLOCK_LEN,
        })?;
    Ok(buf.freeze())
}
