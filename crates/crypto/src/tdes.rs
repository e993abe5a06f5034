//! Triple-DES-CBC with no padding
//!
//! Used by the legacy DES/3DES authentication and secure-messaging modes.
//! The engine takes 24-byte EDE key material; [`widen_key`] admits the 8-
//! and 16-byte forms DESFire cards store.

use bytes::{Bytes, BytesMut};
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::NoPadding};
use des::TdesEde3;

use crate::error::{Error, Result};
use crate::util::{check_aligned, check_iv, check_key, sub_range};
use crate::{DES_BLOCK_LEN, TDES_KEY_LEN};

type TdesCbcEnc = cbc::Encryptor<TdesEde3>;
type TdesCbcDec = cbc::Decryptor<TdesEde3>;

/// Encrypt a block-aligned message with 3DES-CBC
///
/// The returned buffer has exactly the length of `message`; the key and
/// IV arguments are never modified.
pub fn encrypt(key: &[u8], iv: &[u8], message: &[u8]) -> Result<Bytes> {
    check_key(key, TDES_KEY_LEN)?;
    check_iv(iv, DES_BLOCK_LEN)?;
    check_aligned(message.len(), DES_BLOCK_LEN)?;

    let mut buf = BytesMut::from(message);
    let len = buf.len();
    TdesCbcEnc::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidKeyLength {
            expected: TDES_KEY_LEN,
            actual: key.len(),
        })?
        .encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .map_err(|_| Error::UnalignedLength {
            length: len,
            block_size: DES_BLOCK_LEN,
        })?;
    Ok(buf.freeze())
}

/// Decrypt a block-aligned message with 3DES-CBC
pub fn decrypt(key: &[u8], iv: &[u8], message: &[u8]) -> Result<Bytes> {
    decrypt_range(key, iv, message, 0, message.len())
}

/// Decrypt `message[offset..offset + length]` with 3DES-CBC
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
    check_key(key, TDES_KEY_LEN)?;
    check_iv(iv, DES_BLOCK_LEN)?;
    check_aligned(range.len(), DES_BLOCK_LEN)?;

    let mut buf = BytesMut::from(range);
    TdesCbcDec::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidKeyLength {
            expected: TDES_KEY_LEN,
            actual: key.len(),
        })?
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| Error::UnalignedLength {
            length: range.len(),
            block_size: DES_BLOCK_LEN,
        })?;
    Ok(buf.freeze())
}

/// Decrypt a block-aligned message with 3DES-CBC and an all-zero IV
///
/// Convenience for the protocol phases that mandate a zero IV; not a
/// general default.
pub fn decrypt_zero_iv(key: &[u8], message: &[u8]) -> Result<Bytes> {
    decrypt_range_zero_iv(key, message, 0, message.len())
}

/// Decrypt `message[offset..offset + length]` with 3DES-CBC and an
/// all-zero IV
pub fn decrypt_range_zero_iv(
    key: &[u8],
    message: &[u8],
    offset: usize,
    length: usize,
) -> Result<Bytes> {
    decrypt_range(key, &[0u8; DES_BLOCK_LEN], message, offset, length)
}

/// Widen 8- or 16-byte DESFire key material to the 24-byte EDE form
///
/// Single-DES keys become `K | K | K`, two-key 3DES becomes
/// `K1 | K2 | K1`; 24-byte keys pass through unchanged.
pub fn widen_key(key: &[u8]) -> Result<[u8; TDES_KEY_LEN]> {
    let mut widened = [0u8; TDES_KEY_LEN];
    match key.len() {
        8 => {
            widened[..8].copy_from_slice(key);
            widened[8..16].copy_from_slice(key);
            widened[16..].copy_from_slice(key);
        }
        16 => {
            widened[..16].copy_from_slice(key);
            widened[16..].copy_from_slice(&key[..8]);
        }
        24 => widened.copy_from_slice(key),
        n => return Err(Error::InvalidDesKeyLength { actual: n }),
    }
    Ok(widened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // FIPS 81 CBC example; a widened single-DES key makes EDE collapse to
    // plain DES, so the published vector applies.
    const DES_KEY: [u8; 8] = hex!("0123456789abcdef");
    const IV: [u8; 8] = hex!("1234567890abcdef");
    // "Now is the time for all "
    const PLAINTEXT: [u8; 24] = hex!("4e6f77206973207468652074696d6520666f7220616c6c20");
    const CIPHERTEXT: [u8; 24] = hex!("e5c7cdde872bf27c43e934008c389c0f683788499a7c05f6");

    #[test]
    fn test_encrypt_fips81_vector() {
        let key = widen_key(&DES_KEY).unwrap();
        let ciphertext = encrypt(&key, &IV, &PLAINTEXT).unwrap();
        assert_eq!(ciphertext.as_ref(), CIPHERTEXT);
    }

    #[test]
    fn test_decrypt_fips81_vector() {
        let key = widen_key(&DES_KEY).unwrap();
        let plaintext = decrypt(&key, &IV, &CIPHERTEXT).unwrap();
        assert_eq!(plaintext.as_ref(), PLAINTEXT);
    }

    #[test]
    fn test_round_trip_three_key() {
        let key = hex!("0123456789abcdef 23456789abcdef01 456789abcdef0123");
        let message = hex!("0011223344556677 8899aabbccddeeff");

        let ciphertext = encrypt(&key, &[0u8; 8], &message).unwrap();
        assert_ne!(ciphertext.as_ref(), message);
        assert_eq!(ciphertext.len(), message.len());
        assert_eq!(
            decrypt(&key, &[0u8; 8], &ciphertext).unwrap().as_ref(),
            message
        );
    }

    #[test]
    fn test_decrypt_range_matches_copied_subrange() {
        let key = widen_key(&hex!("8a3c5e71d209f4b6e1770a9c42d5386f")).unwrap();
        let mut buffer = Vec::new();
        buffer.extend_from_slice(&hex!("0a0b0c"));
        buffer.extend_from_slice(&CIPHERTEXT);
        buffer.extend_from_slice(&hex!("9100"));

        let from_range = decrypt_range(&key, &IV, &buffer, 3, 24).unwrap();
        let from_copy = decrypt(&key, &IV, &buffer[3..27]).unwrap();
        assert_eq!(from_range, from_copy);
    }

    #[test]
    fn test_zero_iv_variants_match_explicit_zero_iv() {
        let key = widen_key(&DES_KEY).unwrap();

        let explicit = decrypt(&key, &[0u8; 8], &CIPHERTEXT).unwrap();
        assert_eq!(decrypt_zero_iv(&key, &CIPHERTEXT).unwrap(), explicit);

        let explicit_range = decrypt_range(&key, &[0u8; 8], &CIPHERTEXT, 8, 16).unwrap();
        assert_eq!(
            decrypt_range_zero_iv(&key, &CIPHERTEXT, 8, 16).unwrap(),
            explicit_range
        );
    }

    #[test]
    fn test_engine_requires_widened_key() {
        let message = [0u8; 8];
        assert_eq!(
            encrypt(&[0u8; 16], &[0u8; 8], &message),
            Err(Error::InvalidKeyLength {
                expected: TDES_KEY_LEN,
                actual: 16,
            })
        );
        assert_eq!(
            decrypt(&[0u8; 8], &[0u8; 8], &message),
            Err(Error::InvalidKeyLength {
                expected: TDES_KEY_LEN,
                actual: 8,
            })
        );
    }

    #[test]
    fn test_unaligned_message_rejected() {
        let key = [0u8; 24];
        assert_eq!(
            encrypt(&key, &[0u8; 8], &[0u8; 12]),
            Err(Error::UnalignedLength {
                length: 12,
                block_size: DES_BLOCK_LEN,
            })
        );
    }

    #[test]
    fn test_invalid_iv_rejected() {
        let key = [0u8; 24];
        assert_eq!(
            decrypt(&key, &[0u8; 16], &[0u8; 8]),
            Err(Error::InvalidIvLength {
                expected: DES_BLOCK_LEN,
                actual: 16,
            })
        );
    }

    #[test]
    fn test_widen_key() {
        let single = hex!("0123456789abcdef");
        assert_eq!(
            widen_key(&single).unwrap(),
            hex!("0123456789abcdef 0123456789abcdef 0123456789abcdef")
        );

        let double = hex!("404142434445464748494a4b4c4d4e4f");
        assert_eq!(
            widen_key(&double).unwrap(),
            hex!("404142434445464748494a4b4c4d4e4f 4041424344454647")
        );

        let triple = hex!("0123456789abcdef 23456789abcdef01 456789abcdef0123");
        assert_eq!(widen_key(&triple).unwrap(), triple);

        assert_eq!(
            widen_key(&[0u8; 10]),
            Err(Error::InvalidDesKeyLength { actual: 10 })
        );
    }
}
