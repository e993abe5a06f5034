//! Argument validation shared by the cipher modules

use crate::error::{Error, Result};

/// Check that a key has exactly the required length
pub(crate) fn check_key(key: &[u8], expected: usize) -> Result<()> {
    if key.len() != expected {
        return Err(Error::InvalidKeyLength {
            expected,
            actual: key.len(),
        });
    }
    Ok(())
}

/// Check that an IV has exactly the cipher's block length
pub(crate) fn check_iv(iv: &[u8], expected: usize) -> Result<()> {
    if iv.len() != expected {
        return Err(Error::InvalidIvLength {
            expected,
            actual: iv.len(),
        });
    }
    Ok(())
}

/// Check that a length is an exact multiple of the block size
pub(crate) fn check_aligned(length: usize, block_size: usize) -> Result<()> {
    if length % block_size != 0 {
        return Err(Error::UnalignedLength { length, block_size });
    }
    Ok(())
}

/// Borrow `buffer[offset..offset + length]`, with a typed error on overrun
pub(crate) fn sub_range(buffer: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
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
