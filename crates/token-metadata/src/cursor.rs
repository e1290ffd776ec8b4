//! Bounds-checked reader over account data.
//!
//! All metadata decoding goes through this cursor so that every read is an
//! explicit bounds check: a read that would pass the end of the buffer
//! fails with [`DecodeError::Truncated`] carrying the offset it failed at,
//! and the cursor never advances past the data it holds.

use crate::error::DecodeError;

/// A forward-only cursor over a byte slice.
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Take `n` bytes, advancing the cursor.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + n];
        self.offset += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a 4-byte little-endian unsigned length prefix.
    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a 32-byte public key.
    pub fn read_pubkey(&mut self) -> Result<[u8; 32], DecodeError> {
        let bytes = self.read_bytes(32)?;
        let mut pubkey = [0u8; 32];
        pubkey.copy_from_slice(bytes);
        Ok(pubkey)
    }

    /// Advance past `n` bytes without looking at them.
    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.read_bytes(n).map(|_| ())
    }
}
