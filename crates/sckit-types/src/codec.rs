//! Byte-level reader and writer used by every value encoding.
//!
//! Integers inside composite encodings and call payloads use a
//! continuation-bit scheme: every byte carries 7 payload bits and sets its
//! high bit when more bytes follow. Signed integers spend bit 6 of the first
//! byte on the sign, so that byte only carries 6 payload bits, and are
//! sign-extended on decode.
//!
//! ```text
//! unsigned 300  ->  [0xac, 0x02]
//! signed   -65  ->  [0xff, 0x7e]
//! bytes "ab"    ->  [0x02, b'a', b'b']
//! ```

use crate::error::{CodecError, CodecResult};

/// Width of the length prefix of a variable-sized byte string.
const LENGTH_PREFIX_BITS: u32 = 32;

/// Sequential reader over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Read a single byte.
    pub fn byte(&mut self) -> CodecResult<u8> {
        let (&first, rest) = self.buf.split_first().ok_or(CodecError::Truncated {
            needed: 1,
            available: 0,
        })?;
        self.buf = rest;
        Ok(first)
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> CodecResult<u8> {
        self.buf.first().copied().ok_or(CodecError::Truncated {
            needed: 1,
            available: 0,
        })
    }

    /// Read exactly `size` raw bytes.
    pub fn fixed_bytes(&mut self, size: usize) -> CodecResult<&'a [u8]> {
        if self.buf.len() < size {
            return Err(CodecError::Truncated {
                needed: size,
                available: self.buf.len(),
            });
        }
        let (value, rest) = self.buf.split_at(size);
        self.buf = rest;
        Ok(value)
    }

    /// Read a length-prefixed byte string.
    pub fn bytes(&mut self) -> CodecResult<&'a [u8]> {
        let length = self.vlu_decode(LENGTH_PREFIX_BITS)?;
        let length = usize::try_from(length)
            .map_err(|_| CodecError::malformed("bytes", format!("length {length} too large")))?;
        self.fixed_bytes(length)
    }

    /// Decode a variable-length unsigned integer of at most `bits` bits.
    ///
    /// Range checks against the target width are left to the caller; this
    /// only rejects representations with more groups than `bits` allows.
    pub fn vlu_decode(&mut self, bits: u32) -> CodecResult<u64> {
        let mut b = self.byte()?;
        let mut value = u64::from(b & 0x7f);
        let mut shift = 7;

        while b & 0x80 != 0 {
            if shift >= bits {
                return Err(CodecError::malformed(
                    "uint",
                    "integer representation too long",
                ));
            }
            b = self.byte()?;
            value |= u64::from(b & 0x7f) << shift;
            shift += 7;
        }
        Ok(value)
    }

    /// Decode a variable-length signed integer of at most `bits` bits.
    pub fn vli_decode(&mut self, bits: u32) -> CodecResult<i64> {
        let mut b = self.byte()?;
        let negative = b & 0x40 != 0;
        let mut value = i64::from(b & 0x3f);
        let mut shift = 6;

        while b & 0x80 != 0 {
            if shift >= bits {
                return Err(CodecError::malformed(
                    "int",
                    "integer representation too long",
                ));
            }
            b = self.byte()?;
            value |= i64::from(b & 0x7f) << shift;
            shift += 7;
        }

        if negative && shift < 64 {
            value |= -1_i64 << shift;
        }
        Ok(value)
    }

    /// Consume the decoder, failing if any bytes were left unread.
    pub fn finish(self) -> CodecResult<()> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            Err(CodecError::TrailingBytes(self.buf.len()))
        }
    }
}

/// Growable writer producing an encoded byte buffer.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single byte.
    pub fn byte(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    /// Append raw bytes without a length prefix.
    pub fn fixed_bytes(&mut self, value: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(value);
        self
    }

    /// Append a length-prefixed byte string.
    pub fn bytes(&mut self, value: &[u8]) -> &mut Self {
        self.vlu_encode(value.len() as u64);
        self.fixed_bytes(value)
    }

    /// Append a variable-length unsigned integer using the fewest bytes.
    pub fn vlu_encode(&mut self, mut value: u64) -> &mut Self {
        let mut b = (value & 0x7f) as u8;
        value >>= 7;

        while value != 0 {
            self.buf.push(b | 0x80);
            b = (value & 0x7f) as u8;
            value >>= 7;
        }
        self.buf.push(b);
        self
    }

    /// Append a variable-length signed integer using the fewest bytes.
    pub fn vli_encode(&mut self, mut value: i64) -> &mut Self {
        let mut b = (value & 0x3f) as u8;
        value >>= 6;

        let mut terminal = 0_i64;
        if value < 0 {
            b |= 0x40;
            terminal = -1;
        }

        while value != terminal {
            self.buf.push(b | 0x80);
            b = (value & 0x7f) as u8;
            value >>= 7;
        }
        self.buf.push(b);
        self
    }

    /// The bytes written so far.
    pub fn buf(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
