//! SCU wire format primitives.
//!
//! Wire format of every frame:
//! ```text
//! ┌─────┬─────┬──────┬──────┬─────────────────────────────┐
//! │ ver │ svc │ func │ size │ payload (size × 32-bit words)│
//! │ u8  │ u8  │ u8   │ u8   │ LE fields, no inter-field pad│
//! └─────┴─────┴──────┴──────┴─────────────────────────────┘
//! ```
//!
//! `size` counts the 32-bit payload words following the header; a partial
//! trailing word is rounded up and zero-padded on the wire. The firmware
//! mailbox moves whole words, so frame lengths are always word-aligned.
//! Field order and byte order are exact interoperability contracts — the
//! codec never relies on in-memory struct layout.

use crate::error::{DecodeError, EncodeError};

/// RPC protocol version spoken by the SCU firmware.
pub const RPC_VERSION: u8 = 1;

/// Miscellaneous service — owns identity controls and the unique id.
pub const SVC_MISC: u8 = 7;

/// Misc-service function: read a control value from a resource.
pub const FUNC_GET_CONTROL: u8 = 1;

/// Misc-service function: read the 64-bit unique die id.
pub const FUNC_UNIQUE_ID: u8 = 19;

/// Control id of the SoC identity register.
pub const CTRL_ID: u32 = 24;

/// Resource id of the system resource that owns the identity control.
pub const RSRC_SYSTEM: u32 = 558;

/// Maximum mailbox message size in 32-bit words, header included.
pub const MAX_MSG_WORDS: usize = 8;

/// Maximum mailbox message size in bytes.
pub const MAX_MSG_BYTES: usize = MAX_MSG_WORDS * 4;

/// Header size in bytes.
pub const HEADER_BYTES: usize = 4;

/// Round a payload byte count up to whole 32-bit words.
pub const fn payload_words(payload_bytes: usize) -> u8 {
    payload_bytes.div_ceil(4) as u8
}

// ── Header ───────────────────────────────────────────────────

/// Fixed four-byte prefix of every SCU RPC frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcHeader {
    /// Protocol version (`RPC_VERSION`).
    pub ver: u8,
    /// Target service id.
    pub svc: u8,
    /// Target function within the service.
    pub func: u8,
    /// Number of 32-bit payload words following the header.
    pub size: u8,
}

impl RpcHeader {
    /// Build a header for a misc-service message with the given payload size.
    pub const fn misc(func: u8, payload_bytes: usize) -> Self {
        Self {
            ver: RPC_VERSION,
            svc: SVC_MISC,
            func,
            size: payload_words(payload_bytes),
        }
    }
}

// ── Bounded writer ───────────────────────────────────────────

/// Serializer for one outbound frame, bounded to the mailbox capacity.
#[derive(Debug)]
pub struct WireWriter {
    buf: heapless::Vec<u8, MAX_MSG_BYTES>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
        }
    }

    pub fn put_u8(&mut self, v: u8) -> Result<(), EncodeError> {
        self.buf.push(v).map_err(|_| EncodeError::BufferFull)
    }

    pub fn put_u16(&mut self, v: u16) -> Result<(), EncodeError> {
        self.buf
            .extend_from_slice(&v.to_le_bytes())
            .map_err(|()| EncodeError::BufferFull)
    }

    pub fn put_u32(&mut self, v: u32) -> Result<(), EncodeError> {
        self.buf
            .extend_from_slice(&v.to_le_bytes())
            .map_err(|()| EncodeError::BufferFull)
    }

    /// Write a value carried in a wider type into a 16-bit wire field.
    pub fn put_u16_checked(&mut self, v: u32) -> Result<(), EncodeError> {
        let narrow = u16::try_from(v).map_err(|_| EncodeError::ValueTooWide)?;
        self.put_u16(narrow)
    }

    pub fn put_header(&mut self, hdr: RpcHeader) -> Result<(), EncodeError> {
        self.put_u8(hdr.ver)?;
        self.put_u8(hdr.svc)?;
        self.put_u8(hdr.func)?;
        self.put_u8(hdr.size)
    }

    /// Zero-pad the frame out to the next 32-bit word boundary.
    pub fn pad_to_word(&mut self) -> Result<(), EncodeError> {
        while self.buf.len() % 4 != 0 {
            self.put_u8(0)?;
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

// ── Borrowing reader ─────────────────────────────────────────

/// Deserializer over one received frame.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.buf.len() - self.pos < n {
            return Err(DecodeError::TooShort {
                expected: self.pos + n,
                got: self.buf.len(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn take_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    pub fn take_u16(&mut self) -> Result<u16, DecodeError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn take_u32(&mut self) -> Result<u32, DecodeError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn take_header(&mut self) -> Result<RpcHeader, DecodeError> {
        Ok(RpcHeader {
            ver: self.take_u8()?,
            svc: self.take_u8()?,
            func: self.take_u8()?,
            size: self.take_u8()?,
        })
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

// ── Tests ────────────────────────────────────────────────────
