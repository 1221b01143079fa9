//! Typed SCU misc-service messages.
//!
//! Each request knows its paired response shape, so `ScuClient::call` can
//! read exactly one full response frame and verify the echoed header
//! against the shape it expects. Requests are built per call, transmitted,
//! and discarded; decoded responses are owned by the caller.

use crate::error::{DecodeError, EncodeError};

use super::wire::{
    CTRL_ID, FUNC_GET_CONTROL, FUNC_UNIQUE_ID, HEADER_BYTES, RSRC_SYSTEM, RpcHeader, WireReader,
    WireWriter,
};

/// A request message bound to its response shape.
pub trait ScuRequest {
    /// Response shape the firmware answers this request with.
    type Response: ScuResponse;

    /// Misc-service function id carried in the header.
    const FUNC: u8;

    /// Payload length in bytes before word padding.
    const PAYLOAD_BYTES: usize;

    /// Serialize the payload fields in declaration order.
    fn encode_payload(&self, w: &mut WireWriter) -> Result<(), EncodeError>;
}

/// A response message decodable from a received frame.
pub trait ScuResponse: Sized {
    /// Function id the echoed response header must carry.
    const FUNC: u8;

    /// Payload length in bytes before word padding.
    const PAYLOAD_BYTES: usize;

    /// Full frame length on the wire, header and word padding included.
    const WIRE_LEN: usize = HEADER_BYTES + Self::PAYLOAD_BYTES.div_ceil(4) * 4;

    /// Deserialize the payload fields; the header has already been checked.
    fn decode_payload(r: &mut WireReader<'_>) -> Result<Self, DecodeError>;
}

/// Serialize a full request frame: header, payload, trailing word pad.
pub fn encode_request<R: ScuRequest>(req: &R) -> Result<WireWriter, EncodeError> {
    let mut w = WireWriter::new();
    w.put_header(RpcHeader::misc(R::FUNC, R::PAYLOAD_BYTES))?;
    req.encode_payload(&mut w)?;
    w.pad_to_word()?;
    Ok(w)
}

/// Deserialize a full response frame, verifying the echoed header.
pub fn decode_response<R: ScuResponse>(frame: &[u8]) -> Result<R, DecodeError> {
    if frame.len() < R::WIRE_LEN {
        return Err(DecodeError::TooShort {
            expected: R::WIRE_LEN,
            got: frame.len(),
        });
    }
    let mut r = WireReader::new(frame);
    let hdr = r.take_header()?;
    let expected = RpcHeader::misc(R::FUNC, R::PAYLOAD_BYTES);
    if hdr.svc != expected.svc || hdr.func != expected.func || hdr.size != expected.size {
        return Err(DecodeError::HeaderMismatch);
    }
    R::decode_payload(&mut r)
}

// ── Get-control: SoC identity register ───────────────────────

/// Read a control value from a firmware-owned resource.
///
/// Fields are carried widened to `u32`; `resource` is narrowed to its
/// 16-bit wire width at encode time and rejected if it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocIdRequest {
    pub control: u32,
    pub resource: u32,
}

impl SocIdRequest {
    /// The fixed identity query: the `CTRL_ID` control on the system resource.
    pub const fn identity() -> Self {
        Self {
            control: CTRL_ID,
            resource: RSRC_SYSTEM,
        }
    }
}

impl ScuRequest for SocIdRequest {
    type Response = SocIdResponse;

    const FUNC: u8 = FUNC_GET_CONTROL;
    const PAYLOAD_BYTES: usize = 6;

    fn encode_payload(&self, w: &mut WireWriter) -> Result<(), EncodeError> {
        w.put_u32(self.control)?;
        w.put_u16_checked(self.resource)
    }
}

/// Control value returned by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocIdResponse {
    pub id: u32,
}

impl ScuResponse for SocIdResponse {
    const FUNC: u8 = FUNC_GET_CONTROL;
    const PAYLOAD_BYTES: usize = 4;

    fn decode_payload(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self { id: r.take_u32()? })
    }
}

// ── Unique id ────────────────────────────────────────────────

/// Read the 64-bit unique die id. Header-only request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SocUidRequest;

impl ScuRequest for SocUidRequest {
    type Response = SocUidResponse;

    const FUNC: u8 = FUNC_UNIQUE_ID;
    const PAYLOAD_BYTES: usize = 0;

    fn encode_payload(&self, _w: &mut WireWriter) -> Result<(), EncodeError> {
        Ok(())
    }
}

/// Unique id halves as transmitted by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocUidResponse {
    pub uid_low: u32,
    pub uid_high: u32,
}

impl SocUidResponse {
    /// Combined unique id: `(uid_high << 32) | uid_low`.
    pub const fn uid(&self) -> u64 {
        ((self.uid_high as u64) << 32) | self.uid_low as u64
    }
}

impl ScuResponse for SocUidResponse {
    const FUNC: u8 = FUNC_UNIQUE_ID;
    const PAYLOAD_BYTES: usize = 8;

    fn decode_payload(r: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            uid_low: r.take_u32()?,
            uid_high: r.take_u32()?,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────
