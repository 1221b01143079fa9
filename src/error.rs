//! Unified error types for the SCU RPC client.
//!
//! A single `RpcError` that every layer can convert into, keeping the
//! caller's error handling uniform. All variants are `Copy` so they can be
//! cheaply returned through the call stack without allocation. Nothing is
//! logged at this layer; presentation is the caller's responsibility.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level RPC error
// ---------------------------------------------------------------------------

/// Every fallible operation in the client funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcError {
    /// A request value could not be serialized to its wire shape.
    Encode(EncodeError),
    /// A response frame could not be decoded into the expected shape.
    Decode(DecodeError),
    /// The underlying channel failed, with the transport's cause.
    Transport(TransportError),
    /// No complete response frame arrived within the caller's deadline.
    Timeout,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "encode: {e}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Timeout => write!(f, "timed out waiting for response"),
        }
    }
}

impl core::error::Error for RpcError {}

// ---------------------------------------------------------------------------
// Codec errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A field value does not fit its declared wire width.
    ValueTooWide,
    /// The message exceeds the mailbox frame capacity.
    BufferFull,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueTooWide => write!(f, "value does not fit declared field width"),
            Self::BufferFull => write!(f, "message exceeds frame capacity"),
        }
    }
}

impl From<EncodeError> for RpcError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes were supplied than the expected shape requires.
    TooShort { expected: usize, got: usize },
    /// The decoded header does not identify the expected response shape.
    HeaderMismatch,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { expected, got } => {
                write!(f, "frame too short: expected {expected} bytes, got {got}")
            }
            Self::HeaderMismatch => write!(f, "response header does not match expected shape"),
        }
    }
}

impl From<DecodeError> for RpcError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Faults a concrete channel implementation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The channel was closed or torn down by the peer.
    Closed,
    /// The deadline passed before the requested bytes arrived. The
    /// channel's state afterwards is undefined; retry or reset is the
    /// caller's decision.
    Timeout,
    /// Transport-specific fault.
    Fault(&'static str),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "channel closed"),
            Self::Timeout => write!(f, "read deadline exceeded"),
            Self::Fault(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<TransportError> for RpcError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout => Self::Timeout,
            other => Self::Transport(other),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, RpcError>;
