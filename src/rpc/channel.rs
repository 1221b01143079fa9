//! Channel abstraction — any ordered byte transport to the firmware.
//!
//! Concrete implementations live with the platform integration (mailbox
//! doorbell, shared-memory ring, serial link to a development board). The
//! client is generic over `Channel`, so adding a transport requires zero
//! changes to the RPC logic.
//!
//! The channel is owned by the caller and passed in by `&mut`; the client
//! never opens, closes, or caches one. Callers sharing a channel between
//! threads must serialize access themselves — only the caller knows the
//! channel's true sharing topology.

use core::time::Duration;

use crate::error::TransportError;

/// Ordered, reliable-or-erroring byte transport to the SCU.
pub trait Channel {
    /// Transmit one complete frame.
    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Block until exactly `buf.len()` bytes have arrived, or fail with
    /// `TransportError::Timeout` once `timeout` elapses. The channel's
    /// state after a timeout is undefined.
    fn read_exact(&mut self, buf: &mut [u8], timeout: Duration) -> Result<(), TransportError>;
}

/// A null channel that discards all writes and never responds.
/// Useful as a default when no firmware is attached.
pub struct NullChannel;

impl Channel for NullChannel {
    fn write(&mut self, _frame: &[u8]) -> Result<(), TransportError> {
        Ok(())
    }

    fn read_exact(&mut self, _buf: &mut [u8], _timeout: Duration) -> Result<(), TransportError> {
        Err(TransportError::Timeout)
    }
}
