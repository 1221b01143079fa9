//! Synchronous SCU call pattern.
//!
//! One request outstanding per channel: `call` encodes the request, writes
//! it, then blocks until the full response frame for that request has
//! arrived. The firmware answers in order, so no request-id correlation is
//! needed. Per call the client moves `Idle -> AwaitingResponse -> Idle`;
//! a timeout or transport fault ends the call, not the channel.
//!
//! The client holds no lock and no queue. Callers invoking `call` on a
//! shared channel from several threads must serialize with their own
//! mutual exclusion. No retries are performed anywhere: the protocol has
//! no retry handshake, and replaying a non-idempotent firmware command
//! without upstream confirmation is unsafe. The identity reads issued by
//! `soc_id`/`soc_uid` are side-effect free, so callers may retry those at
//! their own discretion.

use core::time::Duration;

use crate::error::Result;

use super::channel::Channel;
use super::msg::{
    ScuRequest, ScuResponse, SocIdRequest, SocUidRequest, decode_response, encode_request,
};
use super::wire::MAX_MSG_BYTES;

/// Client for the SCU misc service over a caller-owned channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScuClient {
    timeout: Duration,
}

impl ScuClient {
    /// Deadline applied to each response wait unless overridden.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    /// A client whose calls abort with `RpcError::Timeout` after `timeout`.
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue one request and block for its response.
    ///
    /// The read is sized to exactly the response shape's wire length, so
    /// the matching reply is fully consumed before the method returns and
    /// the channel is ready for the next request.
    pub fn call<C: Channel, R: ScuRequest>(
        &self,
        chan: &mut C,
        req: &R,
    ) -> Result<R::Response> {
        let frame = encode_request(req)?;
        chan.write(frame.as_slice())?;

        let mut buf = [0u8; MAX_MSG_BYTES];
        let len = R::Response::WIRE_LEN;
        chan.read_exact(&mut buf[..len], self.timeout)?;

        Ok(decode_response(&buf[..len])?)
    }

    /// Read the SoC identity register.
    pub fn soc_id<C: Channel>(&self, chan: &mut C) -> Result<u32> {
        let resp = self.call(chan, &SocIdRequest::identity())?;
        Ok(resp.id)
    }

    /// Read the 64-bit unique die id.
    pub fn soc_uid<C: Channel>(&self, chan: &mut C) -> Result<u64> {
        let resp = self.call(chan, &SocUidRequest)?;
        Ok(resp.uid())
    }
}

impl Default for ScuClient {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RpcError, TransportError};
    use crate::rpc::wire::{FUNC_GET_CONTROL, FUNC_UNIQUE_ID, RPC_VERSION, SVC_MISC};

    type IoResult<T> = core::result::Result<T, TransportError>;

    /// Scripted channel: records every I/O event and serves canned
    /// response frames in order.
    struct ScriptChannel {
        responses: Vec<IoResult<Vec<u8>>>,
        served: usize,
        /// `W` per frame written, `R` per frame read.
        events: Vec<char>,
        writes: Vec<Vec<u8>>,
    }

    impl ScriptChannel {
        fn new(responses: Vec<IoResult<Vec<u8>>>) -> Self {
            Self {
                responses,
                served: 0,
                events: Vec::new(),
                writes: Vec::new(),
            }
        }
    }

    impl Channel for ScriptChannel {
        fn write(&mut self, frame: &[u8]) -> core::result::Result<(), TransportError> {
            self.events.push('W');
            self.writes.push(frame.to_vec());
            Ok(())
        }

        fn read_exact(
            &mut self,
            buf: &mut [u8],
            _timeout: Duration,
        ) -> core::result::Result<(), TransportError> {
            self.events.push('R');
            let scripted = self
                .responses
                .get(self.served)
                .cloned()
                .unwrap_or(Err(TransportError::Timeout));
            self.served += 1;
            let bytes = scripted?;
            assert_eq!(buf.len(), bytes.len(), "client must read one full frame");
            buf.copy_from_slice(&bytes);
            Ok(())
        }
    }

    fn id_response(id: u32) -> Vec<u8> {
        let mut f = vec![RPC_VERSION, SVC_MISC, FUNC_GET_CONTROL, 1];
        f.extend_from_slice(&id.to_le_bytes());
        f
    }

    fn uid_response(low: u32, high: u32) -> Vec<u8> {
        let mut f = vec![RPC_VERSION, SVC_MISC, FUNC_UNIQUE_ID, 2];
        f.extend_from_slice(&low.to_le_bytes());
        f.extend_from_slice(&high.to_le_bytes());
        f
    }

    #[test]
    fn soc_id_returns_decoded_register() {
        let mut chan = ScriptChannel::new(vec![Ok(id_response(0x0000_0021))]);
        let client = ScuClient::new();
        assert_eq!(client.soc_id(&mut chan), Ok(0x0000_0021));
    }

    #[test]
    fn soc_uid_combines_high_over_low() {
        let mut chan = ScriptChannel::new(vec![Ok(uid_response(0x0000_0001, 0x0000_0002))]);
        let client = ScuClient::new();
        assert_eq!(client.soc_uid(&mut chan), Ok(0x0000_0002_0000_0001));
    }

    #[test]
    fn transport_fault_surfaces_without_retry() {
        let mut chan = ScriptChannel::new(vec![Err(TransportError::Closed)]);
        let client = ScuClient::new();
        assert_eq!(
            client.soc_id(&mut chan),
            Err(RpcError::Transport(TransportError::Closed))
        );
        // One write, one read: the client must not have retried.
        assert_eq!(chan.events, vec!['W', 'R']);
    }

    #[test]
    fn silent_channel_times_out() {
        let mut chan = ScriptChannel::new(vec![Err(TransportError::Timeout)]);
        let client = ScuClient::with_timeout(Duration::from_millis(10));
        assert_eq!(client.soc_uid(&mut chan), Err(RpcError::Timeout));
        assert_eq!(chan.events, vec!['W', 'R']);
    }

    #[test]
    fn mismatched_response_shape_is_a_decode_error() {
        // Firmware answers the identity query with a unique-id frame.
        let mut chan = ScriptChannel::new(vec![Ok(vec![
            RPC_VERSION,
            SVC_MISC,
            FUNC_UNIQUE_ID,
            1,
            0,
            0,
            0,
            0,
        ])]);
        let client = ScuClient::new();
        assert!(matches!(
            client.soc_id(&mut chan),
            Err(RpcError::Decode(_))
        ));
    }

    #[test]
    fn sequential_calls_observe_request_then_response_ordering() {
        let mut chan = ScriptChannel::new(vec![
            Ok(id_response(0x01)),
            Ok(uid_response(0xAAAA_AAAA, 0x5555_5555)),
        ]);
        let client = ScuClient::new();
        client.soc_id(&mut chan).unwrap();
        client.soc_uid(&mut chan).unwrap();
        // Call 1's response is fully consumed before call 2's request
        // is written.
        assert_eq!(chan.events, vec!['W', 'R', 'W', 'R']);
        assert_eq!(chan.writes.len(), 2);
        assert_eq!(chan.writes[0][2], FUNC_GET_CONTROL);
        assert_eq!(chan.writes[1][2], FUNC_UNIQUE_ID);
    }
}
