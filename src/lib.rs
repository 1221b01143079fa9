//! SCU RPC client library.
//!
//! Queries a system-controller firmware unit (SCU) over a caller-owned
//! channel for the SoC identity register and the 64-bit unique die id,
//! and shapes the result into a descriptive record for the platform to
//! publish. Transport implementations, device-registry integration, and
//! persistence all live with the caller.

#![deny(unused_must_use)]

pub mod identity;
pub mod rpc;

mod error;

pub use error::{DecodeError, EncodeError, Result, RpcError, TransportError};
pub use identity::{SocAttributes, SocIdentity, discover};
pub use rpc::{Channel, NullChannel, ScuClient};
