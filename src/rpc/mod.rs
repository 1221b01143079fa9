//! Point-to-point RPC client for SCU firmware.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                  SCU RPC client                       │
//! │                                                       │
//! │  ┌──────────┐   ┌──────────────┐   ┌──────────────┐  │
//! │  │  Caller  │──▶│    Client    │──▶│   Channel    │  │
//! │  │          │   │ (call/await) │   │   (trait)    │  │
//! │  └──────────┘   └──────────────┘   └──────────────┘  │
//! │       ▲               │  ▲                │          │
//! │       │               ▼  │                ▼          │
//! │       │         ┌──────────────┐      firmware       │
//! │       └─────────│ wire / msg   │      mailbox        │
//! │                 │ (codec)      │                     │
//! │                 └──────────────┘                     │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! One synchronous request/response exchange at a time per channel, with
//! fixed-layout little-endian frames and deterministic field decoding.

pub mod channel;
pub mod client;
pub mod msg;
pub mod wire;

pub use channel::{Channel, NullChannel};
pub use client::ScuClient;
pub use msg::{
    ScuRequest, ScuResponse, SocIdRequest, SocIdResponse, SocUidRequest, SocUidResponse,
    decode_response, encode_request,
};
