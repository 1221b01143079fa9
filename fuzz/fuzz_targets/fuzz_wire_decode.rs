//! Fuzz target: response frame decoding
//!
//! Drives arbitrary byte sequences through `decode_response` for every
//! response shape and asserts that decoding never panics: the outcome is
//! always a typed value or a typed error.
//!
//! cargo fuzz run fuzz_wire_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use scu_rpc::rpc::msg::ScuResponse;
use scu_rpc::rpc::{SocIdResponse, SocUidResponse, decode_response};

fuzz_target!(|data: &[u8]| {
    if let Ok(resp) = decode_response::<SocIdResponse>(data) {
        // A decoded frame implies the input covered the full wire shape.
        assert!(data.len() >= SocIdResponse::WIRE_LEN);
        let _ = resp.id;
    }

    if let Ok(resp) = decode_response::<SocUidResponse>(data) {
        assert!(data.len() >= SocUidResponse::WIRE_LEN);
        // The combine must be consistent with the halves.
        assert_eq!(resp.uid() as u32, resp.uid_low);
    }
});
