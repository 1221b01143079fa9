//! Consumer-side SoC identity record.
//!
//! The RPC core hands back two raw register values; this module gives them
//! meaning: part number, silicon revision, serial number, and the bounded
//! string attributes a platform registry expects. Registering the record
//! with any device registry stays with the caller, as do per-revision
//! policy decisions — this module only states the facts of the silicon.

use core::fmt::Write as _;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rpc::{Channel, ScuClient};

/// SoC family every part reachable through this service belongs to.
pub const FAMILY: &str = "Freescale i.MX";

/// Part number of the quad-max die.
pub const PART_QM: u8 = 0x1;

/// Part number of the quad-x-plus die.
pub const PART_QXP: u8 = 0x2;

/// Raw identity as reported by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocIdentity {
    /// Identity register: part number in bits [4:0], revision in [8:5].
    pub id: u32,
    /// 64-bit unique die id.
    pub uid: u64,
}

impl SocIdentity {
    /// Part number field of the identity register.
    pub const fn part(&self) -> u8 {
        (self.id & 0x1f) as u8
    }

    /// Silicon revision as `(major, minor)`.
    ///
    /// The register stores the revision biased: the major field counts
    /// from zero while marketing revisions count from 1.0, so major is
    /// incremented during decode.
    pub const fn revision(&self) -> (u8, u8) {
        let v = ((self.id >> 5) & 0xf) as u8;
        ((v >> 2) + 1, v & 0x3)
    }

    /// Marketing name for known part numbers.
    pub const fn part_name(&self) -> Option<&'static str> {
        match self.part() {
            PART_QM => Some("i.MX8QM"),
            PART_QXP => Some("i.MX8QXP"),
            _ => None,
        }
    }

    /// Whether downstream bus consumers must apply the quad-max erratum
    /// workaround. Caller-level policy: the RPC protocol itself knows
    /// nothing about per-revision quirks.
    pub const fn erratum_workaround_required(&self) -> bool {
        self.part() == PART_QM
    }

    /// Revision formatted as `"major.minor"`.
    pub fn revision_string(&self) -> heapless::String<8> {
        let (major, minor) = self.revision();
        let mut s = heapless::String::new();
        let _ = write!(s, "{major}.{minor}");
        s
    }

    /// Unique id formatted as 16 uppercase hex digits.
    pub fn serial_number(&self) -> heapless::String<16> {
        let mut s = heapless::String::new();
        let _ = write!(s, "{:016X}", self.uid);
        s
    }

    /// Build the descriptive attribute record for registry consumers.
    pub fn attributes(&self) -> SocAttributes {
        let mut soc_id = heapless::String::new();
        match self.part_name() {
            Some(name) => {
                let _ = soc_id.push_str(name);
            }
            None => {
                let _ = write!(soc_id, "SoC 0x{:02x}", self.part());
            }
        }

        let mut family = heapless::String::new();
        let _ = family.push_str(FAMILY);

        SocAttributes {
            family,
            soc_id,
            revision: self.revision_string(),
            serial_number: self.serial_number(),
        }
    }
}

/// Descriptive SoC record, ready for whatever registry the platform has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocAttributes {
    pub family: heapless::String<32>,
    pub soc_id: heapless::String<16>,
    pub revision: heapless::String<8>,
    pub serial_number: heapless::String<16>,
}

/// Query the firmware for the full SoC identity.
///
/// Issues the identity read and then the unique-id read on the same
/// channel. Any failure aborts discovery — a wrong identity silently
/// propagating downstream is worse than a visible failure, so no default
/// is ever substituted.
pub fn discover<C: Channel>(client: &ScuClient, chan: &mut C) -> Result<SocIdentity> {
    let id = client.soc_id(chan)?;
    let uid = client.soc_uid(chan)?;
    let identity = SocIdentity { id, uid };

    info!(
        "SoC identity: {} rev {} serial {}",
        identity.part_name().unwrap_or("unknown part"),
        identity.revision_string(),
        identity.serial_number(),
    );

    Ok(identity)
}

// ── Tests ────────────────────────────────────────────────────
