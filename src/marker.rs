// marker.rs - Anti-rollback marker data model
// Purpose: Persisted (magic, version) marker, build identity, and the dev wire format

use serde::{Deserialize, Serialize};
use std::fmt;

/// Magic tag for this product lineage ("RLMK" in ASCII).
pub const BUILD_MAGIC: u32 = 0x524c_4d4b;

/// Version counter of the current build. Bumped by the release process.
pub const BUILD_VERSION: u32 = 1;

/// Persisted anti-rollback state: the highest version ever run, tagged
/// with a lineage magic so foreign marker data is never reinterpreted
/// as a version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub magic: u32,
    pub version: u32,
}

impl Marker {
    pub fn new(magic: u32, version: u32) -> Self {
        Self { magic, version }
    }

    /// Parse the dev wire format: two decimal u32 fields joined by a
    /// single `-`, nothing else. Returns None for anything malformed;
    /// the caller decides how to classify that.
    pub fn parse(raw: &str) -> Option<Self> {
        let fields: Vec<&str> = raw.split('-').collect();
        if fields.len() != 2 {
            return None;
        }
        // u32::from_str tolerates a leading '+'; the wire format does not.
        for field in &fields {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
        }
        let magic = fields[0].parse::<u32>().ok()?;
        let version = fields[1].parse::<u32>().ok()?;
        Some(Self { magic, version })
    }
}

/// Canonical encoding: no leading zeros, no padding, no trailing
/// delimiter, so a store that preserves bytes reads back exactly what
/// was written.
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.magic, self.version)
    }
}

/// The running build's own (magic, version) pair, treated as ground
/// truth. Passed explicitly into evaluation rather than read from
/// global state, so the guard is testable with arbitrary identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildIdentity {
    pub magic: u32,
    pub version: u32,
}

impl BuildIdentity {
    pub fn new(magic: u32, version: u32) -> Self {
        Self { magic, version }
    }

    /// Identity of the binary as compiled.
    pub fn current() -> Self {
        Self {
            magic: BUILD_MAGIC,
            version: BUILD_VERSION,
        }
    }
}
