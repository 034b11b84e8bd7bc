//! Station hardware addresses.
//!
//! Scenario files assign every station an explicit MAC (`00:00:00:00:00:01`
//! style).  The engine itself never inspects the bytes — the address is
//! carried through to the event log and snapshots so downstream tooling can
//! correlate stations with capture files.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A 48-bit IEEE MAC address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    pub const ZERO: MacAddr = MacAddr([0; 6]);
}

impl FromStr for MacAddr {
    type Err = CoreError;

    /// Parse the colon-separated form `aa:bb:cc:dd:ee:ff` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split(':');
        for byte in &mut bytes {
            let part = parts
                .next()
                .ok_or_else(|| CoreError::BadMac(s.to_string()))?;
            *byte = u8::from_str_radix(part, 16)
                .map_err(|_| CoreError::BadMac(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(CoreError::BadMac(s.to_string()));
        }
        Ok(MacAddr(bytes))
    }
}

impl TryFrom<String> for MacAddr {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MacAddr> for String {
    fn from(mac: MacAddr) -> String {
        mac.to_string()
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}
