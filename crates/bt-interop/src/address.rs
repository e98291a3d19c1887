//! Bluetooth device address value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InteropError;

/// A 6-byte Bluetooth device address (BD_ADDR), most significant byte first.
///
/// The first three bytes are the OUI of the vendor that assigned the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BdAddr(pub [u8; 6]);

impl BdAddr {
    /// Address width in bytes.
    pub const LEN: usize = 6;

    /// Address from its six bytes, most significant first.
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Raw address bytes.
    pub const fn bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Vendor-assigned prefix (first three bytes).
    pub fn oui(&self) -> [u8; 3] {
        let [a, b, c, ..] = self.0;
        [a, b, c]
    }

    /// Byte-exact comparison of the first `len` bytes of both addresses.
    ///
    /// `len` larger than [`BdAddr::LEN`] compares the whole address; `len`
    /// of zero always matches.
    pub fn matches_prefix(&self, other: &[u8; 6], len: usize) -> bool {
        let len = len.min(Self::LEN);
        self.0.get(..len) == other.get(..len)
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl FromStr for BdAddr {
    type Err = InteropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InteropError::InvalidAddress(s.to_string());
        let mut bytes = [0u8; 6];
        let mut groups = s.split(':');

        for byte in bytes.iter_mut() {
            let group = groups.next().ok_or_else(invalid)?;
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(group, 16).ok().ok_or_else(invalid)?;
        }

        if groups.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(bytes))
    }
}

impl Serialize for BdAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BdAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
