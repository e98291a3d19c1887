//! Interop lookups.
//!
//! Each lookup is a linear scan of one table that stops at the first record
//! carrying the requested feature and matching the device identifier. A
//! match is reported with a warning so the applied workaround shows up in
//! the logs next to the connection that triggered it.

use tracing::warn;

use crate::address::BdAddr;
use crate::database::InteropDatabase;
use crate::feature::InteropFeature;

impl InteropDatabase {
    /// Whether `addr` has an address record for `feature`.
    ///
    /// Each record is compared over its own prefix length only, so a record
    /// of length 3 matches every address sharing that OUI.
    pub fn match_addr(&self, feature: InteropFeature, addr: &BdAddr) -> bool {
        let found = self
            .addr_entries()
            .iter()
            .any(|entry| entry.matches(feature, addr));

        if found {
            warn!("Device {addr} is a match for interop addr workaround {feature}");
        }
        found
    }

    /// Whether a device advertising `name` has a name record for `feature`.
    ///
    /// Only `name.len()` bytes are compared, so an input that is a prefix of
    /// a stored pattern matches it (see [`crate::NameEntry::matches`]).
    pub fn match_name(&self, feature: InteropFeature, name: &str) -> bool {
        let found = self
            .name_entries()
            .iter()
            .any(|entry| entry.matches(feature, name));

        if found {
            warn!("Device with name: {name} is a match for interop name workaround {feature}");
        }
        found
    }

    /// Whether `manufacturer` has a manufacturer record for `feature`.
    ///
    /// # Panics
    ///
    /// Debug builds panic when `manufacturer` is 0, the reserved "unset" id.
    /// Release builds return `false` for it.
    pub fn match_manufacturer(&self, feature: InteropFeature, manufacturer: u16) -> bool {
        debug_assert_ne!(manufacturer, 0, "manufacturer id 0 is reserved");
        if manufacturer == 0 {
            return false;
        }

        let found = self
            .manufacturer_entries()
            .iter()
            .any(|entry| entry.matches(feature, manufacturer));

        if found {
            warn!(
                "Device with manufacturer id: {manufacturer} is a match for interop manufacturer workaround {feature}"
            );
        }
        found
    }
}

/// [`InteropDatabase::match_addr`] against the built-in database.
pub fn interop_match_addr(feature: InteropFeature, addr: &BdAddr) -> bool {
    InteropDatabase::builtin().match_addr(feature, addr)
}

/// [`InteropDatabase::match_name`] against the built-in database.
pub fn interop_match_name(feature: InteropFeature, name: &str) -> bool {
    InteropDatabase::builtin().match_name(feature, name)
}

/// [`InteropDatabase::match_manufacturer`] against the built-in database.
///
/// # Panics
///
/// Debug builds panic when `manufacturer` is 0.
pub fn interop_match_manufacturer(feature: InteropFeature, manufacturer: u16) -> bool {
    InteropDatabase::builtin().match_manufacturer(feature, manufacturer)
}
