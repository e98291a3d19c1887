//! Interop record types and the immutable database that holds them.
//!
//! A database is three independent ordered lists: address records, name
//! records and manufacturer records. Order does not affect correctness, but
//! lookups stop at the first matching record.

use std::borrow::Cow;

use serde::Serialize;

use crate::address::BdAddr;
use crate::builtin;
use crate::feature::InteropFeature;

/// "This address, or its first `len` bytes, triggers `feature`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddrEntry {
    pub feature: InteropFeature,
    pub addr: BdAddr,
    /// Number of leading address bytes compared, `1..=6`.
    pub len: usize,
}

impl AddrEntry {
    /// Record comparing the first `len` bytes of `addr`.
    pub const fn new(feature: InteropFeature, addr: [u8; 6], len: usize) -> Self {
        Self {
            feature,
            addr: BdAddr::new(addr),
            len,
        }
    }

    /// Whether `len` is a usable comparison length.
    pub const fn has_valid_len(&self) -> bool {
        self.len >= 1 && self.len <= BdAddr::LEN
    }

    /// Whether the record applies `feature` to `addr`.
    pub fn matches(&self, feature: InteropFeature, addr: &BdAddr) -> bool {
        self.feature == feature && addr.matches_prefix(self.addr.bytes(), self.len)
    }
}

/// "A device whose advertised name lines up with `name` triggers `feature`."
///
/// See [`NameEntry::matches`] for the exact comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameEntry {
    pub feature: InteropFeature,
    pub name: Cow<'static, str>,
}

impl NameEntry {
    /// Record with a static pattern, usable in `const` tables.
    pub const fn new(feature: InteropFeature, name: &'static str) -> Self {
        Self {
            feature,
            name: Cow::Borrowed(name),
        }
    }

    /// Record with a pattern built at runtime.
    pub fn owned(feature: InteropFeature, name: String) -> Self {
        Self {
            feature,
            name: Cow::Owned(name),
        }
    }

    /// Compares only as many bytes as `name` holds against the stored pattern.
    ///
    /// The input therefore matches when it is a prefix of the pattern: `"BM"`
    /// matches a `"BMW "` record, while `"BMW 3"` does not. An empty input
    /// matches any record of the feature.
    pub fn matches(&self, feature: InteropFeature, name: &str) -> bool {
        self.feature == feature && self.name.as_bytes().starts_with(name.as_bytes())
    }
}

/// "A device reporting this manufacturer (company) id triggers `feature`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManufacturerEntry {
    pub feature: InteropFeature,
    pub manufacturer: u16,
}

impl ManufacturerEntry {
    /// Record for one manufacturer id.
    pub const fn new(feature: InteropFeature, manufacturer: u16) -> Self {
        Self {
            feature,
            manufacturer,
        }
    }

    /// Whether the record applies `feature` to `manufacturer`.
    pub fn matches(&self, feature: InteropFeature, manufacturer: u16) -> bool {
        self.feature == feature && self.manufacturer == manufacturer
    }
}

/// Immutable set of interop records.
///
/// The compiled-in tables are available through [`InteropDatabase::builtin`];
/// additional databases are built once (usually from an
/// [`InteropConfig`](crate::config::InteropConfig)) and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteropDatabase {
    addr: Cow<'static, [AddrEntry]>,
    name: Cow<'static, [NameEntry]>,
    manufacturer: Cow<'static, [ManufacturerEntry]>,
}

static BUILTIN: InteropDatabase = InteropDatabase::from_static(
    builtin::ADDR_ENTRIES,
    builtin::NAME_ENTRIES,
    builtin::MANUFACTURER_ENTRIES,
);

impl InteropDatabase {
    /// The compiled-in interop tables.
    pub fn builtin() -> &'static InteropDatabase {
        &BUILTIN
    }

    /// Database with no records.
    pub const fn empty() -> Self {
        Self::from_static(&[], &[], &[])
    }

    /// Database borrowing `'static` tables without copying them.
    pub const fn from_static(
        addr: &'static [AddrEntry],
        name: &'static [NameEntry],
        manufacturer: &'static [ManufacturerEntry],
    ) -> Self {
        Self {
            addr: Cow::Borrowed(addr),
            name: Cow::Borrowed(name),
            manufacturer: Cow::Borrowed(manufacturer),
        }
    }

    /// Database owning tables built at runtime.
    pub fn new(
        addr: Vec<AddrEntry>,
        name: Vec<NameEntry>,
        manufacturer: Vec<ManufacturerEntry>,
    ) -> Self {
        Self {
            addr: Cow::Owned(addr),
            name: Cow::Owned(name),
            manufacturer: Cow::Owned(manufacturer),
        }
    }

    /// Address records in scan order.
    pub fn addr_entries(&self) -> &[AddrEntry] {
        &self.addr
    }

    /// Name records in scan order.
    pub fn name_entries(&self) -> &[NameEntry] {
        &self.name
    }

    /// Manufacturer records in scan order.
    pub fn manufacturer_entries(&self) -> &[ManufacturerEntry] {
        &self.manufacturer
    }

    /// Total number of records across the three tables.
    pub fn len(&self) -> usize {
        self.addr
            .len()
            .saturating_add(self.name.len())
            .saturating_add(self.manufacturer.len())
    }

    /// Whether all three tables are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// New database holding this database's records followed by `extra`'s.
    ///
    /// Records from `self` keep precedence since lookups stop at the first match.
    pub fn extended(&self, extra: &InteropDatabase) -> InteropDatabase {
        InteropDatabase::new(
            self.addr.iter().chain(extra.addr.iter()).copied().collect(),
            self.name.iter().chain(extra.name.iter()).cloned().collect(),
            self.manufacturer
                .iter()
                .chain(extra.manufacturer.iter())
                .copied()
                .collect(),
        )
    }

    /// Features with at least one record in any table.
    pub fn features(&self) -> Vec<InteropFeature> {
        InteropFeature::ALL
            .into_iter()
            .filter(|feature| {
                self.addr.iter().any(|e| e.feature == *feature)
                    || self.name.iter().any(|e| e.feature == *feature)
                    || self.manufacturer.iter().any(|e| e.feature == *feature)
            })
            .collect()
    }
}

impl Default for InteropDatabase {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_static_and_populated() {
        let db = InteropDatabase::builtin();
        assert!(!db.is_empty());
        assert!(matches!(db.addr, Cow::Borrowed(_)));
        assert_eq!(
            db.len(),
            db.addr_entries().len() + db.name_entries().len() + db.manufacturer_entries().len()
        );
    }

    #[test]
    fn test_builtin_address_lengths_are_valid() {
        for entry in InteropDatabase::builtin().addr_entries() {
            assert!(entry.has_valid_len(), "bad length in {entry:?}");
        }
    }

    #[test]
    fn test_builtin_names_and_manufacturers_are_usable() {
        let db = InteropDatabase::builtin();
        assert!(db.name_entries().iter().all(|e| !e.name.is_empty()));
        assert!(db.manufacturer_entries().iter().all(|e| e.manufacturer != 0));
    }

    #[test]
    fn test_extended_preserves_order() {
        let base = InteropDatabase::new(
            vec![AddrEntry::new(
                InteropFeature::AutoRetryPairing,
                [1, 2, 3, 0, 0, 0],
                3,
            )],
            vec![NameEntry::new(InteropFeature::DisableSdpAfterPairing, "Base")],
            vec![],
        );
        let extra = InteropDatabase::new(
            vec![AddrEntry::new(
                InteropFeature::DisableAbsoluteVolume,
                [4, 5, 6, 0, 0, 0],
                3,
            )],
            vec![],
            vec![ManufacturerEntry::new(
                InteropFeature::DisableSniffDuringSco,
                0x000A,
            )],
        );

        let merged = base.extended(&extra);
        assert_eq!(merged.len(), 4);
        assert_eq!(
            merged.addr_entries().first().map(|e| e.feature),
            Some(InteropFeature::AutoRetryPairing)
        );
        assert_eq!(
            merged.addr_entries().get(1).map(|e| e.feature),
            Some(InteropFeature::DisableAbsoluteVolume)
        );
        assert_eq!(merged.manufacturer_entries().len(), 1);
    }

    #[test]
    fn test_features_lists_referenced_features_only() {
        let db = InteropDatabase::new(
            vec![],
            vec![NameEntry::owned(
                InteropFeature::IncreaseAgConnTimeout,
                "Headset".to_string(),
            )],
            vec![],
        );
        assert_eq!(db.features(), vec![InteropFeature::IncreaseAgConnTimeout]);
        assert!(InteropDatabase::empty().features().is_empty());
    }

    #[test]
    fn test_name_entry_asymmetric_prefix() {
        let entry = NameEntry::new(InteropFeature::DisableSdpAfterPairing, "abcdef");
        assert!(entry.matches(InteropFeature::DisableSdpAfterPairing, "abc"));
        assert!(entry.matches(InteropFeature::DisableSdpAfterPairing, "abcdef"));
        assert!(entry.matches(InteropFeature::DisableSdpAfterPairing, ""));
        assert!(!entry.matches(InteropFeature::DisableSdpAfterPairing, "abcx"));
        assert!(!entry.matches(InteropFeature::DisableSdpAfterPairing, "abcdefg"));
        assert!(!entry.matches(InteropFeature::AutoRetryPairing, "abc"));
    }
}
