//! Interop entries loaded from a YAML or JSON file at startup.
//!
//! A config only ever adds records. It is validated and turned into an
//! immutable [`InteropDatabase`], usually appended to the built-in tables
//! with [`InteropDatabase::with_config`].
//!
//! ```yaml
//! addr:
//!   - feature: INTEROP_AUTO_RETRY_PAIRING
//!     address: "9c:df:03:00:00:00"
//!     len: 3
//! name:
//!   - feature: disable_sdp_after_pairing
//!     name: "Porsche"
//! manufacturer:
//!   - feature: INTEROP_DISABLE_SNIFF_DURING_SCO
//!     manufacturer: 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::address::BdAddr;
use crate::database::{AddrEntry, InteropDatabase, ManufacturerEntry, NameEntry};
use crate::error::{InteropError, InteropResult};
use crate::feature::InteropFeature;

/// Address record as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddrConfig {
    pub feature: InteropFeature,
    pub address: BdAddr,
    /// Leading bytes to compare; the whole address when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
}

impl AddrConfig {
    /// Comparison length, defaulting to the full address.
    pub fn prefix_len(&self) -> usize {
        self.len.unwrap_or(BdAddr::LEN)
    }
}

/// Name record as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameConfig {
    pub feature: InteropFeature,
    pub name: String,
}

/// Manufacturer record as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManufacturerConfig {
    pub feature: InteropFeature,
    pub manufacturer: u16,
}

/// Extra interop records, grouped by table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteropConfig {
    #[serde(default)]
    pub addr: Vec<AddrConfig>,
    #[serde(default)]
    pub name: Vec<NameConfig>,
    #[serde(default)]
    pub manufacturer: Vec<ManufacturerConfig>,
}

impl InteropConfig {
    /// Parses a YAML config.
    pub fn from_yaml_str(text: &str) -> InteropResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parses a JSON config.
    pub fn from_json_str(text: &str) -> InteropResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a config file, picking the format from its extension
    /// (`.yaml`, `.yml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`InteropError::UnsupportedFormat`] for any other extension,
    /// [`InteropError::Io`] when the file cannot be read, and a parse error
    /// when its contents are malformed. Entries are not validated here.
    pub fn load(path: impl AsRef<Path>) -> InteropResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> InteropResult<Self> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(InteropError::UnsupportedFormat(path.to_path_buf())),
        };

        debug!("Loading interop config from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| InteropError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&text)?;

        info!(
            "Loaded {} interop entries from {}",
            config.len(),
            path.display()
        );
        Ok(config)
    }

    /// Total number of entries across the three lists.
    pub fn len(&self) -> usize {
        self.addr
            .len()
            .saturating_add(self.name.len())
            .saturating_add(self.manufacturer.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks every entry, reporting the first invalid one by its index
    /// within its own list.
    ///
    /// # Errors
    ///
    /// [`InteropError::InvalidPrefixLength`] for an address length outside
    /// `1..=6`, [`InteropError::EmptyName`] for an empty name pattern and
    /// [`InteropError::InvalidManufacturer`] for manufacturer id 0.
    pub fn validate(&self) -> InteropResult<()> {
        for (index, entry) in self.addr.iter().enumerate() {
            let len = entry.prefix_len();
            if !(1..=BdAddr::LEN).contains(&len) {
                return Err(InteropError::InvalidPrefixLength { index, len });
            }
        }
        if let Some(index) = self.name.iter().position(|entry| entry.name.is_empty()) {
            return Err(InteropError::EmptyName { index });
        }
        if let Some(index) = self
            .manufacturer
            .iter()
            .position(|entry| entry.manufacturer == 0)
        {
            return Err(InteropError::InvalidManufacturer { index });
        }
        Ok(())
    }

    /// Validates the config and builds a database from its entries alone.
    ///
    /// # Errors
    ///
    /// Same as [`InteropConfig::validate`].
    pub fn into_database(self) -> InteropResult<InteropDatabase> {
        self.validate()?;

        let addr = self
            .addr
            .iter()
            .map(|entry| AddrEntry::new(entry.feature, *entry.address.bytes(), entry.prefix_len()))
            .collect();
        let name = self
            .name
            .into_iter()
            .map(|entry| NameEntry::owned(entry.feature, entry.name))
            .collect();
        let manufacturer = self
            .manufacturer
            .iter()
            .map(|entry| ManufacturerEntry::new(entry.feature, entry.manufacturer))
            .collect();

        Ok(InteropDatabase::new(addr, name, manufacturer))
    }
}

impl InteropDatabase {
    /// New database with `config`'s entries appended after this one's.
    ///
    /// # Errors
    ///
    /// Same as [`InteropConfig::validate`].
    pub fn with_config(&self, config: InteropConfig) -> InteropResult<InteropDatabase> {
        let extra = config.into_database()?;
        debug!("Extending interop database with {} entries", extra.len());
        Ok(self.extended(&extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const YAML: &str = r#"
addr:
  - feature: INTEROP_AUTO_RETRY_PAIRING
    address: "aa:bb:cc:00:00:00"
    len: 3
  - feature: disable_absolute_volume
    address: "11:22:33:44:55:66"
name:
  - feature: INTEROP_DISABLE_SDP_AFTER_PAIRING
    name: "Porsche"
manufacturer:
  - feature: INTEROP_DISABLE_SNIFF_DURING_SCO
    manufacturer: 70
"#;

    #[test]
    fn test_yaml_parse() -> TestResult {
        let config = InteropConfig::from_yaml_str(YAML)?;
        assert_eq!(config.len(), 4);
        assert_eq!(config.addr.first().map(AddrConfig::prefix_len), Some(3));
        assert_eq!(config.addr.get(1).map(AddrConfig::prefix_len), Some(6));
        assert_eq!(
            config.name.first().map(|e| e.feature),
            Some(InteropFeature::DisableSdpAfterPairing)
        );
        Ok(())
    }

    #[test]
    fn test_missing_sections_default_to_empty() -> TestResult {
        let config = InteropConfig::from_json_str(r#"{"name": []}"#)?;
        assert!(config.is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = InteropConfig::from_json_str(r#"{"addresses": []}"#);
        assert!(matches!(result, Err(InteropError::Json(_))));
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let result = InteropConfig::from_yaml_str(
            "name:\n  - feature: INTEROP_FLY\n    name: Plane\n",
        );
        assert!(matches!(result, Err(InteropError::Yaml(_))));
    }

    #[test]
    fn test_validation_reports_index() {
        let config = InteropConfig {
            addr: vec![
                AddrConfig {
                    feature: InteropFeature::AutoRetryPairing,
                    address: BdAddr::new([1, 2, 3, 4, 5, 6]),
                    len: Some(3),
                },
                AddrConfig {
                    feature: InteropFeature::AutoRetryPairing,
                    address: BdAddr::new([1, 2, 3, 4, 5, 6]),
                    len: Some(0),
                },
            ],
            ..InteropConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InteropError::InvalidPrefixLength { index: 1, len: 0 })
        ));

        let config = InteropConfig {
            addr: vec![AddrConfig {
                feature: InteropFeature::DisableAbsoluteVolume,
                address: BdAddr::new([1, 2, 3, 4, 5, 6]),
                len: Some(7),
            }],
            ..InteropConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InteropError::InvalidPrefixLength { index: 0, len: 7 })
        ));

        let config = InteropConfig {
            manufacturer: vec![ManufacturerConfig {
                feature: InteropFeature::DisableSniffDuringSco,
                manufacturer: 0,
            }],
            ..InteropConfig::default()
        };
        assert!(matches!(
            config.into_database(),
            Err(InteropError::InvalidManufacturer { index: 0 })
        ));
    }

    #[test]
    fn test_with_config_appends_after_builtin() -> TestResult {
        let config = InteropConfig::from_yaml_str(YAML)?;
        let builtin = InteropDatabase::builtin();
        let db = builtin.with_config(config)?;

        assert_eq!(db.len(), builtin.len() + 4);
        assert_eq!(
            db.name_entries().get(..builtin.name_entries().len()),
            Some(builtin.name_entries())
        );
        assert!(db.match_name(InteropFeature::DisableSdpAfterPairing, "Porsche"));
        assert!(db.match_manufacturer(InteropFeature::DisableSniffDuringSco, 70));
        Ok(())
    }
}
