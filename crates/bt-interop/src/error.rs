//! Error types for interop database construction and parsing.
//!
//! Lookups themselves never fail; these errors only surface while parsing
//! identifiers or loading an interop configuration.

use std::path::PathBuf;

/// Errors returned while parsing interop identifiers or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum InteropError {
    /// Feature name does not correspond to any [`crate::InteropFeature`]
    #[error("Unknown interop feature: {0}")]
    UnknownFeature(String),

    /// Text is not a colon-separated 6-byte Bluetooth address
    #[error("Invalid Bluetooth address: {0:?}")]
    InvalidAddress(String),

    /// Address record comparison length outside `1..=6`
    #[error("Address entry {index}: prefix length {len} is outside 1..=6")]
    InvalidPrefixLength {
        /// Position of the entry in its list
        index: usize,
        /// Rejected comparison length
        len: usize,
    },

    /// Name record with an empty pattern
    #[error("Name entry {index}: pattern must not be empty")]
    EmptyName {
        /// Position of the entry in its list
        index: usize,
    },

    /// Manufacturer record using the reserved id 0
    #[error("Manufacturer entry {index}: manufacturer id 0 is reserved")]
    InvalidManufacturer {
        /// Position of the entry in its list
        index: usize,
    },

    /// Config file extension is neither YAML nor JSON
    #[error("Unsupported interop config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Config file could not be read
    #[error("Failed to read interop config {}: {source}", path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// YAML config failed to deserialize
    #[error("Invalid YAML interop config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON config failed to deserialize
    #[error("Invalid JSON interop config: {0}")]
    Json(#[from] serde_json::Error),
}

impl InteropError {
    /// Whether the error comes from a malformed entry rather than from I/O or syntax.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            InteropError::InvalidPrefixLength { .. }
                | InteropError::EmptyName { .. }
                | InteropError::InvalidManufacturer { .. }
        )
    }
}

/// Convenience result alias for interop operations.
pub type InteropResult<T> = Result<T, InteropError>;
