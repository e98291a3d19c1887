//! Bluetooth device interop quirks
//!
//! Some peripherals mishandle parts of the Bluetooth protocol. This crate
//! answers a single question for the connection and pairing logic: should a
//! given workaround ([`InteropFeature`]) be applied to this device?
//!
//! Devices are identified by one of:
//! - link-layer address ([`BdAddr`]), compared over a per-record prefix length
//! - advertised name, compared over the length of the caller's name
//! - manufacturer (company) id, compared exactly
//!
//! The compiled-in database is read-only and shared by all threads. Extra
//! records can be loaded once at startup from a YAML or JSON file (see
//! [`config`]), producing a new immutable [`InteropDatabase`].
//!
//! # Example
//!
//! ```
//! use bt_interop::{BdAddr, InteropFeature, interop_match_addr, interop_match_name};
//!
//! let car_kit = BdAddr::new([0x9c, 0xdf, 0x03, 0x12, 0x34, 0x56]);
//! assert!(interop_match_addr(InteropFeature::AutoRetryPairing, &car_kit));
//! assert!(interop_match_name(InteropFeature::DisableSdpAfterPairing, "BMW "));
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod address;
mod builtin;
pub mod config;
pub mod database;
pub mod error;
pub mod feature;
pub mod matcher;

pub use address::BdAddr;
pub use config::{AddrConfig, InteropConfig, ManufacturerConfig, NameConfig};
pub use database::{AddrEntry, InteropDatabase, ManufacturerEntry, NameEntry};
pub use error::{InteropError, InteropResult};
pub use feature::{InteropFeature, UNKNOWN_FEATURE_NAME, feature_name_from_raw};
pub use matcher::{interop_match_addr, interop_match_manufacturer, interop_match_name};
