//! Workaround features that the interop database can enable for a device.
//!
//! Every feature names one protocol behaviour the stack deviates from when
//! talking to hardware known to mishandle it. The set is closed: adding a
//! workaround means adding a variant here together with its display name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InteropError;

/// Display string returned for raw feature values with no variant.
pub const UNKNOWN_FEATURE_NAME: &str = "UNKNOWN";

const NAME_PREFIX: &str = "INTEROP_";

/// A named protocol deviation applied to specific misbehaving hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum InteropFeature {
    /// Disable secure connections for LE pairing.
    ///
    /// Some remotes and smart buttons fail bonding when the SC bit is set in
    /// the pairing request.
    DisableLeSecureConnections = 0,
    /// Retry pairing once after a failed attempt.
    ///
    /// Certain car kits reject the first pairing attempt after boot.
    AutoRetryPairing = 1,
    /// Skip the SDP service search that normally follows pairing.
    DisableSdpAfterPairing = 2,
    /// Do not require authentication for HID pointing devices.
    DisableAuthForHidPointing = 3,
    /// Keep the link out of sniff mode while an SCO link is open.
    DisableSniffDuringSco = 4,
    /// Extend the audio gateway connection timeout.
    IncreaseAgConnTimeout = 5,
    /// Do not use AVRCP absolute volume.
    ///
    /// Devices with a coarse or broken volume curve end up unacceptably loud.
    DisableAbsoluteVolume = 6,
}

impl InteropFeature {
    /// All features in raw-value order.
    pub const ALL: [InteropFeature; 7] = [
        InteropFeature::DisableLeSecureConnections,
        InteropFeature::AutoRetryPairing,
        InteropFeature::DisableSdpAfterPairing,
        InteropFeature::DisableAuthForHidPointing,
        InteropFeature::DisableSniffDuringSco,
        InteropFeature::IncreaseAgConnTimeout,
        InteropFeature::DisableAbsoluteVolume,
    ];

    /// Display name used in logs and configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DisableLeSecureConnections => "INTEROP_DISABLE_LE_SECURE_CONNECTIONS",
            Self::AutoRetryPairing => "INTEROP_AUTO_RETRY_PAIRING",
            Self::DisableSdpAfterPairing => "INTEROP_DISABLE_SDP_AFTER_PAIRING",
            Self::DisableAuthForHidPointing => "INTEROP_DISABLE_AUTH_FOR_HID_POINTING",
            Self::DisableSniffDuringSco => "INTEROP_DISABLE_SNIFF_DURING_SCO",
            Self::IncreaseAgConnTimeout => "INTEROP_INCREASE_AG_CONN_TIMEOUT",
            Self::DisableAbsoluteVolume => "INTEROP_DISABLE_ABSOLUTE_VOLUME",
        }
    }

    /// Stable numeric id of the feature.
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Feature with the given numeric id, if any.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|feature| feature.raw() == raw)
    }
}

/// Display name for a raw feature value, or [`UNKNOWN_FEATURE_NAME`] when the
/// value has no variant.
pub fn feature_name_from_raw(raw: u32) -> &'static str {
    InteropFeature::from_raw(raw).map_or(UNKNOWN_FEATURE_NAME, InteropFeature::name)
}

impl fmt::Display for InteropFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteropFeature {
    type Err = InteropError;

    /// Accepts the display name, or the same name without the `INTEROP_`
    /// prefix in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let short = upper.strip_prefix(NAME_PREFIX).unwrap_or(upper.as_str());

        Self::ALL
            .into_iter()
            .find(|feature| feature.name().strip_prefix(NAME_PREFIX) == Some(short))
            .ok_or_else(|| InteropError::UnknownFeature(s.to_string()))
    }
}

impl Serialize for InteropFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for InteropFeature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
