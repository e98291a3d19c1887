//! Compiled-in interop tables.
//!
//! One comment per device or device family. Address records keyed on an OUI
//! (length 3) may catch unrelated products from the same vendor; prefer a
//! 4-byte prefix where the affected range is known.

use crate::database::{AddrEntry, ManufacturerEntry, NameEntry};
use crate::feature::InteropFeature::*;

pub(crate) const ADDR_ENTRIES: &[AddrEntry] = &[
    // Nexus Remote (Spike)
    // Note: may affect other Asus brand devices
    AddrEntry::new(DisableLeSecureConnections, [0x08, 0x62, 0x66, 0, 0, 0], 3),
    AddrEntry::new(DisableLeSecureConnections, [0x38, 0x2c, 0x4a, 0xc9, 0, 0], 4),
    AddrEntry::new(DisableLeSecureConnections, [0x38, 0x2c, 0x4a, 0xe6, 0, 0], 4),
    AddrEntry::new(DisableLeSecureConnections, [0x54, 0xa0, 0x50, 0xd9, 0, 0], 4),
    AddrEntry::new(DisableLeSecureConnections, [0xac, 0x9e, 0x17, 0, 0, 0], 3),
    AddrEntry::new(DisableLeSecureConnections, [0xf0, 0x79, 0x59, 0, 0, 0], 3),
    // Flic smart button
    AddrEntry::new(DisableLeSecureConnections, [0x80, 0xe4, 0xda, 0x70, 0, 0], 4),
    // Motorola Key Link
    AddrEntry::new(DisableLeSecureConnections, [0x1c, 0x96, 0x5a, 0, 0, 0], 3),
    // BMW car kits (Harman/Becker)
    AddrEntry::new(AutoRetryPairing, [0x9c, 0xdf, 0x03, 0, 0, 0], 3),
    // Ausdom M05, unacceptably loud volume
    AddrEntry::new(DisableAbsoluteVolume, [0xa0, 0xe9, 0xdb, 0, 0, 0], 3),
    // iKross IKBT83B HS, unacceptably loud volume
    AddrEntry::new(DisableAbsoluteVolume, [0x00, 0x14, 0x02, 0, 0, 0], 3),
    // JayBird BlueBuds X, low granularity on volume control
    AddrEntry::new(DisableAbsoluteVolume, [0x44, 0x5e, 0xf3, 0, 0, 0], 3),
    AddrEntry::new(DisableAbsoluteVolume, [0xd4, 0x9c, 0x28, 0, 0, 0], 3),
    // LG Tone HBS-730, unacceptably loud volume
    AddrEntry::new(DisableAbsoluteVolume, [0x00, 0x18, 0x6b, 0, 0, 0], 3),
    AddrEntry::new(DisableAbsoluteVolume, [0xb8, 0xad, 0x3e, 0, 0, 0], 3),
    // Motorola Roadster
    AddrEntry::new(DisableAbsoluteVolume, [0x00, 0x24, 0x1c, 0, 0, 0], 3),
    // Mpow Cheetah, unacceptably loud volume
    AddrEntry::new(DisableAbsoluteVolume, [0x00, 0x11, 0xb1, 0, 0, 0], 3),
    // SOL REPUBLIC Tracks Air, volume stuck at max
    AddrEntry::new(DisableAbsoluteVolume, [0xa4, 0x15, 0x66, 0, 0, 0], 3),
    // Swage Rokitboost HS, unacceptably loud volume
    AddrEntry::new(DisableAbsoluteVolume, [0x00, 0x14, 0xf1, 0, 0, 0], 3),
    // VW car kit, not enough granularity with volume
    AddrEntry::new(DisableAbsoluteVolume, [0x00, 0x26, 0x7e, 0, 0, 0], 3),
    AddrEntry::new(DisableAbsoluteVolume, [0x90, 0x03, 0xb7, 0, 0, 0], 3),
];

pub(crate) const NAME_ENTRIES: &[NameEntry] = &[
    // Car kits that tear down the link when SDP is issued right after bonding
    NameEntry::new(DisableSdpAfterPairing, "BMW "),
    NameEntry::new(DisableSdpAfterPairing, "Audi"),
    // Carried over from the legacy pairing retry list
    NameEntry::new(AutoRetryPairing, "BMW"),
    NameEntry::new(AutoRetryPairing, "Audi"),
    NameEntry::new(AutoRetryPairing, "Parrot"),
    // Mice that never complete authentication
    NameEntry::new(DisableAuthForHidPointing, "Targus BT Laser Notebook Mouse"),
    NameEntry::new(DisableAuthForHidPointing, "Bluetooth Laser Travel Mouse"),
    NameEntry::new(DisableAuthForHidPointing, "Microsoft Bluetooth Notebook Mouse 5000"),
    NameEntry::new(DisableAuthForHidPointing, "Logitech MX Revolution Mouse"),
    NameEntry::new(DisableAuthForHidPointing, "Microsoft Sculpt Touch Mouse"),
    // Headsets that drop SCO audio when the ACL enters sniff
    NameEntry::new(DisableSniffDuringSco, "SOUNDSPORT"),
    // Car kits slow to accept the HFP service level connection
    NameEntry::new(IncreaseAgConnTimeout, "HB20"),
];

pub(crate) const MANUFACTURER_ENTRIES: &[ManufacturerEntry] = &[
    // Cambridge Silicon Radio based headsets
    ManufacturerEntry::new(DisableSniffDuringSco, 0x000a),
];
