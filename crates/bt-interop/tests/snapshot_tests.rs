//! Snapshot tests for the interop tables.
//!
//! These lock in the feature display names and the shape of the built-in
//! database so table edits show up in review.

use std::fmt::Write;

use bt_interop::{InteropDatabase, InteropFeature, feature_name_from_raw};
use insta::assert_snapshot;

#[test]
fn test_snapshot_feature_names() -> Result<(), std::fmt::Error> {
    let mut table = String::new();
    for raw in 0..=InteropFeature::ALL.len() as u32 {
        writeln!(table, "{raw} {}", feature_name_from_raw(raw))?;
    }
    assert_snapshot!("feature_names", table);
    Ok(())
}

#[test]
fn test_snapshot_builtin_summary() -> Result<(), std::fmt::Error> {
    let db = InteropDatabase::builtin();
    let mut summary = String::new();
    for feature in InteropFeature::ALL {
        writeln!(
            summary,
            "{feature}: addr={} name={} manufacturer={}",
            db.addr_entries().iter().filter(|e| e.feature == feature).count(),
            db.name_entries().iter().filter(|e| e.feature == feature).count(),
            db.manufacturer_entries()
                .iter()
                .filter(|e| e.feature == feature)
                .count(),
        )?;
    }
    assert_snapshot!("builtin_summary", summary);
    Ok(())
}

#[test]
fn test_snapshot_builtin_address_records() -> Result<(), std::fmt::Error> {
    let mut listing = String::new();
    for entry in InteropDatabase::builtin()
        .addr_entries()
        .iter()
        .filter(|e| e.feature == InteropFeature::DisableLeSecureConnections)
    {
        writeln!(listing, "{}/{}", entry.addr, entry.len)?;
    }
    assert_snapshot!("le_secure_connections_addresses", listing);
    Ok(())
}
