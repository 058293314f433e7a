//! The two override policies.
//!
//! [`overlay`] backs `load_and_return`: later entries always win.
//! [`apply_protected`] backs `load`: later entries win, except over keys that
//! were already in the store before the load began. The two are kept as
//! separate functions so neither contract can drift into the other.

use crate::EnvMap;
use crate::env::{EnvSnapshot, EnvStore};
use crate::types::{Entry, LoadReport};

/// Merge `entries` on top of `map`, overwriting unconditionally.
pub fn overlay(map: &mut EnvMap, entries: impl IntoIterator<Item = Entry>) {
    for entry in entries {
        map.insert(entry.key, entry.value);
    }
}

/// Write `entries` into `store`, skipping keys present in `snapshot`.
///
/// Skipped keys are recorded once each in `report.skipped_existing`; every
/// accepted write increments `report.applied`.
pub fn apply_protected<S: EnvStore + ?Sized>(
    store: &mut S,
    snapshot: &EnvSnapshot,
    entries: impl IntoIterator<Item = Entry>,
    report: &mut LoadReport,
) {
    for entry in entries {
        if snapshot.contains(&entry.key) {
            if !report.skipped_existing.contains(&entry.key) {
                report.skipped_existing.push(entry.key);
            }
            continue;
        }
        if store.set_var(&entry.key, &entry.value) {
            report.applied += 1;
        }
    }
}
