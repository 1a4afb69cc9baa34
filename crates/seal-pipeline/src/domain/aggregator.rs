//! # Record Aggregator
//!
//! Builds the sealed manifest for one batch: filters eligible records,
//! digests their raw bytes, orders the items canonically, and derives the
//! aggregate digest.
//!
//! Ordering is part of the contract. Items are sorted by `canonical_id`
//! (byte-wise), never by filesystem iteration order, so a fixed record set
//! always produces byte-identical manifest output.

use crate::domain::entities::{ContentDigest, Manifest, ManifestItem, Record};
use seal_crypto::Sha256Hasher;
use tracing::debug;

/// Build a manifest over the eligible records of one batch.
///
/// Ineligible records (anything but `PASS`) are excluded, not errors; the
/// exclusion is logged at debug level. An empty eligible set yields a valid
/// manifest whose aggregate digest is the digest of zero bytes.
pub fn build_manifest(records: &[Record], batch_id: &str) -> Manifest {
    let mut items: Vec<ManifestItem> = records
        .iter()
        .filter(|record| {
            let eligible = record.status.is_eligible();
            if !eligible {
                debug!(
                    canonical_id = %record.canonical_id,
                    status = %record.status,
                    "record excluded from manifest"
                );
            }
            eligible
        })
        .map(|record| ManifestItem {
            canonical_id: record.canonical_id.clone(),
            content_digest: ContentDigest::of(&record.bytes),
            status: record.status,
        })
        .collect();

    // Canonical order; digest as a tiebreak keeps even pathological
    // duplicate-id input deterministic.
    items.sort_by(|a, b| {
        a.canonical_id
            .cmp(&b.canonical_id)
            .then_with(|| a.content_digest.as_str().cmp(b.content_digest.as_str()))
    });

    let aggregate = aggregate_digest(&items);
    Manifest::new(batch_id, aggregate, items)
}

/// Aggregate digest over already-ordered items.
///
/// SHA-256 of the UTF-8 concatenation of the formatted per-item digest
/// strings, in item order. The digest strings (not the raw digest bytes) are
/// the hashed material, so the manifest text and the aggregate agree on one
/// representation.
pub fn aggregate_digest(items: &[ManifestItem]) -> ContentDigest {
    let mut hasher = Sha256Hasher::new();
    for item in items {
        hasher.update(item.content_digest.as_str().as_bytes());
    }
    ContentDigest::from_digest(&hasher.finalize())
}
