//! # Pipeline Entities
//!
//! Core types for record batches and sealed manifests.
//!
//! A `Record` carries the raw bytes of one validated registry file plus the
//! two fields the pipeline re-checks (`canonical_id`, `status`). Everything
//! else inside the record is opaque here; upstream schema validation owns it.

use seal_crypto::digest::{sha256, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Manifest `meta.type` marker for sealed batch manifests.
pub const MANIFEST_TYPE: &str = "CANONSEAL_BATCH_MANIFEST";

// ============================================================================
// Record lifecycle
// ============================================================================

/// Lifecycle status of a registry record.
///
/// Only `PASS` records are eligible for a manifest. Unrecognized status
/// strings deserialize to `Unknown` and are excluded, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Submitted but not yet locked for review
    #[serde(rename = "DRAFT")]
    Draft,

    /// Locked for review; content may no longer change
    #[serde(rename = "FROZEN")]
    Frozen,

    /// Passed validation; eligible for sealing
    #[serde(rename = "PASS")]
    Pass,

    /// Any status string this pipeline does not recognize
    #[serde(other)]
    Unknown,
}

impl RecordStatus {
    /// Whether a record with this status belongs in a manifest.
    pub fn is_eligible(&self) -> bool {
        matches!(self, RecordStatus::Pass)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordStatus::Draft => "DRAFT",
            RecordStatus::Frozen => "FROZEN",
            RecordStatus::Pass => "PASS",
            RecordStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", label)
    }
}

/// A registry record loaded into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Globally unique identifier within the batch
    pub canonical_id: String,
    /// Lifecycle status at load time
    pub status: RecordStatus,
    /// Raw serialized bytes exactly as stored on disk
    pub bytes: Vec<u8>,
}

impl Record {
    /// Create a record from its identity, status, and raw on-disk bytes.
    pub fn new(canonical_id: impl Into<String>, status: RecordStatus, bytes: Vec<u8>) -> Self {
        Self {
            canonical_id: canonical_id.into(),
            status,
            bytes,
        }
    }
}

/// Result of a freeze pass over the record directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreezeOutcome {
    /// Paths of records that transitioned DRAFT to FROZEN
    pub frozen: Vec<PathBuf>,
    /// Records left untouched (already frozen, passed, or unknown)
    pub skipped: usize,
}

// ============================================================================
// Digests
// ============================================================================

/// Formatted content digest: `sha256:` followed by 64 lowercase hex chars.
///
/// This string form is what manifests carry and what the aggregate digest is
/// computed over, so it is part of the wire format, not a display nicety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Algorithm prefix carried by every digest string.
    pub const PREFIX: &'static str = "sha256:";

    /// Format raw digest bytes into the wire form.
    pub fn from_digest(digest: &Digest) -> Self {
        Self(format!("{}{}", Self::PREFIX, hex::encode(digest)))
    }

    /// Digest arbitrary content bytes.
    pub fn of(bytes: &[u8]) -> Self {
        Self::from_digest(&sha256(bytes))
    }

    /// The full `sha256:<hex>` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for digest strings that are not `sha256:` + 64 lowercase hex chars.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed content digest: {value}")]
pub struct MalformedDigest {
    /// The rejected input
    pub value: String,
}

impl FromStr for ContentDigest {
    type Err = MalformedDigest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || MalformedDigest {
            value: s.to_string(),
        };
        let hex_part = s.strip_prefix(Self::PREFIX).ok_or_else(reject)?;
        if hex_part.len() != 64 {
            return Err(reject());
        }
        if !hex_part
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(reject());
        }
        Ok(Self(s.to_string()))
    }
}

// ============================================================================
// Manifest
// ============================================================================

/// Manifest metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestMeta {
    /// Always [`MANIFEST_TYPE`] for batch manifests
    #[serde(rename = "type")]
    pub manifest_type: String,
    /// Caller-supplied batch identifier
    pub batch_id: String,
}

/// One sealed record entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestItem {
    /// Record identity
    pub canonical_id: String,
    /// Digest of the record's raw bytes
    pub content_digest: ContentDigest,
    /// Status at sealing time (always eligible)
    pub status: RecordStatus,
}

/// A sealed batch manifest.
///
/// Field order here is the serialized field order; changing it changes the
/// canonical bytes and breaks every existing signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Metadata block
    pub meta: ManifestMeta,
    /// Digest binding the ordered item digests together
    pub aggregate_digest: ContentDigest,
    /// Sealed records in canonical order
    pub items: Vec<ManifestItem>,
}

impl Manifest {
    /// Assemble a manifest for one batch.
    pub fn new(
        batch_id: impl Into<String>,
        aggregate_digest: ContentDigest,
        items: Vec<ManifestItem>,
    ) -> Self {
        Self {
            meta: ManifestMeta {
                manifest_type: MANIFEST_TYPE.to_string(),
                batch_id: batch_id.into(),
            },
            aggregate_digest,
            items,
        }
    }

    /// Canonical on-disk encoding: pretty JSON with two-space indentation.
    ///
    /// Signing and verification operate on exactly these bytes. Repeated
    /// calls on the same manifest are byte-identical.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }
}
