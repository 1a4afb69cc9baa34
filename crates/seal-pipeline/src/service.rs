//! # Pipeline Service Layer
//!
//! One entry point per pipeline stage, generic over the outbound ports.
//! Each stage is a standalone function because each runtime invocation runs
//! exactly one stage; stages hold no shared state and communicate only
//! through files.

use crate::domain::aggregator;
use crate::domain::entities::{FreezeOutcome, Manifest};
use crate::domain::errors::PipelineError;
use crate::domain::verifier::{self, RejectReason};
use crate::ports::outbound::{KeyCustody, RecordSource};
use seal_crypto::Ed25519Signature;
use std::fs;
use std::path::Path;
use tracing::info;

/// Build the sealed manifest for one batch.
pub fn build_batch_manifest<R: RecordSource>(
    records: &R,
    batch_id: &str,
) -> Result<Manifest, PipelineError> {
    let loaded = records.load_records()?;
    let manifest = aggregator::build_manifest(&loaded, batch_id);
    info!(
        batch_id,
        sealed = manifest.items.len(),
        excluded = loaded.len() - manifest.items.len(),
        "built batch manifest"
    );
    Ok(manifest)
}

/// Sign exact manifest bytes with the custodied identity.
///
/// The bytes are signed as passed; nothing is re-serialized, so the
/// signature covers precisely what the caller persisted.
pub fn sign_manifest<K: KeyCustody>(
    custody: &K,
    manifest_bytes: &[u8],
) -> Result<Ed25519Signature, PipelineError> {
    let signature = custody.sign(manifest_bytes)?;
    info!(bytes = manifest_bytes.len(), "signed manifest");
    Ok(signature)
}

/// Transition every DRAFT record to FROZEN.
pub fn freeze_records<R: RecordSource>(records: &R) -> Result<FreezeOutcome, PipelineError> {
    let outcome = records.freeze_drafts()?;
    info!(
        frozen = outcome.frozen.len(),
        skipped = outcome.skipped,
        "freeze pass complete"
    );
    Ok(outcome)
}

/// Verify a manifest/signature pair on disk.
///
/// Runs the full rejection precedence: the public key is checked before any
/// artifact is opened, unreadable artifacts reject as `MissingArtifact`, and
/// only well-formed input reaches cryptographic verification.
pub fn verify_manifest_files(
    public_key_hex: &str,
    manifest_path: &Path,
    signature_path: &Path,
) -> Result<(), RejectReason> {
    let public_key = verifier::parse_public_key(public_key_hex)?;

    let manifest_bytes = read_artifact(manifest_path)?;
    let signature_bytes = read_artifact(signature_path)?;

    // Non-UTF-8 signature bytes cannot be hex, so lossy conversion can only
    // lead to MalformedSignature, never a false accept.
    let signature_hex = String::from_utf8_lossy(&signature_bytes);
    let signature = verifier::parse_signature(&signature_hex)?;

    public_key
        .verify(&manifest_bytes, &signature)
        .map_err(|_| RejectReason::BadSignature)
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, RejectReason> {
    fs::read(path).map_err(|_| RejectReason::MissingArtifact {
        path: path.to_path_buf(),
    })
}
