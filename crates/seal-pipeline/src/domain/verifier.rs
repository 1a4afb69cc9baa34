//! # Manifest Verifier
//!
//! Detached-signature verification over exact manifest bytes.
//!
//! ## Rejection Precedence
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. `MissingPublicKey` - no key supplied (empty after trimming)
//! 2. `MalformedPublicKey` - key is not hex or not exactly 32 bytes
//! 3. `MissingArtifact` - manifest or signature bytes unreadable
//! 4. `MalformedSignature` - signature is not hex or not exactly 64 bytes
//! 5. `BadSignature` - cryptographic mismatch
//!
//! Step 3 lives at the file-reading boundary (see the service layer); the
//! functions here cover the byte-level steps. The ordering guarantees that
//! `BadSignature` always means real cryptographic rejection, never an input
//! that was malformed before any curve work ran.

use seal_crypto::{Ed25519PublicKey, Ed25519Signature};
use std::path::PathBuf;
use thiserror::Error;

/// Why a manifest failed verification.
///
/// Each variant is a distinct, stable reason; automation can branch on
/// [`RejectReason::code`] without parsing display text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RejectReason {
    /// No public key was supplied
    #[error("no public key supplied")]
    MissingPublicKey,

    /// Supplied key is not hex or not exactly 32 bytes
    #[error("malformed public key: {detail}")]
    MalformedPublicKey {
        /// What was wrong with the key material
        detail: String,
    },

    /// Manifest or signature bytes could not be read
    #[error("missing artifact: {}", path.display())]
    MissingArtifact {
        /// The unreadable artifact
        path: PathBuf,
    },

    /// Stored signature is not hex or not exactly 64 bytes
    #[error("malformed signature: {detail}")]
    MalformedSignature {
        /// What was wrong with the signature material
        detail: String,
    },

    /// Signature does not match the manifest bytes under the supplied key
    #[error("signature does not match manifest bytes")]
    BadSignature,
}

impl RejectReason {
    /// Stable machine-readable code, independent of the display message.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::MissingPublicKey => "MissingPublicKey",
            RejectReason::MalformedPublicKey { .. } => "MalformedPublicKey",
            RejectReason::MissingArtifact { .. } => "MissingArtifact",
            RejectReason::MalformedSignature { .. } => "MalformedSignature",
            RejectReason::BadSignature => "BadSignature",
        }
    }
}

/// Apply the missing/malformed checks to the supplied public key.
pub fn parse_public_key(public_key_hex: &str) -> Result<Ed25519PublicKey, RejectReason> {
    let trimmed = public_key_hex.trim();
    if trimmed.is_empty() {
        return Err(RejectReason::MissingPublicKey);
    }
    Ed25519PublicKey::from_hex(trimmed).map_err(|e| RejectReason::MalformedPublicKey {
        detail: e.to_string(),
    })
}

/// Apply the malformed check to the stored signature hex.
pub fn parse_signature(signature_hex: &str) -> Result<Ed25519Signature, RejectReason> {
    Ed25519Signature::from_hex(signature_hex).map_err(|e| RejectReason::MalformedSignature {
        detail: e.to_string(),
    })
}

/// Verify a detached signature over the exact manifest bytes.
///
/// The bytes are verified as-is; the manifest is never re-parsed or
/// re-serialized here, so what was signed is literally what is checked.
pub fn verify_detached(
    public_key_hex: &str,
    manifest_bytes: &[u8],
    signature_hex: &str,
) -> Result<(), RejectReason> {
    let public_key = parse_public_key(public_key_hex)?;
    let signature = parse_signature(signature_hex)?;

    public_key
        .verify(manifest_bytes, &signature)
        .map_err(|_| RejectReason::BadSignature)
}
