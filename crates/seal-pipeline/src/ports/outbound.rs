//! # Outbound Ports (Driven Ports)
//!
//! Traits that define the capabilities this pipeline needs.
//!
//! `KeyCustody` keeps the signing stages independent of how key material is
//! held: the file-backed keystore is one implementation, and a remote signer
//! or HSM can replace it without touching the signing or verification code.

use crate::domain::entities::{FreezeOutcome, Record};
use crate::domain::errors::PipelineError;
use seal_crypto::{Ed25519PublicKey, Ed25519Signature};
use std::path::PathBuf;
use thiserror::Error;

/// Error from a signing backend.
#[derive(Debug, Error)]
pub enum CustodyError {
    /// The backend or its key material is unavailable
    #[error("Signing backend unavailable: {reason}")]
    Unavailable {
        /// Why the backend could not be reached or loaded
        reason: String,
    },

    /// The backend refused to sign
    #[error("Signing rejected: {reason}")]
    Rejected {
        /// Why the request was refused
        reason: String,
    },
}

/// A custodied Ed25519 signing identity.
///
/// Implementations own exactly one identity. Both operations may fail for
/// backends that hold keys remotely; the file-backed keystore never does.
pub trait KeyCustody: Send + Sync {
    /// Produce a detached signature over `message`.
    fn sign(&self, message: &[u8]) -> Result<Ed25519Signature, CustodyError>;

    /// The public half of the identity, for out-of-band distribution.
    fn public_key(&self) -> Result<Ed25519PublicKey, CustodyError>;
}

/// Error from the record store.
#[derive(Debug, Error)]
pub enum RecordSourceError {
    /// The record directory does not exist
    #[error("Record directory not found: {}", path.display())]
    Missing {
        /// The expected directory
        path: PathBuf,
    },

    /// A record file could not be parsed
    #[error("Invalid record {}: {reason}", path.display())]
    InvalidRecord {
        /// The offending file
        path: PathBuf,
        /// Parse failure detail
        reason: String,
    },

    /// Underlying filesystem failure
    #[error("Record store I/O error at {}: {source}", path.display())]
    Io {
        /// The path being read or written
        path: PathBuf,
        /// The originating error
        #[source]
        source: std::io::Error,
    },
}

impl From<RecordSourceError> for PipelineError {
    fn from(err: RecordSourceError) -> Self {
        match err {
            RecordSourceError::Missing { path } => PipelineError::InputMissing { path },
            RecordSourceError::InvalidRecord { path, reason } => {
                PipelineError::InvalidRecord { path, reason }
            }
            RecordSourceError::Io { path, source } => PipelineError::Io { path, source },
        }
    }
}

/// Supplier and lifecycle manager for batch records.
pub trait RecordSource: Send + Sync {
    /// Load every record in the batch, with its raw bytes.
    ///
    /// An empty batch is valid and returns an empty vector; a missing
    /// directory is `RecordSourceError::Missing`.
    fn load_records(&self) -> Result<Vec<Record>, RecordSourceError>;

    /// Transition every DRAFT record to FROZEN.
    ///
    /// Records in any other status are skipped. Zero transitions is not an
    /// error. This is the only operation anywhere in the pipeline that
    /// mutates record files.
    fn freeze_drafts(&self) -> Result<FreezeOutcome, RecordSourceError>;
}
