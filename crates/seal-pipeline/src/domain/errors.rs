//! # Pipeline Errors
//!
//! Terminal failures for pipeline stages. Every variant aborts the current
//! invocation; stages never retry, and a failed stage writes no partial
//! output. Verification rejections are deliberately a separate type
//! ([`crate::domain::verifier::RejectReason`]) so an integrity rejection can
//! never be mistaken for an infrastructure failure.

use crate::ports::outbound::CustodyError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Record directory does not exist
    #[error("Input missing: {}", path.display())]
    InputMissing {
        /// The expected record directory
        path: PathBuf,
    },

    /// A record file could not be parsed into `canonical_id` and `status`
    #[error("Invalid record {}: {reason}", path.display())]
    InvalidRecord {
        /// The offending record file
        path: PathBuf,
        /// Parse failure detail
        reason: String,
    },

    /// Key file exists but its contents are not a usable seed
    #[error("Malformed key material at {}: {reason}", path.display())]
    KeyFormat {
        /// The key file
        path: PathBuf,
        /// What was wrong with the material
        reason: String,
    },

    /// The signing backend failed or refused
    #[error(transparent)]
    Custody(#[from] CustodyError),

    /// Manifest serialization failure
    #[error("Manifest serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying filesystem failure
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path being read or written
        path: PathBuf,
        /// The originating error
        #[source]
        source: std::io::Error,
    },
}
