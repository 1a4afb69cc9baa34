//! # Seal Pipeline - Manifest Integrity & Signing
//!
//! Turns a directory of validated registry records into a sealed batch
//! manifest: eligible records are digested and canonically ordered, the
//! manifest is serialized to a stable byte form, signed with a file-backed
//! Ed25519 identity, and later checked against its detached signature.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): aggregation and verification logic, no I/O
//! - **Ports Layer** (`ports/`): outbound capability traits (key custody, record source)
//! - **Adapters Layer** (`adapters/`): file-backed implementations of the ports
//! - **Service Layer** (`service.rs`): one entry point per pipeline stage
//!
//! ## Pipeline Stages
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | `freeze` | DRAFT records | FROZEN records |
//! | `build` | PASS records | canonical manifest bytes |
//! | `sign` | manifest bytes + identity | detached hex signature |
//! | `verify` | manifest bytes + signature + public key | Accept / Reject(reason) |
//!
//! Stages share no in-memory state; they communicate only through files, so
//! any stage can be re-run in isolation.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::keystore::FileKeyStore;
pub use adapters::records::FsRecordSource;
pub use domain::aggregator::build_manifest;
pub use domain::entities::{
    ContentDigest, FreezeOutcome, Manifest, ManifestItem, ManifestMeta, Record, RecordStatus,
    MANIFEST_TYPE,
};
pub use domain::errors::PipelineError;
pub use domain::verifier::{verify_detached, RejectReason};
pub use ports::outbound::{CustodyError, KeyCustody, RecordSource, RecordSourceError};
