//! CLI argument definitions for canonseal.
//!
//! Uses clap for argument parsing. Every pipeline stage is one subcommand;
//! path defaults follow the registry's on-disk layout so a bare invocation
//! works from the repository root.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default record directory.
pub const DEFAULT_RECORDS_DIR: &str = "machine";

/// Default manifest artifact path.
pub const DEFAULT_MANIFEST_PATH: &str = "registry/manifests/batch_manifest.json";

/// Default detached signature path.
pub const DEFAULT_SIGNATURE_PATH: &str = "registry/manifests/batch_manifest.sig";

/// Default signing identity path.
pub const DEFAULT_KEY_PATH: &str = "private_key.hex";

/// canonseal - manifest integrity and signing for registry batches
///
/// Aggregates validated records into a canonical manifest, signs it with a
/// file-backed Ed25519 identity, and verifies manifests against detached
/// signatures.
#[derive(Parser, Debug)]
#[command(name = "canonseal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lock DRAFT records for review (DRAFT -> FROZEN)
    Freeze {
        /// Directory holding the record JSON files
        #[arg(long, default_value = DEFAULT_RECORDS_DIR)]
        records_dir: PathBuf,
    },

    /// Aggregate PASS records into a sealed batch manifest
    BuildManifest {
        /// Directory holding the record JSON files
        #[arg(long, default_value = DEFAULT_RECORDS_DIR)]
        records_dir: PathBuf,

        /// Where to write the manifest
        #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
        out: PathBuf,

        /// Batch identifier stamped into the manifest (random UUID when omitted)
        #[arg(long)]
        batch_id: Option<String>,
    },

    /// Sign manifest bytes with the file-backed identity (created on first use)
    Sign {
        /// Manifest file to sign
        #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
        manifest: PathBuf,

        /// Where to write the detached hex signature
        #[arg(long, default_value = DEFAULT_SIGNATURE_PATH)]
        signature: PathBuf,

        /// Signing identity seed file
        #[arg(long, default_value = DEFAULT_KEY_PATH)]
        key: PathBuf,
    },

    /// Verify a manifest against its detached signature
    Verify {
        /// Manifest file to check
        #[arg(long, default_value = DEFAULT_MANIFEST_PATH)]
        manifest: PathBuf,

        /// Detached signature file
        #[arg(long, default_value = DEFAULT_SIGNATURE_PATH)]
        signature: PathBuf,

        /// Signer public key (hex); falls back to CANONSEAL_PUBLIC_KEY
        #[arg(long)]
        public_key: Option<String>,
    },

    /// Print the identity's public key for out-of-band distribution
    PublicKey {
        /// Signing identity seed file
        #[arg(long, default_value = DEFAULT_KEY_PATH)]
        key: PathBuf,
    },
}
