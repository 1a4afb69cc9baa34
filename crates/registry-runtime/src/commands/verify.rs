//! `verify` - check a manifest against its detached signature.
//!
//! The public key arrives out-of-band (flag or environment), never from the
//! signer's keystore, so a verifier host needs no secret material at all.

use crate::commands::CommandError;
use seal_pipeline::service;
use std::env;
use std::path::Path;

/// Environment variable consulted when `--public-key` is not given.
pub const PUBLIC_KEY_ENV: &str = "CANONSEAL_PUBLIC_KEY";

pub fn run(
    manifest: &Path,
    signature: &Path,
    public_key: Option<String>,
) -> Result<(), CommandError> {
    // Empty input falls through to the verifier's MissingPublicKey check.
    let supplied = public_key
        .or_else(|| env::var(PUBLIC_KEY_ENV).ok())
        .unwrap_or_default();

    service::verify_manifest_files(&supplied, manifest, signature)?;

    println!("VERIFIED: manifest signature valid");
    Ok(())
}
