//! `sign` - sign manifest bytes with the file-backed identity.
//!
//! The identity is created on first use; the signature covers the manifest
//! file's exact bytes and lands in its own file next to nothing else.

use crate::commands::CommandError;
use anyhow::Context;
use seal_pipeline::{service, FileKeyStore, PipelineError};
use std::fs;
use std::path::Path;

pub fn run(manifest: &Path, signature: &Path, key: &Path) -> Result<(), CommandError> {
    let keystore = FileKeyStore::load_or_create(key).map_err(PipelineError::from)?;

    let manifest_bytes = fs::read(manifest).map_err(|source| PipelineError::Io {
        path: manifest.to_path_buf(),
        source,
    })?;

    let detached = service::sign_manifest(&keystore, &manifest_bytes)?;

    if let Some(parent) = signature.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating signature directory {}", parent.display()))?;
    }
    fs::write(signature, detached.to_hex())
        .with_context(|| format!("writing signature {}", signature.display()))?;

    println!("signature written: {}", signature.display());
    println!("signer public key: {}", keystore.public_key_hex());
    Ok(())
}
