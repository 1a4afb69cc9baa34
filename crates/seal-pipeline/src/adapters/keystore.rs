//! # File-Backed Key Store
//!
//! One Ed25519 signing identity persisted as a hex seed in a single file.
//!
//! The first `load_or_create` generates the identity and writes the file;
//! every later call loads the same identity. The key file is therefore the
//! identity: deleting it and re-running creates a new signer whose old
//! signatures no longer verify.

use crate::domain::errors::PipelineError;
use crate::ports::outbound::{CustodyError, KeyCustody};
use seal_crypto::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading or creating the on-disk identity.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// Key file exists but its contents are not a hex-encoded 32-byte seed
    #[error("Malformed key material at {}: {reason}", path.display())]
    Format {
        /// The key file
        path: PathBuf,
        /// What was wrong with the material
        reason: String,
    },

    /// Underlying filesystem failure
    #[error("Key store I/O error at {}: {source}", path.display())]
    Io {
        /// The key file
        path: PathBuf,
        /// The originating error
        #[source]
        source: io::Error,
    },
}

impl From<KeyStoreError> for PipelineError {
    fn from(err: KeyStoreError) -> Self {
        match err {
            KeyStoreError::Format { path, reason } => PipelineError::KeyFormat { path, reason },
            KeyStoreError::Io { path, source } => PipelineError::Io { path, source },
        }
    }
}

/// File-backed Ed25519 signing identity.
pub struct FileKeyStore {
    path: PathBuf,
    keypair: Ed25519KeyPair,
}

impl FileKeyStore {
    /// Load the identity at `path`, creating it on first use.
    ///
    /// Creation uses `create_new`, so two concurrent first runs can never
    /// both write: the loser of the race discards its candidate keypair and
    /// loads the winner's seed. The seed is synced to disk before the
    /// keypair is ever available for signing.
    pub fn load_or_create(path: impl Into<PathBuf>) -> Result<Self, KeyStoreError> {
        let path = path.into();
        if path.exists() {
            return Self::load(path);
        }

        let keypair = Ed25519KeyPair::generate();
        let encoded = hex::encode(keypair.to_seed());

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(encoded.as_bytes())
                    .and_then(|_| file.sync_all())
                    .map_err(|source| KeyStoreError::Io {
                        path: path.clone(),
                        source,
                    })?;
                info!(path = %path.display(), "created signing identity");
                Ok(Self { path, keypair })
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                // Lost the creation race; the winner's identity is authoritative.
                debug!(path = %path.display(), "key file appeared concurrently, loading it");
                Self::load(path)
            }
            Err(source) => Err(KeyStoreError::Io { path, source }),
        }
    }

    fn load(path: PathBuf) -> Result<Self, KeyStoreError> {
        let contents = fs::read_to_string(&path).map_err(|source| KeyStoreError::Io {
            path: path.clone(),
            source,
        })?;
        let keypair =
            Ed25519KeyPair::from_seed_hex(&contents).map_err(|e| KeyStoreError::Format {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { path, keypair })
    }

    /// Hex encoding of the public half, for out-of-band distribution.
    pub fn public_key_hex(&self) -> String {
        self.keypair.public_key().to_hex()
    }

    /// Path of the backing key file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyCustody for FileKeyStore {
    fn sign(&self, message: &[u8]) -> Result<Ed25519Signature, CustodyError> {
        Ok(self.keypair.sign(message))
    }

    fn public_key(&self) -> Result<Ed25519PublicKey, CustodyError> {
        Ok(self.keypair.public_key())
    }
}
