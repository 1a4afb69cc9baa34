//! # SHA-256 Digests
//!
//! Content digests for registry records and manifest aggregation.
//!
//! Every digest in the pipeline is SHA-256 over raw bytes. The digest of a
//! zero-byte input is well defined, so empty records and empty batches still
//! hash deterministically.

use sha2::{Digest as _, Sha256};

/// Digest length in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// SHA-256 digest output (256-bit).
pub type Digest = [u8; DIGEST_LENGTH];

/// Stateful SHA-256 hasher.
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return digest.
    pub fn finalize(&self) -> Digest {
        self.inner.clone().finalize().into()
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Digest {
    Sha256::digest(data).into()
}

/// Hash multiple inputs as one concatenated stream.
pub fn sha256_concat(inputs: &[&[u8]]) -> Digest {
    let mut hasher = Sha256Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// Hash data and return lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
