//! # Ed25519 Signatures
//!
//! Detached signatures over manifest bytes, with hex codecs for the on-disk
//! key and signature formats.
//!
//! ## Security Properties
//!
//! - Deterministic nonces (same seed and message always produce the same signature)
//! - Secret seeds are zeroized when a keypair is dropped
//! - Hex parsing rejects wrong-length material before any curve work

use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroize;

/// Public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Secret seed length in bytes.
pub const SEED_LENGTH: usize = 32;

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl Ed25519PublicKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Result<Self, CryptoError> {
        // Validate it's a valid point
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Parse from hex. Surrounding whitespace is ignored.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let decoded = hex::decode(hex_str.trim()).map_err(|_| CryptoError::InvalidPublicKey)?;
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            decoded
                .try_into()
                .map_err(|rejected: Vec<u8>| CryptoError::InvalidKeyLength {
                    expected: PUBLIC_KEY_LENGTH,
                    actual: rejected.len(),
                })?;
        Self::from_bytes(bytes)
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Verify a detached signature over `message`.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);

        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519Signature([u8; SIGNATURE_LENGTH]);

impl Ed25519Signature {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse from hex. Surrounding whitespace is ignored.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let decoded =
            hex::decode(hex_str.trim()).map_err(|_| CryptoError::InvalidSignatureFormat)?;
        let bytes: [u8; SIGNATURE_LENGTH] =
            decoded
                .try_into()
                .map_err(|rejected: Vec<u8>| CryptoError::InvalidSignatureLength {
                    expected: SIGNATURE_LENGTH,
                    actual: rejected.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }
}

/// Ed25519 keypair.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret seed (32 bytes).
    pub fn from_seed(seed: [u8; SEED_LENGTH]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        Self { signing_key }
    }

    /// Parse a hex-encoded seed. Surrounding whitespace is ignored.
    pub fn from_seed_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let decoded = hex::decode(hex_str.trim()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        let seed: [u8; SEED_LENGTH] =
            decoded
                .try_into()
                .map_err(|rejected: Vec<u8>| CryptoError::InvalidSeedLength {
                    expected: SEED_LENGTH,
                    actual: rejected.len(),
                })?;
        Ok(Self::from_seed(seed))
    }

    /// Get public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        let verifying_key = self.signing_key.verifying_key();
        Ed25519PublicKey(verifying_key.to_bytes())
    }

    /// Sign a message (deterministic - no RNG needed).
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let sig = self.signing_key.sign(message);
        Ed25519Signature(sig.to_bytes())
    }

    /// Get secret seed (for serialization).
    pub fn to_seed(&self) -> [u8; SEED_LENGTH] {
        self.signing_key.to_bytes()
    }
}

impl Drop for Ed25519KeyPair {
    fn drop(&mut self) {
        // Zeroize secret key material
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}
