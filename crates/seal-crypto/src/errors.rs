//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Public key is not a valid curve point or not valid hex
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Public key decoded to the wrong number of bytes
    #[error("Invalid public key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Signature is not valid hex
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Signature decoded to the wrong number of bytes
    #[error("Invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// Private key seed is not valid hex
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Private key seed decoded to the wrong number of bytes
    #[error("Invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength {
        /// Expected seed length in bytes
        expected: usize,
        /// Actual seed length in bytes
        actual: usize,
    },

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}
