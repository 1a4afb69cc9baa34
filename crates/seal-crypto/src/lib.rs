//! # Seal Crypto - Pipeline Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `digest` | SHA-256 | Record content and aggregate digests |
//! | `signing` | Ed25519 | Detached manifest signatures |
//!
//! ## Security Properties
//!
//! - **SHA-256**: Fixed 32-byte output, identical digests on every platform
//! - **Ed25519**: Deterministic nonces, no RNG dependency at signing time
//! - Secret seeds are zeroized when a keypair is dropped
//! - Hex parsing enforces exact key and signature lengths before any curve work

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod digest;
pub mod errors;
pub mod signing;

// Re-exports
pub use digest::{sha256, sha256_concat, sha256_hex, Digest, Sha256Hasher, DIGEST_LENGTH};
pub use errors::CryptoError;
pub use signing::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
