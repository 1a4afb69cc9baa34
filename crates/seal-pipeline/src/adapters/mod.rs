//! # Adapters Layer
//!
//! File-backed implementations of the outbound ports.

pub mod keystore;
pub mod records;
