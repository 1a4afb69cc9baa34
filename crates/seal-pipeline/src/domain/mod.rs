//! # Domain Layer
//!
//! Pure aggregation and verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod aggregator;
pub mod entities;
pub mod errors;
pub mod verifier;
