//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture. Only outbound (driven)
//! ports exist here: the capabilities the pipeline needs from its
//! environment. The inbound surface is the service layer's stage functions.

pub mod outbound;
