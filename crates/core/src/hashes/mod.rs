//! Holds the hash functions address codecs depend on, and the per-network
//! selection between them.
//!
//! Networks disagree on which hash protects a Base58Check string. Rather than
//! overriding a checksum function per chain, a network carries a
//! `ChecksumAlgorithm` value and the codecs dispatch on it.

/// Checksum strategies for Base58Check
pub mod checksum;

/// Tooling for 20-byte hash160 commitments
pub mod hash160;

pub use checksum::*;
pub use hash160::*;
