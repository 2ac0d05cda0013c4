//! # Coins Address Core
//!
//! `coins-address-core` contains the string codecs used by the
//! `coins-address` crate to turn addresses into bytes and back.
//!
//! ## Crate Layout
//!
//! ### Hashes
//!
//! The hashes module provides the checksum strategies used by Base58Check
//! (double-sha2, double-groestl512, double-blake256, and single-pass
//! sha3-256), and the matching `hash160` commitment for each. Networks select
//! a `ChecksumAlgorithm` value; nothing in this crate assumes Bitcoin's
//! double-sha2.
//!
//! ### Enc
//!
//! The enc module is layered:
//!
//! - `base58` converts bytes to and from the Bitcoin base58 alphabet.
//! - `base58check` adds a version prefix and a 4-byte checksum.
//! - `bech32` wraps the `bech32` crate with the BIP173 length and case rules.
//! - `segwit` packs a witness version and program into bech32 data, and
//!   enforces the BIP141 program length rules.
//!
//! All layers report failures through a single `EncodingError`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod enc;
pub mod hashes;

pub use enc::{EncodingError, EncodingResult};
pub use hashes::{ChecksumAlgorithm, Hash160Digest};
