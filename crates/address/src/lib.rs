//! # Coins Address
//!
//! `coins-address` classifies address strings for bitcoin-like networks, and
//! encodes address values back to strings. It is built on the codecs in
//! `coins-address-core`.
//!
//! ## Crate Layout
//!
//! ### Nets
//!
//! `NetworkParams` describe a network: its id, Base58Check version bytes,
//! bech32 HRP, and checksum algorithm. They are plain data, and can be loaded
//! from any serde format. A few well-known networks are provided as
//! constructors.
//!
//! ### Registry
//!
//! `NetworkRegistry` is an explicit, insert-only table of `NetworkParams`.
//! There is no global registry. Callers that support several networks hold
//! one and pass it around.
//!
//! ### Address
//!
//! `AddressVariant` is one of pay-to-pubkey-hash, pay-to-script-hash,
//! witness-pubkey-hash, or witness-script-hash. `DecodedAddress` pairs a
//! variant with the network it belongs to, and re-encodes to the same string
//! it was decoded from.
//!
//! ### Resolver
//!
//! `decode_address` tries Base58Check first, then bech32, and classifies the
//! result against a single network. `encode_address` goes the other way.
//!
//! ```
//! use coins_address::prelude::*;
//!
//! let net = NetworkParams::bitcoin_mainnet();
//! let addr = decode_address("1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX", &net).unwrap();
//! assert!(matches!(addr.variant(), AddressVariant::PubKeyHash(_)));
//! assert_eq!(addr.encode().unwrap(), "1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX");
//! ```
//!
//! ## Features
//!
//! `mainnet` (default) and `testnet` select the network used by the `FromStr`
//! and serde impls on `DecodedAddress`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod address;
pub mod error;
pub mod nets;
pub mod registry;
pub mod resolver;

pub mod prelude;

#[cfg(any(feature = "mainnet", feature = "testnet"))]
pub mod defaults;

pub use address::{AddressVariant, DecodedAddress};
pub use error::{AddressError, AddressResult};
pub use nets::{NetworkId, NetworkParams};
pub use registry::NetworkRegistry;
pub use resolver::{decode_address, encode_address};
