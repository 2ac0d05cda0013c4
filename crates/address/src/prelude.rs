//! Re-exports the common types.

pub use crate::{address::*, error::*, nets::*, registry::*, resolver::*};

pub use coins_address_core::{
    enc::{EncodingError, Padding},
    ChecksumAlgorithm, Hash160Digest,
};

#[cfg(any(feature = "mainnet", feature = "testnet"))]
pub use crate::defaults::*;
