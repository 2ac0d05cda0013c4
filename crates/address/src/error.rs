//! Errors returned while classifying or building addresses.

use coins_address_core::enc::EncodingError;
use thiserror::Error;

use crate::nets::NetworkId;

/// Errors that can be returned by the address resolver and registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Bubbled up from the string codecs.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The Base58Check string is well formed, but its version and payload
    /// length match no address kind of the network.
    #[error("UnknownAddressType: version {:02x?} with a {}-byte payload", version, len)]
    UnknownAddressType {
        /// The version bytes found.
        version: Vec<u8>,
        /// The payload length found.
        len: usize,
    },

    /// The bech32 HRP belongs to a different network.
    #[error("WrongNetwork: got HRP {:?}, expected {:?}", got, expected)]
    WrongNetwork {
        /// The HRP found in the string.
        got: String,
        /// The HRP of the network decoded against.
        expected: String,
    },

    /// The witness program is valid, but has no address kind. Only version 0
    /// programs of 20 or 32 bytes are addresses.
    #[error("UnsupportedWitnessProgram: version {} with a {}-byte program", version, len)]
    UnsupportedWitnessProgram {
        /// The witness version.
        version: u8,
        /// The program length.
        len: usize,
    },

    /// Neither Base58Check nor bech32 could parse the string.
    #[error("InvalidAddress: not base58check ({}), not bech32 ({})", base58, bech32)]
    InvalidAddress {
        /// Why the Base58Check layer rejected the string.
        base58: EncodingError,
        /// Why the bech32 layer rejected the string.
        bech32: EncodingError,
    },

    /// A hash or program of the wrong length was passed to a constructor.
    #[error("InvalidHashLength: expected {} bytes, got {}", expected, got)]
    InvalidHashLength {
        /// The length the address kind requires.
        expected: usize,
        /// The length passed in.
        got: usize,
    },

    /// A network with the same id is already registered.
    #[error("DuplicateNetwork: {}", .0)]
    DuplicateNetwork(NetworkId),

    /// The registry holds no networks to decode against.
    #[error("EmptyRegistry: no networks registered")]
    EmptyRegistry,
}

/// A simple result type alias
pub type AddressResult<T> = Result<T, AddressError>;
