//! Contains the layered address string codecs, and the errors they share.
//!
//! Lower layers know nothing about address kinds or networks. `base58check`
//! and `segwit` return raw version and payload bytes; classifying them is the
//! job of the `coins-address` resolver.

pub mod base58;
pub mod base58check;
pub mod bech32;
pub mod segwit;

use thiserror::Error;

/// Why a 5-bit to 8-bit regrouping was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Padding {
    /// More than 4 bits were left over. The sender padded with a whole
    /// extra 5-bit group.
    #[error("{0} leftover bits, at most 4 are allowed")]
    ExcessBits(usize),

    /// The leftover bits were not all zero.
    #[error("non-zero padding bits")]
    NonZeroBits,

    /// The regrouped program is outside the 2 to 40 byte range.
    #[error("program of {0} bytes, expected 2 to 40")]
    ProgramSize(usize),
}

/// Errors that can be returned by the address codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Bubbled up error from bs58. Contains the offending character and its
    /// position when the input is outside the base58 alphabet.
    #[error("Base58Error: {}", .0)]
    Base58(#[from] bs58::decode::Error),

    /// Decoded Base58Check data is too short to hold a version and checksum.
    #[error("InvalidFormat: {} bytes decoded. Version and/or checksum bytes missing", .0)]
    InvalidFormat(usize),

    /// Base58Check checksum does not verify.
    #[error("ChecksumMismatch: got {:02x?} expected {:02x?}", got, expected)]
    ChecksumMismatch {
        /// The checksum carried by the string.
        got: [u8; 4],
        /// The checksum recomputed over the version and payload.
        expected: [u8; 4],
    },

    /// Bech32 string mixes upper and lower case characters.
    #[error("MixedCase: bech32 strings must be all lowercase or all uppercase")]
    MixedCase,

    /// Bech32 checksum does not verify.
    #[error("InvalidChecksum: bech32 checksum does not verify")]
    InvalidChecksum,

    /// Bech32 string exceeds the maximum length.
    #[error("TooLong: {} characters, at most {} are allowed", .0, crate::enc::bech32::MAX_LENGTH)]
    TooLong(usize),

    /// Any other error from the bech32 library, e.g. a missing separator or a
    /// character outside the bech32 charset.
    #[error("BechError: {}", .0)]
    Bech32(::bech32::Error),

    /// Witness version is above 16.
    #[error("InvalidWitnessVersion: {}", .0)]
    InvalidWitnessVersion(u8),

    /// Witness program bits could not be regrouped into bytes.
    #[error("InvalidPadding: {}", .0)]
    InvalidPadding(Padding),

    /// Witness program length is not allowed for its witness version.
    #[error("InvalidProgramLength: {} bytes at witness version {}", len, version)]
    InvalidProgramLength {
        /// The witness version.
        version: u8,
        /// The program length in bytes.
        len: usize,
    },
}

impl From<::bech32::Error> for EncodingError {
    fn from(e: ::bech32::Error) -> Self {
        match e {
            ::bech32::Error::MixedCase => EncodingError::MixedCase,
            ::bech32::Error::InvalidChecksum => EncodingError::InvalidChecksum,
            other => EncodingError::Bech32(other),
        }
    }
}

/// A simple result type alias
pub type EncodingResult<T> = Result<T, EncodingError>;
