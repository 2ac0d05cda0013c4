//! Contains simplified access to the `bech32` encoder/decoder, with the BIP173
//! string rules enforced on top: at most 90 characters, no mixed case, and
//! only the BIP173 checksum constant.
//!
//! Decoding returns the lowercased HRP and the raw 5-bit data, without the
//! checksum. Encoding always emits lowercase.

use ::bech32::{FromBase32, ToBase32, Variant};

use crate::enc::{EncodingError, EncodingResult};

pub use ::bech32::u5;

/// The separator between the HRP and the data part.
pub const SEPARATOR: char = '1';

/// Maximum length of a bech32 string, HRP and separator included.
pub const MAX_LENGTH: usize = 90;

/// Maximum length of the HRP.
pub const MAX_HRP_LENGTH: usize = 83;

/// Length of the checksum suffix in 5-bit characters.
pub const CHECKSUM_LENGTH: usize = 6;

/// Encode an HRP and 5-bit data as a lowercase bech32 string.
pub fn encode(hrp: &str, data: &[u5]) -> EncodingResult<String> {
    let encoded = ::bech32::encode(hrp, data, Variant::Bech32)?;
    if encoded.len() > MAX_LENGTH {
        return Err(EncodingError::TooLong(encoded.len()));
    }
    Ok(encoded)
}

/// Decode a bech32 string into its lowercased HRP and 5-bit data. The checksum
/// is verified and stripped.
pub fn decode(s: &str) -> EncodingResult<(String, Vec<u5>)> {
    if s.len() > MAX_LENGTH {
        return Err(EncodingError::TooLong(s.len()));
    }

    let (hrp, data, variant) = ::bech32::decode(s)?;
    if variant != Variant::Bech32 {
        return Err(EncodingError::InvalidChecksum);
    }
    Ok((hrp, data))
}

/// Regroup bytes into 5-bit groups, padding the final group with zeros.
pub fn to_base32(data: &[u8]) -> Vec<u5> {
    data.to_base32()
}

/// Regroup 5-bit groups into bytes. Leftover bits must number at most 4 and
/// must all be zero.
pub fn from_base32(data: &[u5]) -> EncodingResult<Vec<u8>> {
    Ok(Vec::<u8>::from_base32(data)?)
}
