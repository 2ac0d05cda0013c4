//! Plain base58 conversion, using the Bitcoin alphabet.
//!
//! Each leading zero byte maps to exactly one leading `1`, and back. Decoding
//! is strict: a character outside the alphabet (`0`, `O`, `I`, `l`, or any
//! non-ASCII character) is an error rather than being skipped.

use crate::enc::EncodingResult;

/// The Bitcoin base58 alphabet.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes as a base58 string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a base58 string into bytes.
pub fn decode(s: &str) -> EncodingResult<Vec<u8>> {
    Ok(bs58::decode(s).into_vec()?)
}
