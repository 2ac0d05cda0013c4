//! Base58Check: `base58(version || payload || checksum)`, where the 4-byte
//! checksum is cut from the network's `ChecksumAlgorithm` digest of
//! `version || payload`.

use crate::{
    enc::{base58, EncodingError, EncodingResult},
    hashes::{ChecksumAlgorithm, CHECKSUM_LENGTH},
};

/// The smallest decodable frame: one version byte, an empty payload, and the
/// checksum.
pub const MIN_DECODED_LENGTH: usize = 1 + CHECKSUM_LENGTH;

/// Prepend `version` to `payload`, append the checksum, and base58 encode.
pub fn check_encode(payload: &[u8], version: &[u8], algorithm: ChecksumAlgorithm) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + CHECKSUM_LENGTH);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);
    let checksum = algorithm.checksum(&data);
    data.extend_from_slice(&checksum);
    base58::encode(&data)
}

/// Decode a Base58Check string, verify its checksum, and split off the first
/// `version_len` bytes as the version. Returns `(payload, version)`.
///
/// Fails with `InvalidFormat` when there are fewer than 5 decoded bytes (or
/// too few to hold `version_len` version bytes), and with `ChecksumMismatch`
/// when the checksum does not verify under `algorithm`.
pub fn check_decode(
    s: &str,
    version_len: usize,
    algorithm: ChecksumAlgorithm,
) -> EncodingResult<(Vec<u8>, Vec<u8>)> {
    let decoded = base58::decode(s)?;
    if decoded.len() < MIN_DECODED_LENGTH || decoded.len() < version_len + CHECKSUM_LENGTH {
        return Err(EncodingError::InvalidFormat(decoded.len()));
    }

    let (data, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LENGTH);
    let expected = algorithm.checksum(data);
    if expected[..] != checksum[..] {
        let mut got = [0u8; CHECKSUM_LENGTH];
        got.copy_from_slice(checksum);
        return Err(EncodingError::ChecksumMismatch { got, expected });
    }

    let (version, payload) = data.split_at(version_len);
    Ok((payload.to_vec(), version.to_vec()))
}
