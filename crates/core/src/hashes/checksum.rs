use digest::Digest;
use groestl::Groestl512;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;
use thiserror::Error;

use crate::hashes::hash160::{ripemd160_of, Hash160Digest};

/// The length of a Base58Check checksum in bytes.
pub const CHECKSUM_LENGTH: usize = 4;

/// A Base58Check checksum.
pub type Checksum = [u8; CHECKSUM_LENGTH];

/// Returned when a configuration names a checksum algorithm this crate does
/// not implement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unknown checksum algorithm {:?}. Expected one of \
     double_sha256, double_groestl512, double_blake256, sha3_256",
    .0
)]
pub struct UnknownChecksumAlgorithm(pub String);

/// The hash a network uses to compute Base58Check checksums. The set is
/// closed: a network table can only name one of these, so there is no way to
/// select an unimplemented algorithm at runtime.
///
/// ```
/// use coins_address_core::hashes::ChecksumAlgorithm;
///
/// let sha = ChecksumAlgorithm::DoubleSha256.checksum(&[20]);
/// let sha3 = ChecksumAlgorithm::Sha3_256.checksum(&[20]);
/// assert_ne!(sha, sha3);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumAlgorithm {
    /// `sha256(sha256(x))`. Bitcoin and most of its forks.
    #[default]
    DoubleSha256,
    /// `groestl512(groestl512(x))`. Groestlcoin.
    DoubleGroestl512,
    /// `blake256(blake256(x))`, the 14-round BLAKE-256. Decred-style chains.
    DoubleBlake256,
    /// A single pass of FIPS-202 `sha3_256(x)`.
    ///
    /// The configuration name `keccak256` is accepted as an alias and also
    /// selects FIPS-202 SHA3-256. The pre-standard Keccak-256 padding is not
    /// implemented.
    #[serde(rename = "sha3_256", alias = "keccak256")]
    Sha3_256,
}

fn double<D: Digest>(data: &[u8]) -> digest::Output<D> {
    D::digest(D::digest(data))
}

fn blake256(data: &[u8]) -> [u8; 32] {
    use blake_hash::Digest as _;

    let mut out = [0u8; 32];
    out.copy_from_slice(&blake_hash::Blake256::digest(data));
    out
}

impl ChecksumAlgorithm {
    /// All supported algorithms.
    pub const ALL: [ChecksumAlgorithm; 4] = [
        ChecksumAlgorithm::DoubleSha256,
        ChecksumAlgorithm::DoubleGroestl512,
        ChecksumAlgorithm::DoubleBlake256,
        ChecksumAlgorithm::Sha3_256,
    ];

    /// The configuration name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::DoubleSha256 => "double_sha256",
            ChecksumAlgorithm::DoubleGroestl512 => "double_groestl512",
            ChecksumAlgorithm::DoubleBlake256 => "double_blake256",
            ChecksumAlgorithm::Sha3_256 => "sha3_256",
        }
    }

    /// Compute the full digest the checksum is cut from.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            ChecksumAlgorithm::DoubleSha256 => double::<Sha256>(data).to_vec(),
            // The first round's full 64-byte output feeds the second round.
            ChecksumAlgorithm::DoubleGroestl512 => double::<Groestl512>(data).to_vec(),
            ChecksumAlgorithm::DoubleBlake256 => blake256(&blake256(data)).to_vec(),
            ChecksumAlgorithm::Sha3_256 => Sha3_256::digest(data).to_vec(),
        }
    }

    /// Compute the 4-byte Base58Check checksum of `data`.
    pub fn checksum(&self, data: &[u8]) -> Checksum {
        let mut checksum = Checksum::default();
        checksum.copy_from_slice(&self.digest(data)[..CHECKSUM_LENGTH]);
        checksum
    }

    /// Compute the hash160 commitment used alongside this checksum:
    /// `ripemd160(blake256(x))` for Blake-256 networks, `ripemd160(sha3_256(x))`
    /// for SHA3 networks, and Bitcoin's `ripemd160(sha256(x))` otherwise.
    pub fn hash160(&self, data: &[u8]) -> Hash160Digest {
        match self {
            ChecksumAlgorithm::DoubleBlake256 => ripemd160_of(&blake256(data)),
            ChecksumAlgorithm::Sha3_256 => ripemd160_of(&Sha3_256::digest(data)),
            ChecksumAlgorithm::DoubleSha256 | ChecksumAlgorithm::DoubleGroestl512 => {
                ripemd160_of(&Sha256::digest(data))
            }
        }
    }
}

impl std::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ChecksumAlgorithm {
    type Err = UnknownChecksumAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "double_sha256" => Ok(ChecksumAlgorithm::DoubleSha256),
            "double_groestl512" => Ok(ChecksumAlgorithm::DoubleGroestl512),
            "double_blake256" => Ok(ChecksumAlgorithm::DoubleBlake256),
            "sha3_256" | "keccak256" => Ok(ChecksumAlgorithm::Sha3_256),
            _ => Err(UnknownChecksumAlgorithm(s.to_owned())),
        }
    }
}
