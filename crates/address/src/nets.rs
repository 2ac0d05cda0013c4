//! The `nets` module contains network parameter definitions. A network is
//! plain data: the codecs take a `NetworkParams` on every call and never
//! read it from anywhere else.
//!
//! Parameters are usually loaded from configuration:
//!
//! ```
//! use coins_address::nets::NetworkParams;
//! use coins_address_core::ChecksumAlgorithm;
//!
//! let json = r#"{
//!     "id": "examplecoin",
//!     "pub_key_hash_version": [28],
//!     "script_hash_version": [29],
//!     "bech32_hrp": "ex",
//!     "checksum": "sha3_256"
//! }"#;
//! let net: NetworkParams = serde_json::from_str(json).unwrap();
//! assert_eq!(net.checksum, ChecksumAlgorithm::Sha3_256);
//! ```

use coins_address_core::{ChecksumAlgorithm, Hash160Digest};
use serde::{Deserialize, Serialize};

/// Identifies a network within a registry, e.g. `bitcoin-mainnet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    /// Instantiate a network id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NetworkId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NetworkId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NetworkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// NetworkParams holds the encoding parameters for a network: the
/// Base58Check version bytes for legacy PKH and SH addresses, the bech32
/// human-readable prefix for witness addresses, and the hash used for
/// Base58Check checksums.
///
/// Two networks are only the same network when every field matches. The
/// resolver never relates one network to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkParams {
    /// The network id.
    pub id: NetworkId,
    /// The legacy PKH version bytes. `[0x00]` for bitcoin mainnet.
    pub pub_key_hash_version: Vec<u8>,
    /// The legacy SH version bytes. `[0x05]` for bitcoin mainnet.
    pub script_hash_version: Vec<u8>,
    /// The bech32 HRP. `"bc"` for bitcoin mainnet.
    pub bech32_hrp: String,
    /// The Base58Check checksum algorithm.
    #[serde(default)]
    pub checksum: ChecksumAlgorithm,
}

impl NetworkParams {
    /// Instantiate network params with single-byte versions.
    pub fn new(
        id: impl Into<NetworkId>,
        pub_key_hash_version: u8,
        script_hash_version: u8,
        bech32_hrp: &str,
        checksum: ChecksumAlgorithm,
    ) -> Self {
        Self {
            id: id.into(),
            pub_key_hash_version: vec![pub_key_hash_version],
            script_hash_version: vec![script_hash_version],
            bech32_hrp: bech32_hrp.to_owned(),
            checksum,
        }
    }

    /// Hash `data` with this network's hash160.
    pub fn hash160(&self, data: &[u8]) -> Hash160Digest {
        self.checksum.hash160(data)
    }

    /// Bitcoin mainnet.
    pub fn bitcoin_mainnet() -> Self {
        Self::new("bitcoin-mainnet", 0x00, 0x05, "bc", ChecksumAlgorithm::DoubleSha256)
    }

    /// Bitcoin testnet3.
    pub fn bitcoin_testnet() -> Self {
        Self::new("bitcoin-testnet", 0x6f, 0xc4, "tb", ChecksumAlgorithm::DoubleSha256)
    }

    /// Bitcoin regtest.
    pub fn bitcoin_regtest() -> Self {
        Self::new("bitcoin-regtest", 0x6f, 0xc4, "bcrt", ChecksumAlgorithm::DoubleSha256)
    }

    /// Bitcoin signet. Shares its encoding with testnet3.
    pub fn bitcoin_signet() -> Self {
        Self::new("bitcoin-signet", 0x6f, 0xc4, "tb", ChecksumAlgorithm::DoubleSha256)
    }

    /// Litecoin mainnet.
    pub fn litecoin_mainnet() -> Self {
        Self::new("litecoin-mainnet", 0x30, 0x32, "ltc", ChecksumAlgorithm::DoubleSha256)
    }

    /// Litecoin testnet.
    pub fn litecoin_testnet() -> Self {
        Self::new("litecoin-testnet", 0x6f, 0x3a, "tltc", ChecksumAlgorithm::DoubleSha256)
    }

    /// Groestlcoin mainnet.
    pub fn groestlcoin_mainnet() -> Self {
        Self::new("groestlcoin-mainnet", 0x24, 0x05, "grs", ChecksumAlgorithm::DoubleGroestl512)
    }
}
