//! Address values: a variant carrying the committed bytes, and the network
//! it was decoded for.

use coins_address_core::{enc::segwit, Hash160Digest};

use crate::{
    error::{AddressError, AddressResult},
    nets::NetworkParams,
    resolver,
};

/// Length of a version 0 witness pubkey hash program.
pub const WPKH_LENGTH: usize = segwit::V0_PUBKEY_HASH_LENGTH;

/// Length of a version 0 witness script hash program.
pub const WSH_LENGTH: usize = segwit::V0_SCRIPT_HASH_LENGTH;

/// The available address kinds. Each owns its payload, and every payload has
/// its exact length in the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressVariant {
    /// Legacy Pay to Pubkeyhash
    PubKeyHash(Hash160Digest),
    /// Legacy Pay to Scripthash
    ScriptHash(Hash160Digest),
    /// Witness Pay to Pubkeyhash
    WitnessPubKeyHash {
        /// The witness version. Always 0 for decoded addresses.
        version: u8,
        /// The witness program.
        program: [u8; WPKH_LENGTH],
    },
    /// Witness Pay to Scripthash
    WitnessScriptHash {
        /// The witness version. Always 0 for decoded addresses.
        version: u8,
        /// The witness program.
        program: [u8; WSH_LENGTH],
    },
}

impl AddressVariant {
    /// The raw hash or program bytes.
    pub fn payload(&self) -> &[u8] {
        match self {
            AddressVariant::PubKeyHash(h) | AddressVariant::ScriptHash(h) => h.as_ref(),
            AddressVariant::WitnessPubKeyHash { program, .. } => program,
            AddressVariant::WitnessScriptHash { program, .. } => program,
        }
    }

    /// True for the bech32 variants.
    pub fn is_witness(&self) -> bool {
        matches!(
            self,
            AddressVariant::WitnessPubKeyHash { .. } | AddressVariant::WitnessScriptHash { .. }
        )
    }
}

/// An address variant paired with the network it belongs to. Encoding a
/// `DecodedAddress` reproduces the lowercase form of the string it was
/// decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    variant: AddressVariant,
    network: NetworkParams,
}

fn exact<const N: usize>(bytes: &[u8]) -> AddressResult<[u8; N]> {
    if bytes.len() != N {
        return Err(AddressError::InvalidHashLength {
            expected: N,
            got: bytes.len(),
        });
    }
    let mut buf = [0u8; N];
    buf.copy_from_slice(bytes);
    Ok(buf)
}

impl DecodedAddress {
    pub(crate) fn from_parts(variant: AddressVariant, network: NetworkParams) -> Self {
        Self { variant, network }
    }

    // Witness addresses are checked for encodability up front, so `encode`
    // only fails on values that bypassed the constructors.
    fn witness(variant: AddressVariant, network: &NetworkParams) -> AddressResult<Self> {
        let addr = Self::from_parts(variant, network.clone());
        resolver::encode_address(&addr)?;
        Ok(addr)
    }

    /// Instantiate a pay-to-pubkey-hash address from a 20-byte hash.
    pub fn new_pubkey_hash(hash: &[u8], network: &NetworkParams) -> AddressResult<Self> {
        let hash = exact::<{ Hash160Digest::LENGTH }>(hash)?;
        Ok(Self::from_parts(
            AddressVariant::PubKeyHash(hash.into()),
            network.clone(),
        ))
    }

    /// Instantiate a pay-to-script-hash address by hashing `script` with the
    /// network's hash160.
    pub fn new_script_hash(script: &[u8], network: &NetworkParams) -> AddressResult<Self> {
        Ok(Self::from_parts(
            AddressVariant::ScriptHash(network.hash160(script)),
            network.clone(),
        ))
    }

    /// Instantiate a pay-to-script-hash address from a 20-byte script hash.
    pub fn new_script_hash_from_hash(hash: &[u8], network: &NetworkParams) -> AddressResult<Self> {
        let hash = exact::<{ Hash160Digest::LENGTH }>(hash)?;
        Ok(Self::from_parts(
            AddressVariant::ScriptHash(hash.into()),
            network.clone(),
        ))
    }

    /// Instantiate a version 0 witness-pubkey-hash address from a 20-byte
    /// program.
    pub fn new_witness_pubkey_hash(
        program: &[u8],
        network: &NetworkParams,
    ) -> AddressResult<Self> {
        let program = exact::<WPKH_LENGTH>(program)?;
        Self::witness(
            AddressVariant::WitnessPubKeyHash {
                version: 0,
                program,
            },
            network,
        )
    }

    /// Instantiate a version 0 witness-script-hash address from a 32-byte
    /// program.
    pub fn new_witness_script_hash(
        program: &[u8],
        network: &NetworkParams,
    ) -> AddressResult<Self> {
        let program = exact::<WSH_LENGTH>(program)?;
        Self::witness(
            AddressVariant::WitnessScriptHash {
                version: 0,
                program,
            },
            network,
        )
    }

    /// The address variant.
    pub fn variant(&self) -> &AddressVariant {
        &self.variant
    }

    /// The network the address belongs to.
    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    /// The network's bech32 HRP.
    pub fn hrp(&self) -> &str {
        &self.network.bech32_hrp
    }

    /// The hash160 of a legacy address. `None` for witness addresses.
    pub fn hash160(&self) -> Option<&Hash160Digest> {
        match &self.variant {
            AddressVariant::PubKeyHash(h) | AddressVariant::ScriptHash(h) => Some(h),
            _ => None,
        }
    }

    /// The witness version of a witness address. `None` for legacy addresses.
    pub fn witness_version(&self) -> Option<u8> {
        match &self.variant {
            AddressVariant::WitnessPubKeyHash { version, .. }
            | AddressVariant::WitnessScriptHash { version, .. } => Some(*version),
            _ => None,
        }
    }

    /// The witness program of a witness address. `None` for legacy addresses.
    pub fn witness_program(&self) -> Option<&[u8]> {
        if self.variant.is_witness() {
            Some(self.variant.payload())
        } else {
            None
        }
    }

    /// The raw hash or program bytes the address commits to, regardless of
    /// variant.
    pub fn script_payload(&self) -> &[u8] {
        self.variant.payload()
    }

    /// True if the address was decoded for, or built with, `network`.
    pub fn is_for_network(&self, network: &NetworkParams) -> bool {
        &self.network == network
    }

    /// Encode the address as a string.
    pub fn encode(&self) -> AddressResult<String> {
        resolver::encode_address(self)
    }
}

impl std::fmt::Display for DecodedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Every public constructor and the decoder yield encodable addresses.
        let encoded = self.encode();
        debug_assert!(encoded.is_ok(), "unencodable address: {:?}", encoded);
        f.write_str(&encoded.map_err(|_| std::fmt::Error)?)
    }
}
