//! Classifies address strings against a network, and encodes address values.
//!
//! Decoding is a pure function of the input string and one `NetworkParams`:
//!
//! 1. Base58Check, with the network's checksum algorithm. A verified string
//!    is a PKH or SH address if its version matches and its payload is 20
//!    bytes, and `UnknownAddressType` otherwise.
//! 2. If Base58Check fails, bech32. A verified string must carry the
//!    network's HRP (`WrongNetwork` otherwise), and its data must be a
//!    version 0 witness program of 20 or 32 bytes.
//! 3. If neither layer parses the string, `InvalidAddress` carries both
//!    causes.

use coins_address_core::{
    enc::{base58check, bech32, segwit::WitnessProgram, EncodingError},
    Hash160Digest,
};
use tracing::{debug, trace};

use crate::{
    address::{AddressVariant, DecodedAddress, WPKH_LENGTH, WSH_LENGTH},
    error::{AddressError, AddressResult},
    nets::NetworkParams,
};

fn legacy_variant(
    version: Vec<u8>,
    payload: Vec<u8>,
    network: &NetworkParams,
) -> AddressResult<AddressVariant> {
    let hash = Hash160Digest::from_slice(&payload);

    if version == network.pub_key_hash_version {
        if let Some(hash) = hash {
            return Ok(AddressVariant::PubKeyHash(hash));
        }
    }

    // The SH version may differ in length from the PKH version the frame was
    // split on, so compare against the rejoined bytes.
    let mut full = version.clone();
    full.extend_from_slice(&payload);
    if let Some(rest) = full.strip_prefix(&network.script_hash_version[..]) {
        if let Some(hash) = Hash160Digest::from_slice(rest) {
            return Ok(AddressVariant::ScriptHash(hash));
        }
    }

    Err(AddressError::UnknownAddressType {
        version,
        len: payload.len(),
    })
}

fn witness_variant(program: WitnessProgram) -> AddressResult<AddressVariant> {
    let version = program.version();
    let len = program.program().len();
    if version != 0 {
        return Err(AddressError::UnsupportedWitnessProgram { version, len });
    }

    let bytes = program.program();
    match len {
        WPKH_LENGTH => {
            let mut buf = [0u8; WPKH_LENGTH];
            buf.copy_from_slice(bytes);
            Ok(AddressVariant::WitnessPubKeyHash {
                version,
                program: buf,
            })
        }
        WSH_LENGTH => {
            let mut buf = [0u8; WSH_LENGTH];
            buf.copy_from_slice(bytes);
            Ok(AddressVariant::WitnessScriptHash {
                version,
                program: buf,
            })
        }
        _ => Err(AddressError::UnsupportedWitnessProgram { version, len }),
    }
}

fn decode_witness(
    s: &str,
    network: &NetworkParams,
    base58: EncodingError,
) -> AddressResult<AddressVariant> {
    let (hrp, data) = match bech32::decode(s) {
        Ok(decoded) => decoded,
        Err(bech32) => {
            trace!(address = s, network = %network.id, "not bech32: {}", bech32);
            return Err(AddressError::InvalidAddress { base58, bech32 });
        }
    };

    // Decoding lowercases the HRP, and configured HRPs may be in either case.
    if !hrp.eq_ignore_ascii_case(&network.bech32_hrp) {
        debug!(
            address = s,
            network = %network.id,
            hrp = hrp.as_str(),
            "bech32 HRP belongs to another network"
        );
        return Err(AddressError::WrongNetwork {
            got: hrp,
            expected: network.bech32_hrp.clone(),
        });
    }

    witness_variant(WitnessProgram::from_data(&data)?)
}

/// Decode an address string for `network`.
///
/// ```
/// use coins_address::{decode_address, AddressError, NetworkParams};
///
/// let main = NetworkParams::bitcoin_mainnet();
/// let test = NetworkParams::bitcoin_testnet();
///
/// let s = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
/// let addr = decode_address(s, &main).unwrap();
/// assert_eq!(addr.witness_version(), Some(0));
///
/// match decode_address(s, &test) {
///     Err(AddressError::WrongNetwork { .. }) => {}
///     other => panic!("{:?}", other),
/// }
/// ```
pub fn decode_address(s: &str, network: &NetworkParams) -> AddressResult<DecodedAddress> {
    let version_len = network.pub_key_hash_version.len();
    let variant = match base58check::check_decode(s, version_len, network.checksum) {
        Ok((payload, version)) => legacy_variant(version, payload, network),
        Err(e) => {
            trace!(address = s, network = %network.id, "not base58check, trying bech32: {}", e);
            decode_witness(s, network, e)
        }
    }?;
    Ok(DecodedAddress::from_parts(variant, network.clone()))
}

/// Encode an address for its recorded network. Legacy variants use
/// Base58Check with the matching version, witness variants use bech32 with
/// the network's HRP.
pub fn encode_address(addr: &DecodedAddress) -> AddressResult<String> {
    let network = addr.network();
    let encoded = match addr.variant() {
        AddressVariant::PubKeyHash(hash) => base58check::check_encode(
            hash.as_ref(),
            &network.pub_key_hash_version,
            network.checksum,
        ),
        AddressVariant::ScriptHash(hash) => base58check::check_encode(
            hash.as_ref(),
            &network.script_hash_version,
            network.checksum,
        ),
        AddressVariant::WitnessPubKeyHash { version, program } => {
            WitnessProgram::new(*version, program)?.encode(&network.bech32_hrp)?
        }
        AddressVariant::WitnessScriptHash { version, program } => {
            WitnessProgram::new(*version, program)?.encode(&network.bech32_hrp)?
        }
    };
    Ok(encoded)
}
