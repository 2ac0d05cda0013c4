//! An explicit table of known networks.
//!
//! The registry is insert-only. It is built once, usually from
//! configuration, and then read. Callers that register networks while other
//! threads read must synchronize externally.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    address::DecodedAddress,
    error::{AddressError, AddressResult},
    nets::NetworkParams,
    resolver,
};

/// An ordered, insert-only set of `NetworkParams`, keyed by `NetworkId`.
///
/// ```
/// use coins_address::{NetworkParams, NetworkRegistry};
///
/// let registry = NetworkRegistry::with_defaults();
/// let addr = registry.decode_address("ltc1qt6nzjwaqp3nknu5h6xmh58679cjsyqj4gzf8w2").unwrap();
/// assert!(addr.is_for_network(&NetworkParams::litecoin_mainnet()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NetworkParams>", into = "Vec<NetworkParams>")]
pub struct NetworkRegistry {
    networks: Vec<NetworkParams>,
}

impl NetworkRegistry {
    /// Instantiate an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate a registry holding the built-in networks, bitcoin networks
    /// first.
    pub fn with_defaults() -> Self {
        Self {
            networks: vec![
                NetworkParams::bitcoin_mainnet(),
                NetworkParams::bitcoin_testnet(),
                NetworkParams::bitcoin_regtest(),
                NetworkParams::bitcoin_signet(),
                NetworkParams::litecoin_mainnet(),
                NetworkParams::litecoin_testnet(),
                NetworkParams::groestlcoin_mainnet(),
            ],
        }
    }

    /// Add a network. Fails if a network with the same id is registered.
    pub fn register(&mut self, params: NetworkParams) -> AddressResult<()> {
        if self.get(params.id.as_str()).is_some() {
            return Err(AddressError::DuplicateNetwork(params.id));
        }
        debug!(
            network = %params.id,
            hrp = params.bech32_hrp.as_str(),
            checksum = %params.checksum,
            "registered network"
        );
        self.networks.push(params);
        Ok(())
    }

    /// Look up a network by id.
    pub fn get(&self, id: &str) -> Option<&NetworkParams> {
        self.networks.iter().find(|n| n.id.as_str() == id)
    }

    /// Iterate over the networks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkParams> {
        self.networks.iter()
    }

    /// The number of registered networks.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// True if no networks are registered.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Decode `s` against each network in registration order, returning the
    /// first success. If every network rejects the string, the error from
    /// the first network is returned.
    pub fn decode_address(&self, s: &str) -> AddressResult<DecodedAddress> {
        let mut first_err = None;
        for network in self.networks.iter() {
            match resolver::decode_address(s, network) {
                Ok(addr) => return Ok(addr),
                Err(e) => {
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                }
            }
        }
        Err(first_err.unwrap_or(AddressError::EmptyRegistry))
    }
}

impl TryFrom<Vec<NetworkParams>> for NetworkRegistry {
    type Error = AddressError;

    fn try_from(networks: Vec<NetworkParams>) -> AddressResult<Self> {
        let mut registry = Self::new();
        for network in networks.into_iter() {
            registry.register(network)?;
        }
        Ok(registry)
    }
}

impl From<NetworkRegistry> for Vec<NetworkParams> {
    fn from(registry: NetworkRegistry) -> Self {
        registry.networks
    }
}

impl<'a> IntoIterator for &'a NetworkRegistry {
    type Item = &'a NetworkParams;
    type IntoIter = std::slice::Iter<'a, NetworkParams>;

    fn into_iter(self) -> Self::IntoIter {
        self.networks.iter()
    }
}
