//! Feature-selected default network, used by the `FromStr` and serde impls
//! on `DecodedAddress`. `testnet` wins when both features are enabled.

use crate::{
    address::DecodedAddress, error::AddressError, nets::NetworkParams, resolver,
};

#[cfg(all(feature = "mainnet", not(feature = "testnet")))]
/// Bitcoin mainnet
pub mod network {
    use crate::nets::NetworkParams;

    /// The default network, selected by feature flag
    pub fn params() -> NetworkParams {
        NetworkParams::bitcoin_mainnet()
    }
}

#[cfg(feature = "testnet")]
/// Bitcoin testnet3
pub mod network {
    use crate::nets::NetworkParams;

    /// The default network, selected by feature flag
    pub fn params() -> NetworkParams {
        NetworkParams::bitcoin_testnet()
    }
}

/// The default network, selected by feature flag
pub fn default_network() -> NetworkParams {
    network::params()
}

impl std::str::FromStr for DecodedAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolver::decode_address(s, &network::params())
    }
}

impl serde::Serialize for DecodedAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> serde::Deserialize<'de> for DecodedAddress {
    fn deserialize<D>(deserializer: D) -> Result<DecodedAddress, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: &str = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(|e: AddressError| serde::de::Error::custom(e.to_string()))
    }
}
