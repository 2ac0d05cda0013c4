use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// A 20-byte hash160 digest. This is the commitment inside pay-to-pubkey-hash
/// and pay-to-script-hash addresses, as well as inside version 0 witness
/// pubkey hash programs.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash160Digest([u8; 20]);

impl Hash160Digest {
    /// The length of the digest in bytes.
    pub const LENGTH: usize = 20;

    /// Copy a digest out of a slice. Returns `None` unless the slice is
    /// exactly 20 bytes long. Slices are never truncated or padded.
    pub fn from_slice(s: &[u8]) -> Option<Self> {
        let buf: [u8; 20] = s.try_into().ok()?;
        Some(Self(buf))
    }

    /// Return the digest as a byte array.
    pub fn to_array(self) -> [u8; 20] {
        self.0
    }
}

/// Compute `ripemd160(h(data))` where `h` is the outer hash. The outer hash
/// is passed as an already-computed digest so that each network can pick
/// its own.
pub fn ripemd160_of(outer: &[u8]) -> Hash160Digest {
    let mut digest = Hash160Digest::default();
    digest.as_mut().copy_from_slice(&Ripemd160::digest(outer));
    digest
}

/// Bitcoin's `ripemd160(sha256(data))`.
pub fn hash160(data: &[u8]) -> Hash160Digest {
    ripemd160_of(&Sha256::digest(data))
}

#[cfg_attr(tarpaulin, skip)]
impl core::fmt::Debug for Hash160Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Hash160Digest: {}", hex::encode(self.0))
    }
}

impl core::fmt::Display for Hash160Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Hash160Digest {
    fn from(buf: [u8; 20]) -> Self {
        Self(buf)
    }
}

impl AsRef<[u8]> for Hash160Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Hash160Digest {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}
