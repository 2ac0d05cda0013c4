//! Segwit witness programs carried in bech32 strings.
//!
//! The first 5-bit group of the bech32 data is the witness version. The rest
//! regroups into the program bytes. Versions above 16 are invalid, programs
//! must be 2 to 40 bytes, and version 0 programs must be exactly 20 or 32
//! bytes (BIP141).

use crate::enc::{
    bech32::{self, u5},
    EncodingError, EncodingResult, Padding,
};

/// The highest valid witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// The shortest valid witness program in bytes.
pub const MIN_PROGRAM_LENGTH: usize = 2;

/// The longest valid witness program in bytes.
pub const MAX_PROGRAM_LENGTH: usize = 40;

/// Version 0 pubkey hash program length.
pub const V0_PUBKEY_HASH_LENGTH: usize = 20;

/// Version 0 script hash program length.
pub const V0_SCRIPT_HASH_LENGTH: usize = 32;

fn check_program(version: u8, len: usize) -> EncodingResult<()> {
    if version > MAX_WITNESS_VERSION {
        return Err(EncodingError::InvalidWitnessVersion(version));
    }
    if !(MIN_PROGRAM_LENGTH..=MAX_PROGRAM_LENGTH).contains(&len) {
        return Err(EncodingError::InvalidPadding(Padding::ProgramSize(len)));
    }
    if version == 0 && len != V0_PUBKEY_HASH_LENGTH && len != V0_SCRIPT_HASH_LENGTH {
        return Err(EncodingError::InvalidProgramLength { version, len });
    }
    Ok(())
}

// Reject padding before handing off to the bech32 crate, so the two padding
// failures stay distinguishable.
fn regroup(data: &[u5]) -> EncodingResult<Vec<u8>> {
    let leftover = data.len() * 5 % 8;
    if leftover > 4 {
        return Err(EncodingError::InvalidPadding(Padding::ExcessBits(leftover)));
    }
    if let Some(last) = data.last() {
        let mask = (1u8 << leftover) - 1;
        if last.to_u8() & mask != 0 {
            return Err(EncodingError::InvalidPadding(Padding::NonZeroBits));
        }
    }
    bech32::from_base32(data)
}

/// A witness version and program. Construction validates both, so a
/// `WitnessProgram` always encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WitnessProgram {
    version: u8,
    program: Vec<u8>,
}

impl WitnessProgram {
    /// Instantiate a witness program, checking the version and length rules.
    pub fn new(version: u8, program: &[u8]) -> EncodingResult<Self> {
        check_program(version, program.len())?;
        Ok(Self {
            version,
            program: program.to_vec(),
        })
    }

    /// The witness version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The program bytes.
    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Consume the witness program, returning the program bytes.
    pub fn into_program(self) -> Vec<u8> {
        self.program
    }

    /// Encode as a lowercase bech32 string under `hrp`.
    pub fn encode(&self, hrp: &str) -> EncodingResult<String> {
        let mut data = Vec::with_capacity(1 + (self.program.len() * 8 + 4) / 5);
        data.push(u5::try_from_u8(self.version)?);
        data.extend(bech32::to_base32(&self.program));
        bech32::encode(hrp, &data)
    }

    /// Decode a bech32 string into its HRP and witness program. The HRP is
    /// returned lowercased and is not checked here.
    pub fn decode(s: &str) -> EncodingResult<(String, Self)> {
        let (hrp, data) = bech32::decode(s)?;
        Ok((hrp, Self::from_data(&data)?))
    }

    /// Parse the 5-bit data part of an already checksummed bech32 string.
    pub fn from_data(data: &[u5]) -> EncodingResult<Self> {
        let (version, groups) = match data.split_first() {
            Some((version, groups)) => (version.to_u8(), groups),
            None => return Err(::bech32::Error::InvalidLength.into()),
        };
        if version > MAX_WITNESS_VERSION {
            return Err(EncodingError::InvalidWitnessVersion(version));
        }

        let program = regroup(groups)?;
        check_program(version, program.len())?;
        Ok(Self { version, program })
    }
}

/// Encode a witness version and program as a bech32 string under `hrp`.
pub fn encode(hrp: &str, version: u8, program: &[u8]) -> EncodingResult<String> {
    WitnessProgram::new(version, program)?.encode(hrp)
}

/// Decode a bech32 string into `(hrp, version, program)`.
pub fn decode(s: &str) -> EncodingResult<(String, u8, Vec<u8>)> {
    let (hrp, program) = WitnessProgram::decode(s)?;
    Ok((hrp, program.version, program.program))
}
