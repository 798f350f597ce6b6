//! Bech32 encoding/decoding for witness addresses.
//!
//! Uses the original BIP 173 checksum (constant `1`) for all witness versions:
//! - BIP 173: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
//!
//! Checksumming and HRP validation come from the `bech32` crate primitives.
//! There are two layers:
//! - [`serialize`] / [`deserialize`] handle any `hrp1<data><checksum>` string.
//! - [`encode`] / [`decode`] add the witness rules on top: the first data value is
//!   the witness version (0-16) and the rest regroups into a 2-40 byte program.

use super::bits::{self, ConvertError};
use bech32::primitives::decode::{
    CharError, CheckedHrpstring, CheckedHrpstringError, ChecksumError, UncheckedHrpstringError,
};
use bech32::primitives::hrp;
use bech32::{Bech32, ByteIterExt, Fe32, Fe32IterExt, Hrp};
use std::fmt;

/// Maximum length of a bech32 string, separator and checksum included
pub const MAX_LENGTH: usize = 90;

const MIN_LENGTH: usize = 8;
const CHECKSUM_LENGTH: usize = 6;
const SEPARATOR: char = '1';

/// A decoded witness address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Address {
    /// Human-readable part, lowercase
    pub hrp: String,
    /// Witness version (0-16)
    pub version: u8,
    /// Witness program (2-40 bytes)
    pub program: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    InvalidLength(usize),
    InvalidCase,
    InvalidCharacter(char),
    NoSeparator,
    InvalidPrefix,
    ChecksumMismatch,
    EmptyData,
    InvalidWitnessVersion,
    InvalidProgramLength(usize),
    InvalidPadding,
}

impl fmt::Display for Bech32Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bech32Error::InvalidLength(len) => write!(f, "Invalid bech32 string length: {}", len),
            Bech32Error::InvalidCase => write!(f, "Invalid bech32 casing"),
            Bech32Error::InvalidCharacter(c) => write!(f, "Invalid bech32 character: {:?}", c),
            Bech32Error::NoSeparator => write!(f, "Invalid bech32 separator position"),
            Bech32Error::InvalidPrefix => write!(f, "Invalid bech32 human-readable part"),
            Bech32Error::ChecksumMismatch => write!(f, "Invalid bech32 checksum"),
            Bech32Error::EmptyData => write!(f, "Empty bech32 data section"),
            Bech32Error::InvalidWitnessVersion => write!(f, "Invalid witness version"),
            Bech32Error::InvalidProgramLength(len) => {
                write!(f, "Invalid witness program length: {}", len)
            }
            Bech32Error::InvalidPadding => write!(f, "Invalid bech32 padding"),
        }
    }
}

impl std::error::Error for Bech32Error {}

impl From<ConvertError> for Bech32Error {
    fn from(_: ConvertError) -> Self {
        Bech32Error::InvalidPadding
    }
}

impl From<hrp::Error> for Bech32Error {
    fn from(err: hrp::Error) -> Self {
        match err {
            hrp::Error::Empty => Bech32Error::NoSeparator,
            hrp::Error::MixedCase => Bech32Error::InvalidCase,
            hrp::Error::NonAsciiChar(c) => Bech32Error::InvalidCharacter(c),
            hrp::Error::InvalidAsciiByte(b) => Bech32Error::InvalidCharacter(char::from(b)),
            _ => Bech32Error::InvalidPrefix,
        }
    }
}

impl From<CheckedHrpstringError> for Bech32Error {
    fn from(err: CheckedHrpstringError) -> Self {
        match err {
            CheckedHrpstringError::Parse(UncheckedHrpstringError::Char(err)) => match err {
                CharError::InvalidChar(c) => Bech32Error::InvalidCharacter(c),
                CharError::MixedCase => Bech32Error::InvalidCase,
                _ => Bech32Error::NoSeparator,
            },
            CheckedHrpstringError::Parse(UncheckedHrpstringError::Hrp(err)) => err.into(),
            CheckedHrpstringError::Checksum(ChecksumError::CodeLength(err)) => {
                Bech32Error::InvalidLength(err.encoded_length)
            }
            // fewer than six characters after the separator
            CheckedHrpstringError::Checksum(ChecksumError::InvalidLength) => {
                Bech32Error::NoSeparator
            }
            _ => Bech32Error::ChecksumMismatch,
        }
    }
}

type Result<T> = std::result::Result<T, Bech32Error>;

/// Build `hrp1<data><checksum>` from 5-bit data values.
///
/// The HRP must be non-empty printable ASCII without uppercase letters and the
/// result must not exceed [`MAX_LENGTH`] characters.
pub fn serialize(hrp: &str, data: &[Fe32]) -> Result<String> {
    if hrp.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(Bech32Error::InvalidPrefix);
    }
    let hrp = Hrp::parse(hrp).map_err(|_| Bech32Error::InvalidPrefix)?;

    let length = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if length > MAX_LENGTH {
        return Err(Bech32Error::InvalidLength(length));
    }

    Ok(data
        .iter()
        .copied()
        .with_checksum::<Bech32>(&hrp)
        .chars()
        .collect())
}

/// Split and verify a bech32 string.
///
/// Returns the lowercase HRP and the data values with the checksum stripped.
/// No witness rules are applied, so `A12UEL5L` is accepted with an empty data part.
///
/// The length is checked first, then characters and case, then the checksum; a
/// mixed-case string of the wrong length fails with [`Bech32Error::InvalidLength`].
pub fn deserialize(text: &str) -> Result<(String, Vec<Fe32>)> {
    if text.len() < MIN_LENGTH || text.len() > MAX_LENGTH {
        return Err(Bech32Error::InvalidLength(text.len()));
    }

    let checked = CheckedHrpstring::new::<Bech32>(text)?;

    let data = checked
        .data_part_ascii_no_checksum()
        .iter()
        .map(|&b| {
            let c = char::from(b);
            Fe32::from_char(c).map_err(|_| Bech32Error::InvalidCharacter(c))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((checked.hrp().to_lowercase(), data))
}

fn check_program_length(version: u8, length: usize) -> Result<()> {
    if !(2..=40).contains(&length) {
        return Err(Bech32Error::InvalidProgramLength(length));
    }
    if version == 0 && length != 20 && length != 32 {
        return Err(Bech32Error::InvalidProgramLength(length));
    }
    Ok(())
}

/// Encode a witness program as a bech32 address.
pub fn encode(hrp: &str, version: u8, program: &[u8]) -> Result<String> {
    if version > 16 {
        return Err(Bech32Error::InvalidWitnessVersion);
    }
    check_program_length(version, program.len())?;

    let mut data = Vec::with_capacity(1 + (program.len() * 8 + 4) / 5);
    data.push(bits::fe(version)?);
    data.extend(program.iter().copied().bytes_to_fes());

    serialize(hrp, &data)
}

/// Decode a bech32 witness address.
pub fn decode(address: &str) -> Result<Bech32Address> {
    let (hrp, data) = deserialize(address)?;

    let (version, program) = data.split_first().ok_or(Bech32Error::EmptyData)?;
    let version = version.to_u8();
    if version > 16 {
        return Err(Bech32Error::InvalidWitnessVersion);
    }

    let program = bits::fes_to_bytes(program)?;
    check_program_length(version, program.len())?;

    Ok(Bech32Address {
        hrp,
        version,
        program,
    })
}

/// Check whether `address` decodes as a witness address.
pub fn test(address: &str) -> bool {
    decode(address).is_ok()
}

/// Cheap shape check: single case, 8-90 characters, a 1-3 letter HRP and a
/// charset-only data part.
///
/// The checksum is not verified; use [`test`] for that.
pub fn looks_like_bech32(text: &str) -> bool {
    if text.len() < MIN_LENGTH || text.len() > MAX_LENGTH {
        return false;
    }
    if text.to_ascii_lowercase() != text && text.to_ascii_uppercase() != text {
        return false;
    }
    let Some((hrp, data)) = text.split_once(SEPARATOR) else {
        return false;
    };
    (1..=3).contains(&hrp.len())
        && hrp.bytes().all(|b| b.is_ascii_alphabetic())
        && !data.is_empty()
        && bits::parse_fes(&data.to_ascii_lowercase()).is_ok()
}
