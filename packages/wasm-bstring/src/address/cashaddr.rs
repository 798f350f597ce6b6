//! Cashaddr encoding/decoding module for Bitcoin Cash and eCash.
//!
//! Implements the cashaddr checksum algorithm as defined in:
//! - Format: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//! - Reference implementation: https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/cashaddr.cpp
//!
//! # CashAddr vs Bech32 Differences
//!
//! Both use the same 32-character charset, but they are **not compatible**:
//!
//! | Feature | Bech32 | CashAddr |
//! |---------|--------|----------|
//! | **Separator** | `1` | `:` (optional) |
//! | **Example** | `bc1qw508...` | `bitcoincash:qpm2q...` |
//! | **Checksum Length** | 6 characters (30 bits) | 8 characters (40 bits) |
//! | **Prefix Expansion** | `[b>>5...] + [0] + [b&31...]` | `[b&31...] + [0]` |
//! | **Version Encoding** | First char = witness version | First byte = type + size |
//! | **Valid residue** | `1` | `0` after the final xor |
//!
//! # Version byte
//!
//! ```text
//! bit 7      reserved, must be 0
//! bits 3-6   type (0 = P2PKH, 1 = P2SH, ...)
//! bits 0-2   size class (0 = 20 bytes, 1 = 24 bytes, ... 7 = 64 bytes)
//! ```

use super::bits::{self, ConvertError};
use bech32::Fe32;
use std::fmt;

/// Maximum prefix length
pub const MAX_PREFIX_LENGTH: usize = 83;

/// Maximum length of a cashaddr string: a full-length prefix, the separator and
/// 112 data characters (a 64-byte hash plus checksum)
pub const MAX_LENGTH: usize = 196;

const MIN_LENGTH: usize = 8;
const CHECKSUM_LENGTH: usize = 8;
const SEPARATOR: char = ':';

/// Highest type that fits into the version byte
pub const MAX_TYPE: u8 = 15;

/// Hash byte-length for each 3-bit size class
const SIZE_CLASSES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

// CASHADDR-SPECIFIC: These generators are unique to CashAddr and incompatible with Bech32
const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// A decoded cashaddr address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashAddrAddress {
    /// Network prefix, lowercase (e.g., "bitcoincash", "ecash")
    pub prefix: String,
    /// Address type (0-15), 0 for P2PKH and 1 for P2SH
    pub address_type: u8,
    /// Hash payload, one of the sizes in the size-class table
    pub hash: Vec<u8>,
}

/// Cashaddr error kinds.
///
/// Every kind maps to a fixed message through [`CashAddrError::message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CashAddrError {
    InvalidLength,
    MixedCase,
    InvalidCharacter(char),
    InvalidSeparator,
    InvalidPrefix,
    ChecksumMismatch,
    InvalidPadding,
    NonZeroPadding,
    InvalidType,
    UnsupportedSize,
    InvalidVersionByte,
    LengthMismatch,
}

impl CashAddrError {
    pub fn message(&self) -> &'static str {
        match self {
            CashAddrError::InvalidLength => "Invalid cashaddr string length.",
            CashAddrError::MixedCase => "Invalid cashaddr casing.",
            CashAddrError::InvalidCharacter(_) => "Invalid cashaddr character.",
            CashAddrError::InvalidSeparator => "Invalid cashaddr separators.",
            CashAddrError::InvalidPrefix => "Invalid cashaddr prefix.",
            CashAddrError::ChecksumMismatch => "Invalid cashaddr checksum.",
            CashAddrError::InvalidPadding => "Invalid padding in data.",
            CashAddrError::NonZeroPadding => "Non zero padding.",
            CashAddrError::InvalidType => "Invalid cashaddr type.",
            CashAddrError::UnsupportedSize => "Non standard length.",
            CashAddrError::InvalidVersionByte => "Invalid cashaddr version byte.",
            CashAddrError::LengthMismatch => "Invalid cashaddr data length.",
        }
    }
}

impl fmt::Display for CashAddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashAddrError::InvalidCharacter(c) => write!(f, "{} ({:?})", self.message(), c),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for CashAddrError {}

impl From<ConvertError> for CashAddrError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::NonZeroPadding => CashAddrError::NonZeroPadding,
            ConvertError::ExcessPadding | ConvertError::InvalidValue(_) => {
                CashAddrError::InvalidPadding
            }
        }
    }
}

type Result<T> = std::result::Result<T, CashAddrError>;

fn size_class(hash_len: usize) -> Option<u8> {
    SIZE_CLASSES
        .iter()
        .position(|&size| size == hash_len)
        .map(|class| class as u8)
}

/// Expand the cashaddr prefix for checksum calculation.
///
/// ```text
/// prefix = "bitcoincash"
/// expanded = [b & 31 for b in prefix] + [0]
///          = [2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8] + [0]
/// ```
///
/// Only the **lower 5 bits** of each character are used, unlike Bech32's two-part
/// expansion.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(prefix.len() + 1);
    result.extend(prefix.bytes().map(|b| b & 0x1f));
    result.push(0);
    result
}

/// Compute the cashaddr polymod checksum.
///
/// 1. Initialize checksum state `c = 1`
/// 2. For each input value:
///    - Extract top 5 bits of state: `c0 = c >> 35`
///    - Shift state left 5 bits and XOR with input: `c = (c & 0x07ffffffff) << 5 ^ input`
///    - Apply generators based on bits in `c0`
/// 3. Final XOR with `1`
fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ffffffff) << 5) ^ (d as u64);

        for (i, generator) in GENERATORS.iter().enumerate() {
            if (c0 & (1 << i)) != 0 {
                c ^= generator;
            }
        }
    }

    c ^ 1
}

fn checksum_input(prefix: &str, data: &[Fe32]) -> Vec<u8> {
    let mut values = expand_prefix(prefix);
    values.reserve(data.len() + CHECKSUM_LENGTH);
    values.extend(data.iter().map(|fe| fe.to_u8()));
    values
}

/// A prefix is 1-83 lowercase ASCII letters.
fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() || prefix.len() > MAX_PREFIX_LENGTH {
        return Err(CashAddrError::InvalidPrefix);
    }
    if !prefix.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CashAddrError::InvalidPrefix);
    }
    Ok(())
}

/// Build `prefix:<data><checksum>` from 5-bit data values.
pub fn serialize(prefix: &str, data: &[Fe32]) -> Result<String> {
    validate_prefix(prefix)?;

    let length = prefix.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if length > MAX_LENGTH {
        return Err(CashAddrError::InvalidLength);
    }

    let mut values = checksum_input(prefix, data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let checksum = polymod(&values);

    let mut result = String::with_capacity(length);
    result.push_str(prefix);
    result.push(SEPARATOR);
    for fe in data {
        result.push(fe.to_char());
    }
    for i in 0..CHECKSUM_LENGTH {
        let value = ((checksum >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
        result.push(bits::fe(value)?.to_char());
    }

    Ok(result)
}

/// Split and verify a cashaddr string.
///
/// Without a `:` the whole string is the data part and `default_prefix` is used for
/// the checksum. Returns the lowercase prefix and the data values with the checksum
/// stripped.
///
/// The length is checked before separators, characters and case, so a short
/// mixed-case string fails with [`CashAddrError::InvalidLength`].
pub fn deserialize(text: &str, default_prefix: &str) -> Result<(String, Vec<Fe32>)> {
    if text.len() < MIN_LENGTH || text.len() > MAX_LENGTH {
        return Err(CashAddrError::InvalidLength);
    }

    if text.matches(SEPARATOR).count() > 1 {
        return Err(CashAddrError::InvalidSeparator);
    }

    let mut has_lower = false;
    let mut has_upper = false;
    for ch in text.chars() {
        if ch != SEPARATOR && !ch.is_ascii_alphanumeric() {
            return Err(CashAddrError::InvalidCharacter(ch));
        }
        has_lower |= ch.is_ascii_lowercase();
        has_upper |= ch.is_ascii_uppercase();
    }
    if has_lower && has_upper {
        return Err(CashAddrError::MixedCase);
    }

    let text = text.to_ascii_lowercase();

    let (prefix, payload) = match text.split_once(SEPARATOR) {
        Some((prefix, payload)) => (prefix.to_string(), payload),
        None => (default_prefix.to_ascii_lowercase(), text.as_str()),
    };
    validate_prefix(&prefix)?;

    let data = bits::parse_fes(payload).map_err(CashAddrError::InvalidCharacter)?;
    if data.len() <= CHECKSUM_LENGTH {
        return Err(CashAddrError::InvalidLength);
    }

    if polymod(&checksum_input(&prefix, &data)) != 0 {
        return Err(CashAddrError::ChecksumMismatch);
    }

    let payload = data[..data.len() - CHECKSUM_LENGTH].to_vec();
    Ok((prefix, payload))
}

/// Encode a hash to cashaddr format
pub fn encode(prefix: &str, address_type: u8, hash: &[u8]) -> Result<String> {
    if address_type > MAX_TYPE {
        return Err(CashAddrError::InvalidType);
    }

    let size = size_class(hash.len()).ok_or(CashAddrError::UnsupportedSize)?;

    let mut payload = Vec::with_capacity(hash.len() + 1);
    payload.push((address_type << 3) | size);
    payload.extend_from_slice(hash);

    serialize(prefix, &bits::bytes_to_fes(&payload)?)
}

/// Decode cashaddr to its prefix, type and hash
pub fn decode(text: &str, default_prefix: &str) -> Result<CashAddrAddress> {
    let (prefix, data) = deserialize(text, default_prefix)?;

    let payload = bits::fes_to_bytes(&data)?;

    let (&version_byte, hash) = payload.split_first().ok_or(CashAddrError::InvalidLength)?;

    if version_byte & 0x80 != 0 {
        return Err(CashAddrError::InvalidVersionByte);
    }

    let address_type = version_byte >> 3;
    let expected = SIZE_CLASSES[(version_byte & 0x07) as usize];
    if hash.len() != expected {
        return Err(CashAddrError::LengthMismatch);
    }

    Ok(CashAddrAddress {
        prefix,
        address_type,
        hash: hash.to_vec(),
    })
}

/// Check whether `text` decodes as a cashaddr address.
pub fn test(text: &str, default_prefix: &str) -> bool {
    decode(text, default_prefix).is_ok()
}
