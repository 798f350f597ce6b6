//! Regrouping between 8-bit bytes and 5-bit field elements.
//!
//! Bech32 and CashAddr both carry their payload as a sequence of 5-bit values drawn
//! from the same 32-character charset. The `Fe32` type from the bech32 crate is used
//! for the character <-> value mapping only; the bit packing lives here so that both
//! codecs apply the same strict padding rules.

use bech32::Fe32;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// A value did not fit into five bits
    InvalidValue(u8),
    /// Five or more bits were left over after regrouping
    ExcessPadding,
    /// The 1-4 leftover bits were not all zero
    NonZeroPadding,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidValue(v) => write!(f, "Invalid 5-bit value: {}", v),
            ConvertError::ExcessPadding => write!(f, "Excess padding bits"),
            ConvertError::NonZeroPadding => write!(f, "Non-zero padding bits"),
        }
    }
}

impl std::error::Error for ConvertError {}

pub(crate) fn fe(value: u8) -> Result<Fe32, ConvertError> {
    Fe32::try_from(value).map_err(|_| ConvertError::InvalidValue(value))
}

/// Convert 8-bit bytes to 5-bit field elements, zero-padding the final group.
///
/// # Example
/// Input: `[0xFF, 0x01]` (16 bits)
/// - First 5 bits: 11111 = 31
/// - Next 5 bits: 11100 = 28
/// - Next 5 bits: 00000 = 0
/// - Remaining 1 bit (1) padded: 10000 = 16
pub fn bytes_to_fes(data: &[u8]) -> Result<Vec<Fe32>, ConvertError> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity((data.len() * 8 + 4) / 5);

    for &byte in data {
        acc = ((acc << 8) | (byte as u32)) & 0xfff;
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            result.push(fe(((acc >> bits) & 0x1f) as u8)?);
        }
    }

    if bits > 0 {
        result.push(fe(((acc << (5 - bits)) & 0x1f) as u8)?);
    }

    Ok(result)
}

/// Convert 5-bit field elements back to bytes.
///
/// Padding is validated strictly: at most 4 bits may be left over and they must
/// all be zero. Anything else would let two strings decode to the same bytes.
///
/// # Example
/// Valid: `[31, 28, 0, 16]` with last bits = 0000 (zero padding)
/// Invalid: `[31, 28, 0, 17]` with last bits = 0001 (non-zero padding)
pub fn fes_to_bytes(fes: &[Fe32]) -> Result<Vec<u8>, ConvertError> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity(fes.len() * 5 / 8);

    for &fe in fes {
        acc = ((acc << 5) | (fe.to_u8() as u32)) & 0xfff;
        bits += 5;

        while bits >= 8 {
            bits -= 8;
            result.push(((acc >> bits) & 0xff) as u8);
        }
    }

    if bits >= 5 {
        return Err(ConvertError::ExcessPadding);
    }

    if bits > 0 && (acc & ((1 << bits) - 1)) != 0 {
        return Err(ConvertError::NonZeroPadding);
    }

    Ok(result)
}

/// Map an (already lowercased) data part onto field elements.
///
/// Returns the first character that is not part of the charset.
pub fn parse_fes(data: &str) -> Result<Vec<Fe32>, char> {
    data.chars()
        .map(|ch| Fe32::from_char(ch).map_err(|_| ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(fes: &[Fe32]) -> Vec<u8> {
        fes.iter().map(|fe| fe.to_u8()).collect()
    }

    fn fes(values: &[u8]) -> Vec<Fe32> {
        values.iter().map(|&v| fe(v).unwrap()).collect()
    }

    #[test]
    fn test_bytes_to_fes_pads_final_group() {
        let result = bytes_to_fes(&[0xff, 0x01]).unwrap();
        assert_eq!(values(&result), vec![31, 28, 0, 16]);
    }

    #[test]
    fn test_bytes_to_fes_empty() {
        assert!(bytes_to_fes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_fes_to_bytes_roundtrip() {
        let data = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let converted = bytes_to_fes(&data).unwrap();
        assert_eq!(converted.len(), 32);
        assert_eq!(fes_to_bytes(&converted).unwrap(), data);
    }

    #[test]
    fn test_fes_to_bytes_rejects_non_zero_padding() {
        assert_eq!(fes_to_bytes(&fes(&[31, 28, 0, 16])).unwrap(), vec![0xff, 0x01]);
        assert_eq!(
            fes_to_bytes(&fes(&[31, 28, 0, 17])),
            Err(ConvertError::NonZeroPadding)
        );
    }

    #[test]
    fn test_fes_to_bytes_rejects_excess_padding() {
        // 3 values = 15 bits: one byte plus 7 leftover bits
        assert_eq!(
            fes_to_bytes(&fes(&[0, 0, 0])),
            Err(ConvertError::ExcessPadding)
        );
        // a single value can never form a byte
        assert_eq!(fes_to_bytes(&fes(&[0])), Err(ConvertError::ExcessPadding));
    }

    #[test]
    fn test_parse_fes() {
        assert_eq!(values(&parse_fes("qpzry9x8").unwrap()), vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(parse_fes("qpb"), Err('b'));
        assert_eq!(parse_fes("1"), Err('1'));
    }
}
