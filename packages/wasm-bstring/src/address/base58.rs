//! Plain Base58 encoding/decoding (the Bitcoin alphabet, no checksum).
//!
//! This is not Base58Check: no version byte is prepended and no hash-based checksum
//! is appended or verified. Callers that need Base58Check compose it on top.

use std::fmt;

/// The Bitcoin base58 alphabet. `0`, `O`, `I` and `l` are left out.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    InvalidCharacter { character: char, index: usize },
    Malformed(bs58::decode::Error),
}

impl fmt::Display for Base58Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base58Error::InvalidCharacter { character, index } => write!(
                f,
                "Invalid base58 character {:?} at position {}",
                character, index
            ),
            Base58Error::Malformed(err) => write!(f, "Invalid base58 string: {}", err),
        }
    }
}

impl std::error::Error for Base58Error {}

type Result<T> = std::result::Result<T, Base58Error>;

/// bs58 reports byte offsets; map one back to the character it starts.
fn invalid_character(text: &str, byte_index: usize) -> Base58Error {
    let index = text
        .get(..byte_index)
        .map_or(byte_index, |head| head.chars().count());
    let character = text
        .get(byte_index..)
        .and_then(|tail| tail.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Base58Error::InvalidCharacter { character, index }
}

/// Encode bytes as a base58 string.
///
/// Each leading zero byte becomes a leading `1`. The empty buffer encodes to the
/// empty string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a base58 string into bytes.
///
/// Each leading `1` becomes a leading zero byte. The empty string decodes to the
/// empty buffer.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text).into_vec().map_err(|err| match err {
        bs58::decode::Error::InvalidCharacter { index, .. }
        | bs58::decode::Error::NonAsciiCharacter { index } => invalid_character(text, index),
        other => Base58Error::Malformed(other),
    })
}

/// Check whether `text` decodes as base58.
pub fn test(text: &str) -> bool {
    decode(text).is_ok()
}

/// Cheap shape check: non-empty ASCII alphanumerics without `0`.
///
/// Hex strings pass this too; it only rules out strings that are obviously not base58.
pub fn looks_like_base58(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| matches!(b, b'1'..=b'9' | b'A'..=b'Z' | b'a'..=b'z'))
}
