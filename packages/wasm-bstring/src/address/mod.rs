//! Binary-to-text encodings used for cryptocurrency addresses.
//!
//! # Supported Formats
//!
//! - **Base58**: plain big-integer base conversion with leading-zero preservation
//!   (no Base58Check checksum or version byte)
//! - **Bech32**: BIP 173 witness addresses (`hrp1...`)
//! - **Cashaddr**: Bitcoin Cash and eCash addresses (`prefix:...`)
//!
//! All functions are pure, whole-buffer transforms. Decoders validate eagerly and
//! return the first violated rule; nothing is returned on failure.
//!
//! # Examples
//!
//! ```rust
//! use wasm_bstring::address::{base58, bech32, cashaddr};
//!
//! assert_eq!(base58::encode(&[0, 0x61]), "12g");
//!
//! let address = bech32::decode("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4").unwrap();
//! assert_eq!(address.version, 0);
//!
//! let address =
//!     cashaddr::decode("qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a", "bitcoincash").unwrap();
//! assert_eq!(address.prefix, "bitcoincash");
//! ```

pub mod base58;
pub mod bech32;
pub mod bits;
pub mod cashaddr;

pub use self::base58::Base58Error;
pub use self::bech32::{Bech32Address, Bech32Error};
pub use self::bits::ConvertError;
pub use self::cashaddr::{CashAddrAddress, CashAddrError};

/// 5-bit field element used for bech32 and cashaddr data parts
pub use ::bech32::Fe32;
