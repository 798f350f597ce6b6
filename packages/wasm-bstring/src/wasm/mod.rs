mod base58;
mod bech32;
mod cashaddr;

pub use self::base58::{base58_decode, base58_encode, base58_test};
pub use self::bech32::{bech32_decode, bech32_encode, bech32_test};
pub use self::cashaddr::{cashaddr_decode, cashaddr_encode, cashaddr_test};
