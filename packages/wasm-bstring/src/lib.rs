pub mod address;
mod try_into_js_value;
pub mod wasm;

pub use address::{
    Base58Error, Bech32Address, Bech32Error, CashAddrAddress, CashAddrError, ConvertError, Fe32,
};
