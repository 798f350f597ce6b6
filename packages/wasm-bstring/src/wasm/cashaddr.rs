use crate::address::cashaddr::{self, CashAddrError};
use crate::try_into_js_value::TryIntoJsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsError, JsValue};

fn parse_address_type(value: i32) -> Result<u8, CashAddrError> {
    u8::try_from(value).map_err(|_| CashAddrError::InvalidType)
}

#[wasm_bindgen]
pub fn cashaddr_encode(prefix: &str, address_type: i32, hash: &[u8]) -> Result<String, JsError> {
    let address_type = parse_address_type(address_type)?;
    cashaddr::encode(prefix, address_type, hash).map_err(JsError::from)
}

/// Returns `{ prefix: string, type: number, hash: Uint8Array }`
#[wasm_bindgen]
pub fn cashaddr_decode(address: &str, default_prefix: &str) -> Result<JsValue, JsError> {
    cashaddr::decode(address, default_prefix)?.try_to_js_value()
}

#[wasm_bindgen]
pub fn cashaddr_test(address: &str, default_prefix: &str) -> bool {
    cashaddr::test(address, default_prefix)
}
