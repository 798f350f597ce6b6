use crate::address::base58;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsError;

#[wasm_bindgen]
pub fn base58_encode(data: &[u8]) -> String {
    base58::encode(data)
}

#[wasm_bindgen]
pub fn base58_decode(text: &str) -> Result<Vec<u8>, JsError> {
    base58::decode(text).map_err(JsError::from)
}

#[wasm_bindgen]
pub fn base58_test(text: &str) -> bool {
    base58::test(text)
}
