use crate::address::bech32::{self, Bech32Error};
use crate::try_into_js_value::TryIntoJsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsError, JsValue};

/// JS numbers arrive as i32; anything outside u8 is rejected instead of wrapped.
fn witness_version(version: i32) -> Result<u8, Bech32Error> {
    u8::try_from(version).map_err(|_| Bech32Error::InvalidWitnessVersion)
}

#[wasm_bindgen]
pub fn bech32_encode(hrp: &str, version: i32, program: &[u8]) -> Result<String, JsError> {
    let version = witness_version(version)?;
    bech32::encode(hrp, version, program).map_err(JsError::from)
}

/// Returns `{ hrp: string, version: number, hash: Uint8Array }`
#[wasm_bindgen]
pub fn bech32_decode(address: &str) -> Result<JsValue, JsError> {
    bech32::decode(address)?.try_to_js_value()
}

#[wasm_bindgen]
pub fn bech32_test(address: &str) -> bool {
    bech32::test(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witness_version_range() {
        assert_eq!(witness_version(0), Ok(0));
        assert_eq!(witness_version(16), Ok(16));
        // out of the witness range but still a u8: the codec rejects it
        assert_eq!(witness_version(17), Ok(17));
        assert_eq!(witness_version(256), Err(Bech32Error::InvalidWitnessVersion));
        assert_eq!(witness_version(-1), Err(Bech32Error::InvalidWitnessVersion));
    }
}
