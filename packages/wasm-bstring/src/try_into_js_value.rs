use crate::address::{Bech32Address, CashAddrAddress};
use wasm_bindgen::{JsError, JsValue};

pub(crate) trait TryIntoJsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsError>;
}

macro_rules! js_obj {
    ( $( $key:expr => $value:expr ),* ) => {{
        let obj = js_sys::Object::new();
        $(
            js_sys::Reflect::set(&obj, &$key.into(), &$value.try_to_js_value()?.into())
                .map_err(|_| JsError::new("Failed to set object property"))?;
        )*
        Ok(Into::<JsValue>::into(obj)) as Result<JsValue, JsError>
    }};
}

impl TryIntoJsValue for String {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self))
    }
}

impl TryIntoJsValue for u8 {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_f64(*self as f64))
    }
}

// bytes cross the boundary as a Uint8Array, not as an array of numbers
impl TryIntoJsValue for Vec<u8> {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(js_sys::Uint8Array::from(self.as_slice()).into())
    }
}

impl TryIntoJsValue for Bech32Address {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        js_obj!(
            "hrp" => self.hrp,
            "version" => self.version,
            "hash" => self.program
        )
    }
}

impl TryIntoJsValue for CashAddrAddress {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        js_obj!(
            "prefix" => self.prefix,
            "type" => self.address_type,
            "hash" => self.hash
        )
    }
}
