use js_sys::Function;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Deserializes an optional options object; `undefined` and `null` give the default.
pub fn options_from_js<T>(value: JsValue) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(to_js_error)
}

/// Keeps the value only if it is callable, mirroring a `typeof x === 'function'` check.
pub fn as_function(value: JsValue) -> Option<Function> {
    value.dyn_into::<Function>().ok()
}

#[cfg(feature = "submission")]
pub use submission::{resolve_form, response_to_js};

#[cfg(feature = "submission")]
mod submission {
    use super::to_js_error;
    use crate::adapters::wasm::HtmlForm;
    use crate::domain::submission::ServerResponse;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlFormElement;

    /// Resolution value at the JS boundary: parsed JSON for JSON responses, text otherwise.
    pub fn response_to_js(response: &ServerResponse) -> JsValue {
        if response.is_json() {
            if let Ok(parsed) = js_sys::JSON::parse(&response.body) {
                return parsed;
            }
        }
        JsValue::from_str(&response.body)
    }

    /// Accepts a form element or a CSS selector string.
    pub fn resolve_form(target: JsValue) -> Result<HtmlForm, JsValue> {
        if let Some(selector) = target.as_string() {
            return HtmlForm::query(&selector).map_err(to_js_error);
        }
        target
            .dyn_into::<HtmlFormElement>()
            .map(HtmlForm::new)
            .map_err(|_| JsValue::from_str("Expected a form element or a selector"))
    }
}
