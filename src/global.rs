use wasm_bindgen::prelude::*;
use web_sys::{DedicatedWorkerGlobalScope, Document, Window};

pub fn get_global_scope() -> Result<JsValue, JsValue> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window()
        .ok_or_else(|| JsValue::from_str("Neither DedicatedWorkerGlobalScope nor Window found"))?;
    Ok(JsValue::from(window))
}

/// The page window. Fails inside workers, where there is no page to draw on.
pub fn window() -> Result<Window, JsValue> {
    get_global_scope()?
        .dyn_into::<Window>()
        .map_err(|_| JsValue::from_str("No window in this global scope"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("Window has no document"))
}
