#[cfg(feature = "notifications")]
use crate::domain::notification::DisplayError;
#[cfg(feature = "submission")]
use crate::domain::submission::{ExchangeFailure, SubmissionError};
use wasm_bindgen::JsValue;

/// Best-effort text of a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "Unknown JavaScript error".to_string())
}

#[cfg(feature = "notifications")]
impl From<JsValue> for DisplayError {
    fn from(err: JsValue) -> Self {
        DisplayError::node_creation(describe(&err))
    }
}

#[cfg(feature = "notifications")]
impl From<DisplayError> for JsValue {
    fn from(error: DisplayError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(feature = "submission")]
impl From<JsValue> for SubmissionError {
    fn from(err: JsValue) -> Self {
        SubmissionError::listener_failed(describe(&err))
    }
}

#[cfg(feature = "submission")]
impl From<SubmissionError> for JsValue {
    fn from(error: SubmissionError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Rejection value at the JS boundary: the body text, or `undefined` without one.
#[cfg(feature = "submission")]
impl From<ExchangeFailure> for JsValue {
    fn from(failure: ExchangeFailure) -> Self {
        match failure.body {
            Some(body) => JsValue::from_str(&body),
            None => JsValue::UNDEFINED,
        }
    }
}
