//! Browser UI helpers: transient toast notifications and AJAX form submission.
//!
//! The crate follows a ports-and-adapters layout. `domain` holds the toast
//! lifecycle and the submission bridge, `ports` the traits they run against,
//! `adapters` the browser and native implementations, and `facades::wasm` the
//! JavaScript API.

#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod debug;

#[cfg(target_arch = "wasm32")]
pub mod facades;
#[cfg(target_arch = "wasm32")]
pub mod global;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(feature = "notifications")]
pub use domain::notification::{NotificationCenter, NotificationId, Severity, ToastConfig};
#[cfg(feature = "submission")]
pub use domain::submission::{
    Deferred, ExchangeFailure, FailureKind, ServerResponse, SubmissionBridge,
};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
