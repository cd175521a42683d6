use super::converters::{as_function, resolve_form, response_to_js};
use crate::adapters::wasm::{FetchExchange, Spawner};
use crate::domain::submission::{Guard, SubmissionBridge};
use crate::platform::Platform;
use futures_util::StreamExt;
use js_sys::{Function, Promise};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

fn bridge(platform: Platform) -> SubmissionBridge {
    SubmissionBridge::new(
        Rc::new(FetchExchange::new(platform.clock())),
        Rc::new(Spawner::new()),
        platform.logger(),
    )
}

/// Wraps a JS guard: only a literal `true` lets the submission through.
fn guard_from_js(guard: JsValue, platform: Platform) -> Option<Guard> {
    let guard = as_function(guard)?;
    let logger = platform.logger();
    Some(Box::new(move || match guard.call0(&JsValue::NULL) {
        Ok(result) => result.as_bool() == Some(true),
        Err(e) => {
            logger.error(&format!("Form guard threw, submission skipped: {:?}", e));
            false
        }
    }))
}

/// Submits `form` (element or selector) through `fetch` instead of navigating.
///
/// A selector binds every matching form; all of them feed the same promise.
/// The promise resolves with the first successful response and rejects with the
/// response text of the first failed one, or with `undefined` when there was no
/// text. It stays pending while `guard` keeps vetoing.
#[wasm_bindgen(js_name = onFormSubmit)]
pub fn on_form_submit(form: JsValue, guard: JsValue) -> Result<Promise, JsValue> {
    let platform = Platform::new();
    let form = resolve_form(form)?;
    let deferred = bridge(platform).bind(&form, guard_from_js(guard, platform))?;

    Ok(future_to_promise(async move {
        deferred
            .await
            .map(|response| response_to_js(&response))
            .map_err(JsValue::from)
    }))
}

/// Like `onFormSubmit`, but reports every submission of the form.
#[wasm_bindgen(js_name = watchFormSubmit)]
pub fn watch_form_submit(
    form: JsValue,
    guard: JsValue,
    on_success: Function,
    on_failure: Function,
) -> Result<(), JsValue> {
    let platform = Platform::new();
    let form = resolve_form(form)?;
    let mut outcomes = bridge(platform).bind_all(&form, guard_from_js(guard, platform))?;
    let logger = platform.logger();

    spawn_local(async move {
        while let Some(outcome) = outcomes.next().await {
            let delivered = match outcome {
                Ok(response) => on_success.call1(&JsValue::NULL, &response_to_js(&response)),
                Err(failure) => on_failure.call1(&JsValue::NULL, &JsValue::from(failure)),
            };
            if let Err(e) = delivered {
                logger.error(&format!("Form submission callback threw: {:?}", e));
            }
        }
    });
    Ok(())
}
