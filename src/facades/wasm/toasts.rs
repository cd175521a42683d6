use super::converters::{as_function, options_from_js};
use crate::adapters::wasm::{DomDisplay, Spawner, Timer};
use crate::domain::notification::{NotificationCenter, ToastConfig};
use crate::platform::Platform;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Toast notifications for one page.
///
/// ```js
/// const toasts = new Toasts({ holdMs: 5000 });
/// toasts.show('success', 'Repository saved', () => console.log('gone'));
/// ```
#[wasm_bindgen]
pub struct Toasts {
    center: NotificationCenter,
}

#[wasm_bindgen]
impl Toasts {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Toasts, JsValue> {
        let config: ToastConfig = options_from_js(options)?;
        let platform = Platform::new();
        let display = DomDisplay::new(config.container_id.clone());

        Ok(Self {
            center: NotificationCenter::new(
                config,
                Rc::new(display),
                Rc::new(Timer::new()),
                Rc::new(Spawner::new()),
                platform.logger(),
            ),
        })
    }

    /// Shows `content` styled by `severity` (info, success, warning, error).
    ///
    /// `on_dismissed` is called without arguments once the toast is gone, if it
    /// is a function.
    pub fn show(&self, severity: &str, content: &str, on_dismissed: JsValue) {
        let Some(callback) = as_function(on_dismissed) else {
            self.center.show(severity, content);
            return;
        };

        let logger = Platform::new().logger();
        self.center.show_then(severity, content, move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                logger.error(&format!("Toast dismiss callback threw: {:?}", e));
            }
        });
    }

    /// Removes every toast immediately; dismiss callbacks are not called.
    pub fn clear(&self) {
        self.center.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.center.len()
    }

    #[wasm_bindgen(getter, js_name = holdMs)]
    pub fn hold_ms(&self) -> u32 {
        self.center.config().hold_ms
    }
}
