use crate::ports::TimerPort;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

/// `setTimeout`-backed timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer;

impl Timer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl TimerPort for Timer {
    async fn sleep(&self, millis: u32) {
        if millis == 0 {
            return;
        }
        TimeoutFuture::new(millis).await;
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_sleep_waits_at_least_the_delay() {
        let start = js_sys::Date::now();
        Timer::new().sleep(30).await;
        assert!(js_sys::Date::now() - start >= 25.0);
    }
}
