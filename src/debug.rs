use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

#[inline]
pub fn is_enabled() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Logs through the given logger only while debug mode is on.
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)*) => {{
        if $crate::debug::is_enabled() {
            $logger.log(&format!($($arg)*));
        }
    }};
}

/// Wraps an expression in a console timer while debug mode is on.
#[macro_export]
macro_rules! time_it {
    ($logger:expr, $label:expr, $block:expr) => {{
        let debug = $crate::debug::is_enabled();
        if debug {
            $logger.time($label);
        }
        let result = $block;
        if debug {
            $logger.time_end($label);
        }
        result
    }};
}

pub use crate::{debug_log, time_it};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_toggle() {
        set_debug_mode(true);
        assert!(is_enabled());
        let value = time_it!(crate::adapters::logger(), "toggle", 40 + 2);
        assert_eq!(value, 42);
        set_debug_mode(false);
        assert!(!is_enabled());
    }
}
