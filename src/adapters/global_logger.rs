/// Global logger and clock instances - automatically select the implementation based on build target.
///
/// Supports both WASM (browser console, `Date.now`) and native (stdout/stderr, system time).
/// The correct implementation is selected at compile time based on the target architecture.

use crate::ports::{ClockPort, LoggerPort};
use once_cell::sync::Lazy;

#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::{Clock, ConsoleLogger};
#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::{Clock, ConsoleLogger};

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);
static CLOCK: Lazy<Clock> = Lazy::new(Clock::new);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}

/// Get the global clock instance.
#[inline]
pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}
