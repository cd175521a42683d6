/// Native adapters - implementations for native Rust (non-WASM).
///
/// There is no DOM off the browser, so toasts go to an in-memory display that
/// headless hosts (and tests) can inspect.

pub mod clock;
pub mod console_logger;
#[cfg(feature = "notifications")]
pub mod headless_display;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
#[cfg(feature = "notifications")]
pub use headless_display::{HeadlessDisplay, HeadlessNode};
