/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod spawner;
pub mod timer;

#[cfg(feature = "notifications")]
pub mod dom_display;
#[cfg(feature = "submission")]
pub mod fetch_exchange;
#[cfg(feature = "submission")]
pub mod html_form;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use spawner::Spawner;
pub use timer::Timer;

#[cfg(feature = "notifications")]
pub use dom_display::DomDisplay;
#[cfg(feature = "submission")]
pub use fetch_exchange::FetchExchange;
#[cfg(feature = "submission")]
pub use html_form::HtmlForm;
