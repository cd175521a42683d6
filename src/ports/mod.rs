/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The domain layer only talks to the page through these traits, so the toast lifecycle
/// and the submission bridge run unchanged against the DOM, a headless display or test fakes.
/// Task spawning goes through [`futures::task::LocalSpawn`].

pub mod clock;
#[cfg(feature = "notifications")]
pub mod display;
#[cfg(feature = "submission")]
pub mod exchange;
#[cfg(feature = "submission")]
pub mod form;
pub mod logger;
pub mod timer;

pub use clock::ClockPort;
#[cfg(feature = "notifications")]
pub use display::{DisplayPort, Opacity};
#[cfg(feature = "submission")]
pub use exchange::ExchangePort;
#[cfg(feature = "submission")]
pub use form::{FormSurfacePort, SubmitEvent, SubmitHandler};
pub use futures::task::LocalSpawn as SpawnerPort;
pub use logger::LoggerPort;
pub use timer::TimerPort;
