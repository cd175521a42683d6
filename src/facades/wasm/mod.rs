pub mod converters;

#[cfg(feature = "submission")]
pub mod forms;
#[cfg(feature = "notifications")]
pub mod toasts;
