#[cfg(feature = "notifications")]
pub mod notification;

#[cfg(feature = "submission")]
pub mod submission;
