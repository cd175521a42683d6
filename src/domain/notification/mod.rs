pub mod center;
pub mod config;
pub mod error;
pub mod types;

pub use center::{DismissCallback, NotificationCenter};
pub use config::ToastConfig;
pub use error::DisplayError;
pub use types::{NotificationId, NotificationState, NotificationView, Severity};
