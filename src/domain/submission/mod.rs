pub mod bridge;
pub mod deferred;
pub mod error;
pub mod types;

pub use bridge::{Guard, SubmissionBridge, SubmissionDeferred, SubmissionOutcome};
pub use deferred::{deferred, Deferred, Settler};
pub use error::{ExchangeFailure, FailureKind, SubmissionError};
pub use types::{CacheMode, ExchangeRequest, FormSnapshot, ServerResponse, DEFAULT_METHOD};
