use crate::domain::submission::{ExchangeFailure, ExchangeRequest, ServerResponse};
use async_trait::async_trait;

/// Network exchange port - one request/response round trip per call.
///
/// Non-success statuses and transport errors both come back as [`ExchangeFailure`].
#[async_trait(?Send)]
pub trait ExchangePort {
    async fn send(&self, request: ExchangeRequest) -> Result<ServerResponse, ExchangeFailure>;
}
