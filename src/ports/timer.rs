use async_trait::async_trait;

/// Port for suspending a task on the host's timer facility.
///
/// Implementations must resolve immediately for a zero delay.
#[async_trait(?Send)]
pub trait TimerPort {
    async fn sleep(&self, millis: u32);
}
