/// Port for accessing wall-clock time
pub trait ClockPort: Send + Sync {
    /// Returns the current timestamp in milliseconds
    fn now(&self) -> f64;
}
