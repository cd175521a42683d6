use crate::domain::submission::{FormSnapshot, SubmissionError};

/// A native submit event as seen by the bridge.
pub trait SubmitEvent {
    /// Stops the browser from navigating to the form target.
    fn prevent_default(&self);

    /// Reads the declared method, action and serialized values of the form right now.
    fn snapshot(&self) -> FormSnapshot;
}

pub type SubmitHandler = Box<dyn FnMut(&dyn SubmitEvent)>;

/// Form-like surface port.
pub trait FormSurfacePort {
    /// Registers `handler` for every future submit event of the surface.
    fn on_submit(&self, handler: SubmitHandler) -> Result<(), SubmissionError>;
}
