use crate::ports::clock::ClockPort;

/// Wall clock from `Date.now()`, available in windows and workers alike.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        js_sys::Date::now()
    }
}
