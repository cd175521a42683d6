//! Deterministic stand-ins for the timer, the network and forms.
//!
//! Drive them from a `futures::executor::LocalPool` to step through toast
//! lifecycles and submissions without a browser or real time passing.

#[cfg(feature = "submission")]
pub use submission::{ScriptedExchange, ScriptedForm};

use crate::ports::TimerPort;
use async_trait::async_trait;
use futures_channel::oneshot;
use std::cell::RefCell;

#[derive(Default)]
struct ManualTimerState {
    now: u64,
    sleepers: Vec<(u64, oneshot::Sender<()>)>,
}

/// Timer whose clock only moves when the test advances it.
#[derive(Default)]
pub struct ManualTimer {
    state: RefCell<ManualTimerState>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    /// Sleeps still awaited by a live task.
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .sleepers
            .iter()
            .filter(|(_, sender)| !sender.is_canceled())
            .count()
    }

    /// Moves the clock forward by `millis`, waking sleepers in deadline order.
    ///
    /// `settle` runs after every wake-up so that woken tasks can register their
    /// next sleep before the clock moves on; pass the executor's
    /// `run_until_stalled`.
    pub fn advance_with(&self, millis: u64, mut settle: impl FnMut()) {
        let target = self.now() + millis;
        settle();

        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                let Some(next) = state
                    .sleepers
                    .iter()
                    .map(|(deadline, _)| *deadline)
                    .filter(|deadline| *deadline <= target)
                    .min()
                else {
                    break;
                };
                state.now = next;
                let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut state.sleepers)
                    .into_iter()
                    .partition(|(deadline, _)| *deadline <= next);
                state.sleepers = waiting;
                due
            };

            for (_, sender) in due {
                let _ = sender.send(());
            }
            settle();
        }

        self.state.borrow_mut().now = target;
    }
}

#[async_trait(?Send)]
impl TimerPort for ManualTimer {
    async fn sleep(&self, millis: u32) {
        if millis == 0 {
            return;
        }
        let (sender, receiver) = oneshot::channel();
        {
            let mut state = self.state.borrow_mut();
            let deadline = state.now + u64::from(millis);
            state.sleepers.push((deadline, sender));
        }
        let _ = receiver.await;
    }
}

#[cfg(feature = "submission")]
mod submission {
    use crate::domain::submission::{
        ExchangeFailure, ExchangeRequest, FormSnapshot, ServerResponse, SubmissionError,
    };
    use crate::ports::{ExchangePort, FormSurfacePort, SubmitEvent, SubmitHandler};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Exchange that answers with queued outcomes, in order.
    ///
    /// A request arriving with nothing queued never completes.
    #[derive(Default)]
    pub struct ScriptedExchange {
        requests: RefCell<Vec<ExchangeRequest>>,
        outcomes: RefCell<VecDeque<Result<ServerResponse, ExchangeFailure>>>,
    }

    impl ScriptedExchange {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, outcome: Result<ServerResponse, ExchangeFailure>) {
            self.outcomes.borrow_mut().push_back(outcome);
        }

        pub fn requests(&self) -> Vec<ExchangeRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ExchangePort for ScriptedExchange {
        async fn send(&self, request: ExchangeRequest) -> Result<ServerResponse, ExchangeFailure> {
            self.requests.borrow_mut().push(request);
            let next = self.outcomes.borrow_mut().pop_front();
            match next {
                Some(outcome) => outcome,
                None => futures::future::pending().await,
            }
        }
    }

    /// Form whose fields are set directly and whose submit button is [`submit`](Self::submit).
    pub struct ScriptedForm {
        attached: bool,
        values: RefCell<FormSnapshot>,
        handlers: RefCell<Vec<SubmitHandler>>,
    }

    struct ScriptedEvent<'a> {
        form: &'a ScriptedForm,
        prevented: Cell<bool>,
    }

    impl SubmitEvent for ScriptedEvent<'_> {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }

        fn snapshot(&self) -> FormSnapshot {
            self.form.values.borrow().clone()
        }
    }

    impl ScriptedForm {
        pub fn new(method: Option<&str>, action: Option<&str>, payload: &str) -> Self {
            Self {
                attached: true,
                values: RefCell::new(FormSnapshot {
                    method: method.map(str::to_string),
                    action: action.map(str::to_string),
                    payload: payload.to_string(),
                }),
                handlers: RefCell::new(Vec::new()),
            }
        }

        /// A form no longer in the page; listening fails.
        pub fn detached() -> Self {
            Self {
                attached: false,
                ..Self::new(None, None, "")
            }
        }

        pub fn set_method(&self, method: Option<&str>) {
            self.values.borrow_mut().method = method.map(str::to_string);
        }

        pub fn set_payload(&self, payload: &str) {
            self.values.borrow_mut().payload = payload.to_string();
        }

        /// Fires a submit event. Returns whether a handler prevented the default action.
        pub fn submit(&self) -> bool {
            let event = ScriptedEvent {
                form: self,
                prevented: Cell::new(false),
            };
            let dyn_event: &dyn SubmitEvent = &event;
            for handler in self.handlers.borrow_mut().iter_mut() {
                handler(dyn_event);
            }
            event.prevented.get()
        }
    }

    impl FormSurfacePort for ScriptedForm {
        fn on_submit(&self, handler: SubmitHandler) -> Result<(), SubmissionError> {
            if !self.attached {
                return Err(SubmissionError::listener_failed("form is detached"));
            }
            self.handlers.borrow_mut().push(handler);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_manual_timer_wakes_in_deadline_order() {
        let mut pool = LocalPool::new();
        let timer = Rc::new(ManualTimer::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("late", 300u32), ("early", 100), ("middle", 200)] {
            let timer = timer.clone();
            let log = log.clone();
            pool.spawner()
                .spawn_local(async move {
                    timer.sleep(delay).await;
                    log.borrow_mut().push((label, timer.now()));
                })
                .unwrap();
        }

        timer.advance_with(250, || pool.run_until_stalled());
        assert_eq!(*log.borrow(), vec![("early", 100), ("middle", 200)]);
        assert_eq!(timer.now(), 250);
        assert_eq!(timer.pending(), 1);

        timer.advance_with(50, || pool.run_until_stalled());
        assert_eq!(log.borrow().last(), Some(&("late", 300)));
    }

    #[test]
    fn test_chained_sleeps_measure_from_wake_time() {
        let mut pool = LocalPool::new();
        let timer = Rc::new(ManualTimer::new());
        let done = Rc::new(Cell::new(0u64));

        let task_timer = timer.clone();
        let task_done = done.clone();
        pool.spawner()
            .spawn_local(async move {
                task_timer.sleep(100).await;
                task_timer.sleep(100).await;
                task_done.set(task_timer.now());
            })
            .unwrap();

        timer.advance_with(1000, || pool.run_until_stalled());
        assert_eq!(done.get(), 200);
    }
}
