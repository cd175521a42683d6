//! Form submission over an asynchronous exchange.
//!
//! The bridge listens for a form's submit events, cancels the navigation and
//! sends the form contents through an [`ExchangePort`]. A guard may veto an
//! event; a vetoed event sends nothing and settles nothing.
//!
//! Overlapping submissions on one form are not de-duplicated: every event that
//! passes the guard issues its own exchange. Callers that need to block double
//! submits should do it in the guard.

use super::deferred::{deferred, Deferred};
use super::error::{ExchangeFailure, SubmissionError};
use super::types::{ExchangeRequest, ServerResponse};
use crate::ports::{ExchangePort, FormSurfacePort, LoggerPort, SpawnerPort, SubmitEvent};
use crate::{debug_log, time_it};
use futures::task::LocalSpawnExt;
use futures_channel::mpsc::{self, UnboundedReceiver};
use std::rc::Rc;

/// Synchronous predicate run before each submission; `false` vetoes it.
pub type Guard = Box<dyn FnMut() -> bool>;

pub type SubmissionOutcome = Result<ServerResponse, ExchangeFailure>;

pub type SubmissionDeferred = Deferred<ServerResponse, ExchangeFailure>;

#[derive(Clone)]
pub struct SubmissionBridge {
    exchange: Rc<dyn ExchangePort>,
    spawner: Rc<dyn SpawnerPort>,
    logger: &'static dyn LoggerPort,
}

impl SubmissionBridge {
    pub fn new(
        exchange: Rc<dyn ExchangePort>,
        spawner: Rc<dyn SpawnerPort>,
        logger: &'static dyn LoggerPort,
    ) -> Self {
        Self {
            exchange,
            spawner,
            logger,
        }
    }

    /// Intercepts the submit events of `surface` and returns the result of the
    /// first exchange they trigger.
    ///
    /// The listener stays attached: vetoed events leave the form usable, and
    /// later events still send, although only the first completed exchange
    /// settles the returned deferred.
    pub fn bind(
        &self,
        surface: &dyn FormSurfacePort,
        guard: Option<Guard>,
    ) -> Result<SubmissionDeferred, SubmissionError> {
        let (settler, deferred) = deferred();
        let logger = self.logger;
        self.listen(surface, guard, move |outcome| {
            if !settler.settle(outcome) {
                debug_log!(logger, "Submission finished after the form was already settled");
            }
        })?;
        Ok(deferred)
    }

    /// Like [`bind`](Self::bind), but yields the outcome of every exchange.
    pub fn bind_all(
        &self,
        surface: &dyn FormSurfacePort,
        guard: Option<Guard>,
    ) -> Result<UnboundedReceiver<SubmissionOutcome>, SubmissionError> {
        let (sender, receiver) = mpsc::unbounded();
        let logger = self.logger;
        self.listen(surface, guard, move |outcome| {
            if let Err(e) = sender.unbounded_send(outcome) {
                if !e.is_disconnected() {
                    logger.error(&format!("Failed to forward submission outcome: {e:?}"));
                }
            }
        })?;
        Ok(receiver)
    }

    fn listen(
        &self,
        surface: &dyn FormSurfacePort,
        mut guard: Option<Guard>,
        deliver: impl Fn(SubmissionOutcome) + 'static,
    ) -> Result<(), SubmissionError> {
        let exchange = Rc::clone(&self.exchange);
        let spawner = Rc::clone(&self.spawner);
        let logger = self.logger;
        let deliver = Rc::new(deliver);

        surface.on_submit(Box::new(move |event: &dyn SubmitEvent| {
            event.prevent_default();

            if let Some(guard) = guard.as_mut() {
                if !guard() {
                    debug_log!(logger, "Submission vetoed by guard");
                    return;
                }
            }

            let request = ExchangeRequest::from_snapshot(event.snapshot());
            debug_log!(logger, "Submitting {} {}", request.method, request.target);

            let exchange = Rc::clone(&exchange);
            let deliver = Rc::clone(&deliver);
            let task = async move {
                let outcome = time_it!(logger, "form submission", exchange.send(request).await);
                if let Err(failure) = &outcome {
                    logger.warn(&format!("Form submission failed: {failure}"));
                }
                deliver(outcome);
            };

            if let Err(e) = spawner.spawn_local(task) {
                logger.error(&format!("Failed to schedule form submission: {e}"));
            }
        }))
    }
}
