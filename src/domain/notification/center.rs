//! Toast lifecycle management.
//!
//! Every shown notification runs its own task: fade in, hold, fade out, detach,
//! then the optional dismiss callback. Tasks never share a clock, so two toasts
//! shown back to back leave the container independently.

use super::config::ToastConfig;
use super::types::{NotificationId, NotificationState, NotificationView, Severity};
use crate::debug_log;
use crate::ports::{DisplayPort, LoggerPort, Opacity, SpawnerPort, TimerPort};
use futures::future::{AbortHandle, Abortable};
use futures::task::LocalSpawnExt;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Continuation invoked once a toast has been detached.
pub type DismissCallback = Box<dyn FnOnce()>;

struct Entry {
    id: NotificationId,
    severity: Severity,
    state: NotificationState,
    on_dismissed: Option<DismissCallback>,
    abort: AbortHandle,
}

struct Shared {
    config: ToastConfig,
    display: Rc<dyn DisplayPort>,
    timer: Rc<dyn TimerPort>,
    spawner: Rc<dyn SpawnerPort>,
    logger: &'static dyn LoggerPort,
    /// Insertion order is the stacking order of the container.
    entries: RefCell<Vec<Entry>>,
    next_id: Cell<u64>,
}

impl Shared {
    /// Returns `false` when the entry is gone (cleared).
    fn set_state(&self, id: NotificationId, state: NotificationState) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.state = state;
                true
            }
            None => false,
        }
    }

    fn take_entry(&self, id: NotificationId) -> Option<Entry> {
        let mut entries = self.entries.borrow_mut();
        let position = entries.iter().position(|entry| entry.id == id)?;
        Some(entries.remove(position))
    }
}

/// Owns the toast container of a page and the lifecycle of every toast in it.
///
/// Built once by the application and handed to whatever needs to report
/// something to the user. Cloning shares the same container.
#[derive(Clone)]
pub struct NotificationCenter {
    shared: Rc<Shared>,
}

impl NotificationCenter {
    pub fn new(
        config: ToastConfig,
        display: Rc<dyn DisplayPort>,
        timer: Rc<dyn TimerPort>,
        spawner: Rc<dyn SpawnerPort>,
        logger: &'static dyn LoggerPort,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                display,
                timer,
                spawner,
                logger,
                entries: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.shared.config
    }

    /// Displays a toast and schedules its dismissal.
    ///
    /// Returns `None` when the display could not take the toast; the failure is
    /// logged and otherwise swallowed.
    pub fn show(&self, severity: impl Into<Severity>, content: &str) -> Option<NotificationId> {
        self.spawn_toast(severity.into(), content, None)
    }

    /// Like [`show`](Self::show), then calls `on_dismissed` once the toast is detached.
    ///
    /// The callback is dropped without being called if the toast is cleared first.
    pub fn show_then(
        &self,
        severity: impl Into<Severity>,
        content: &str,
        on_dismissed: impl FnOnce() + 'static,
    ) -> Option<NotificationId> {
        self.spawn_toast(severity.into(), content, Some(Box::new(on_dismissed)))
    }

    pub fn info(&self, content: &str) -> Option<NotificationId> {
        self.show(Severity::Info, content)
    }

    pub fn success(&self, content: &str) -> Option<NotificationId> {
        self.show(Severity::Success, content)
    }

    pub fn warning(&self, content: &str) -> Option<NotificationId> {
        self.show(Severity::Warning, content)
    }

    pub fn error(&self, content: &str) -> Option<NotificationId> {
        self.show(Severity::Error, content)
    }

    /// Removes every toast at once, whatever its phase.
    ///
    /// Pending dismiss callbacks are dropped, not invoked.
    pub fn clear(&self) {
        let drained: Vec<Entry> = self.shared.entries.borrow_mut().drain(..).collect();
        for entry in &drained {
            entry.abort.abort();
        }
        self.shared.display.clear();
        debug_log!(self.shared.logger, "Cleared {} notification(s)", drained.len());
    }

    /// Notifications still owned by the center, in stacking order.
    pub fn notifications(&self) -> Vec<NotificationView> {
        self.shared
            .entries
            .borrow()
            .iter()
            .map(|entry| NotificationView {
                id: entry.id,
                severity: entry.severity,
                state: entry.state,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shared.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn spawn_toast(
        &self,
        severity: Severity,
        content: &str,
        on_dismissed: Option<DismissCallback>,
    ) -> Option<NotificationId> {
        let shared = &self.shared;
        let id = NotificationId::new(shared.next_id.get());
        shared.next_id.set(id.value() + 1);

        if let Err(e) = shared.display.mount(
            id,
            severity.style_class(),
            content,
            shared.config.allow_html,
        ) {
            shared
                .logger
                .warn(&format!("Notification {id} not displayed: {e}"));
            return None;
        }

        let (abort, registration) = AbortHandle::new_pair();
        shared.entries.borrow_mut().push(Entry {
            id,
            severity,
            state: NotificationState::Pending,
            on_dismissed,
            abort,
        });

        let lifecycle = Abortable::new(run_lifecycle(Rc::clone(shared), id), registration);
        if let Err(e) = shared.spawner.spawn_local(async move {
            let _ = lifecycle.await;
        }) {
            shared
                .logger
                .error(&format!("Failed to schedule notification {id}: {e}"));
            shared.take_entry(id);
            shared.display.detach(id);
            return None;
        }

        debug_log!(shared.logger, "Notification {id} shown ({severity:?})");
        Some(id)
    }
}

async fn run_lifecycle(shared: Rc<Shared>, id: NotificationId) {
    let fade_ms = shared.config.fade_ms;

    if !shared.set_state(id, NotificationState::Visible) {
        return;
    }
    shared.display.fade(id, Opacity::Shown, fade_ms);
    shared.timer.sleep(fade_ms).await;
    shared.timer.sleep(shared.config.hold_ms).await;

    if !shared.set_state(id, NotificationState::Dismissing) {
        return;
    }
    shared.display.fade(id, Opacity::Hidden, fade_ms);
    shared.timer.sleep(fade_ms).await;

    let Some(mut entry) = shared.take_entry(id) else {
        return;
    };
    shared.display.detach(id);
    entry.state = NotificationState::Removed;
    debug_log!(shared.logger, "Notification {id} removed");

    // The entry is out of the list, so the callback may show or clear freely.
    if let Some(on_dismissed) = entry.on_dismissed.take() {
        on_dismissed();
    }
}
