use crate::domain::notification::{DisplayError, NotificationId};
use crate::ports::{DisplayPort, Opacity};
use std::cell::{Cell, RefCell};

/// Snapshot of a toast node held by [`HeadlessDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessNode {
    pub id: NotificationId,
    pub classes: Vec<String>,
    pub content: String,
    pub is_html: bool,
    pub opacity: Opacity,
    pub transition_ms: u32,
}

/// In-memory display: keeps the container as an ordered list of nodes.
#[derive(Debug)]
pub struct HeadlessDisplay {
    available: bool,
    containers_created: Cell<usize>,
    container: RefCell<Option<Vec<HeadlessNode>>>,
}

impl Default for HeadlessDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self {
            available: true,
            containers_created: Cell::new(0),
            container: RefCell::new(None),
        }
    }

    /// A display without a page root; every mount fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn nodes(&self) -> Vec<HeadlessNode> {
        self.container.borrow().clone().unwrap_or_default()
    }

    pub fn node(&self, id: NotificationId) -> Option<HeadlessNode> {
        self.container
            .borrow()
            .as_ref()?
            .iter()
            .find(|node| node.id == id)
            .cloned()
    }

    pub fn containers_created(&self) -> usize {
        self.containers_created.get()
    }
}

impl DisplayPort for HeadlessDisplay {
    fn mount(
        &self,
        id: NotificationId,
        style: Option<&str>,
        content: &str,
        as_html: bool,
    ) -> Result<(), DisplayError> {
        if !self.available {
            return Err(DisplayError::container_unavailable("no page root"));
        }

        let mut container = self.container.borrow_mut();
        let nodes = container.get_or_insert_with(|| {
            self.containers_created.set(self.containers_created.get() + 1);
            Vec::new()
        });

        let mut classes = vec!["toast".to_string(), "notification".to_string()];
        classes.extend(style.map(str::to_string));
        nodes.push(HeadlessNode {
            id,
            classes,
            content: content.to_string(),
            is_html: as_html,
            opacity: Opacity::Hidden,
            transition_ms: 0,
        });
        Ok(())
    }

    fn fade(&self, id: NotificationId, to: Opacity, duration_ms: u32) {
        if let Some(nodes) = self.container.borrow_mut().as_mut() {
            if let Some(node) = nodes.iter_mut().find(|node| node.id == id) {
                node.opacity = to;
                node.transition_ms = duration_ms;
            }
        }
    }

    fn detach(&self, id: NotificationId) -> bool {
        let mut container = self.container.borrow_mut();
        let Some(nodes) = container.as_mut() else {
            return false;
        };
        let before = nodes.len();
        nodes.retain(|node| node.id != id);
        nodes.len() < before
    }

    fn clear(&self) {
        if let Some(nodes) = self.container.borrow_mut().as_mut() {
            nodes.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_created_lazily_once() {
        let display = HeadlessDisplay::new();
        assert_eq!(display.containers_created(), 0);

        display.mount(NotificationId::new(1), None, "a", false).unwrap();
        display.mount(NotificationId::new(2), Some("is-info"), "b", false).unwrap();
        assert_eq!(display.containers_created(), 1);
        assert_eq!(display.nodes().len(), 2);
    }

    #[test]
    fn test_detach_reports_missing_nodes() {
        let display = HeadlessDisplay::new();
        let id = NotificationId::new(1);
        assert!(!display.detach(id));

        display.mount(id, None, "a", false).unwrap();
        assert!(display.detach(id));
        assert!(!display.detach(id));
    }

    #[test]
    fn test_fade_updates_opacity() {
        let display = HeadlessDisplay::new();
        let id = NotificationId::new(3);
        display.mount(id, None, "a", false).unwrap();
        display.fade(id, Opacity::Shown, 250);

        let node = display.node(id).unwrap();
        assert_eq!(node.opacity, Opacity::Shown);
        assert_eq!(node.transition_ms, 250);
    }

    #[test]
    fn test_unavailable_display_rejects_mount() {
        let display = HeadlessDisplay::unavailable();
        let result = display.mount(NotificationId::new(1), None, "a", false);
        assert!(matches!(result, Err(DisplayError::ContainerUnavailable(_))));
        assert!(display.nodes().is_empty());
    }
}
