use super::error_conversions::describe;
use crate::domain::notification::{DisplayError, NotificationId};
use crate::global::document;
use crate::ports::{DisplayPort, Opacity};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const CONTAINER_CLASS: &str = "toast-container";
pub const TOAST_CLASSES: &str = "toast notification";

/// Toast display built from `div`s appended to a container under `<body>`.
pub struct DomDisplay {
    container_id: String,
    nodes: RefCell<HashMap<NotificationId, HtmlElement>>,
}

impl DomDisplay {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            nodes: RefCell::new(HashMap::new()),
        }
    }

    fn container(&self, document: &Document) -> Result<Element, DisplayError> {
        if let Some(existing) = document.get_element_by_id(&self.container_id) {
            return Ok(existing);
        }

        let body = document
            .body()
            .ok_or_else(|| DisplayError::container_unavailable("document has no body"))?;
        let container = document.create_element("div")?;
        container.set_id(&self.container_id);
        container.set_class_name(CONTAINER_CLASS);
        body.append_child(&container)?;
        Ok(container)
    }
}

impl DisplayPort for DomDisplay {
    fn mount(
        &self,
        id: NotificationId,
        style: Option<&str>,
        content: &str,
        as_html: bool,
    ) -> Result<(), DisplayError> {
        let document =
            document().map_err(|e| DisplayError::container_unavailable(describe(&e)))?;
        let container = self.container(&document)?;

        let node: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| DisplayError::node_creation("div is not an HtmlElement"))?;
        node.set_class_name(TOAST_CLASSES);
        if let Some(style) = style {
            node.class_list().add_1(style)?;
        }
        if as_html {
            node.set_inner_html(content);
        } else {
            node.set_text_content(Some(content));
        }
        node.set_attribute("data-toast-id", &id.value().to_string())?;
        node.style().set_property("opacity", Opacity::Hidden.as_css())?;

        container.append_child(&node)?;
        self.nodes.borrow_mut().insert(id, node);
        Ok(())
    }

    fn fade(&self, id: NotificationId, to: Opacity, duration_ms: u32) {
        let nodes = self.nodes.borrow();
        let Some(node) = nodes.get(&id) else {
            return;
        };
        let style = node.style();
        let _ = style.set_property("transition", &format!("opacity {duration_ms}ms ease"));
        // Flush styles so the transition starts from the current opacity.
        let _ = node.offset_width();
        let _ = style.set_property("opacity", to.as_css());
    }

    fn detach(&self, id: NotificationId) -> bool {
        match self.nodes.borrow_mut().remove(&id) {
            Some(node) => {
                node.remove();
                true
            }
            None => false,
        }
    }

    fn clear(&self) {
        self.nodes.borrow_mut().clear();
        if let Ok(document) = document() {
            if let Some(container) = document.get_element_by_id(&self.container_id) {
                container.set_inner_html("");
            }
        }
    }
}
