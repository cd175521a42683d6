#![cfg(target_arch = "wasm32")]
#![cfg(feature = "notifications")]

extern crate wasm_bindgen_test;

use gloo_timers::future::TimeoutFuture;
use hearth_ui::adapters::wasm::{DomDisplay, Spawner, Timer};
use hearth_ui::domain::notification::{NotificationCenter, NotificationId, ToastConfig};
use hearth_ui::platform::Platform;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn center(container_id: &str, hold_ms: u32) -> NotificationCenter {
    let config = ToastConfig {
        hold_ms,
        fade_ms: 20,
        container_id: container_id.to_string(),
        allow_html: false,
    };
    NotificationCenter::new(
        config,
        Rc::new(DomDisplay::new(container_id)),
        Rc::new(Timer::new()),
        Rc::new(Spawner::new()),
        Platform::new().logger(),
    )
}

fn container(container_id: &str) -> Option<Element> {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
        .get_element_by_id(container_id)
}

fn toast_node(container_id: &str, id: NotificationId) -> Option<Element> {
    container(container_id)?
        .query_selector(&format!("[data-toast-id=\"{}\"]", id.value()))
        .expect("valid selector")
}

#[wasm_bindgen_test]
fn test_container_created_lazily_under_body() {
    let id = "toasts-lazy";
    let center = center(id, 1000);
    assert!(container(id).is_none(), "container should not exist before the first toast");

    center.info("first");
    center.info("second");

    let element = container(id).expect("container should be created");
    assert!(element.class_list().contains("toast-container"));
    assert_eq!(element.child_element_count(), 2);
    let parent = element.parent_element().expect("container should be attached");
    assert_eq!(parent.tag_name(), "BODY");
}

#[wasm_bindgen_test]
fn test_severity_classes_in_dom() {
    let id = "toasts-classes";
    let center = center(id, 1000);

    for (label, class) in [
        ("info", Some("is-info")),
        ("success", Some("is-success")),
        ("warning", Some("is-warning")),
        ("error", Some("is-danger")),
        ("shout", None),
    ] {
        let toast = center.show(label, label).expect("toast should be displayed");
        let node = toast_node(id, toast).expect("node should exist");
        assert!(node.class_list().contains("toast"));
        assert!(node.class_list().contains("notification"));
        match class {
            Some(class) => assert!(node.class_list().contains(class), "{label} -> {class}"),
            None => assert_eq!(node.class_list().length(), 2),
        }
    }
    center.clear();
}

#[wasm_bindgen_test]
fn test_text_content_is_not_parsed() {
    let id = "toasts-text";
    let center = center(id, 1000);
    let toast = center.warning("<b>bold</b>").unwrap();

    let node = toast_node(id, toast).unwrap();
    assert_eq!(node.child_element_count(), 0);
    assert_eq!(node.text_content().as_deref(), Some("<b>bold</b>"));
    center.clear();
}

#[wasm_bindgen_test]
async fn test_toast_removed_then_callback() {
    let id = "toasts-lifecycle";
    let center = center(id, 50);
    let called = Rc::new(Cell::new(false));
    let still_attached = Rc::new(Cell::new(true));

    let called_handle = called.clone();
    let attached_handle = still_attached.clone();
    let toast = center
        .show_then("success", "saved", move || {
            attached_handle.set(toast_node("toasts-lifecycle", NotificationId::new(1)).is_some());
            called_handle.set(true);
        })
        .unwrap();
    assert_eq!(toast, NotificationId::new(1));

    TimeoutFuture::new(30).await;
    assert!(!called.get());
    assert!(toast_node(id, toast).is_some());

    TimeoutFuture::new(200).await;
    assert!(called.get());
    assert!(!still_attached.get(), "node should be gone before the callback runs");
    assert!(center.is_empty());
}

#[wasm_bindgen_test]
async fn test_clear_skips_callbacks() {
    let id = "toasts-clear";
    let center = center(id, 50);
    let called = Rc::new(Cell::new(false));

    let called_handle = called.clone();
    center.show_then("error", "boom", move || called_handle.set(true));
    center.info("other");
    center.clear();

    assert_eq!(container(id).unwrap().child_element_count(), 0);
    TimeoutFuture::new(200).await;
    assert!(!called.get());
}
