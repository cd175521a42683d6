use crate::domain::submission::{FormSnapshot, SubmissionError};
use crate::global::document;
use crate::ports::{FormSurfacePort, SubmitEvent, SubmitHandler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FormData, HtmlFormElement, UrlSearchParams};

/// One or more `<form>` elements acting as a single submission surface.
///
/// Every form shares the same handler, so a selector matching several forms
/// feeds one deferred.
#[derive(Clone)]
pub struct HtmlForm {
    forms: Vec<HtmlFormElement>,
}

struct DomSubmitEvent<'a> {
    event: &'a Event,
    form: &'a HtmlFormElement,
}

impl SubmitEvent for DomSubmitEvent<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn snapshot(&self) -> FormSnapshot {
        HtmlForm::read(self.form)
    }
}

impl HtmlForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { forms: vec![form] }
    }

    /// Collects every form matching a CSS selector. Matches that are not forms are skipped.
    pub fn query(selector: &str) -> Result<Self, SubmissionError> {
        let matches = document()?.query_selector_all(selector)?;
        let forms: Vec<HtmlFormElement> = (0..matches.length())
            .filter_map(|index| matches.item(index))
            .filter_map(|node| node.dyn_into::<HtmlFormElement>().ok())
            .collect();

        if forms.is_empty() {
            return Err(SubmissionError::surface_unavailable(format!(
                "no form matches {selector}"
            )));
        }
        Ok(Self { forms })
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    /// Declared attributes (not the resolved properties) and urlencoded values.
    pub fn read(form: &HtmlFormElement) -> FormSnapshot {
        FormSnapshot {
            method: form.get_attribute("method"),
            action: form.get_attribute("action"),
            payload: serialize(form),
        }
    }
}

fn serialize(form: &HtmlFormElement) -> String {
    FormData::new_with_form(form)
        .and_then(|data| UrlSearchParams::new_with_str_sequence_sequence(&data))
        .map(|params| String::from(params.to_string()))
        .unwrap_or_default()
}

impl FormSurfacePort for HtmlForm {
    fn on_submit(&self, handler: SubmitHandler) -> Result<(), SubmissionError> {
        let handler = Rc::new(RefCell::new(handler));

        for form in &self.forms {
            let handler = Rc::clone(&handler);
            let target = form.clone();
            let callback = Closure::wrap(Box::new(move |event: Event| {
                let submit: &dyn SubmitEvent = &DomSubmitEvent {
                    event: &event,
                    form: &target,
                };
                match handler.try_borrow_mut() {
                    Ok(mut handler) => (*handler)(submit),
                    // A guard submitting a sibling form re-enters here; still no navigation.
                    Err(_) => event.prevent_default(),
                }
            }) as Box<dyn FnMut(Event)>);

            form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())?;
            // The listener stays for the lifetime of the page.
            callback.forget();
        }
        Ok(())
    }
}
