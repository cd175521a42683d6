use super::error_conversions::describe;
use crate::domain::submission::{CacheMode, ExchangeFailure, ExchangeRequest, ServerResponse};
use crate::global::window;
use crate::ports::{ClockPort, ExchangePort};
use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCache, RequestInit, Response};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

fn transport(err: JsValue) -> ExchangeFailure {
    ExchangeFailure::transport(describe(&err))
}

/// Exchange over `window.fetch`.
#[derive(Clone, Copy)]
pub struct FetchExchange {
    clock: &'static dyn ClockPort,
}

impl FetchExchange {
    pub fn new(clock: &'static dyn ClockPort) -> Self {
        Self { clock }
    }
}

#[async_trait(?Send)]
impl ExchangePort for FetchExchange {
    async fn send(&self, request: ExchangeRequest) -> Result<ServerResponse, ExchangeFailure> {
        let window = window().map_err(transport)?;
        let page = window.location().href().unwrap_or_default();
        let url = request.url(&page, self.clock.now());

        let headers = Headers::new().map_err(transport)?;
        headers
            .set("X-Requested-With", "XMLHttpRequest")
            .map_err(transport)?;

        let init = RequestInit::new();
        init.set_method(&request.method);
        if request.cache == CacheMode::NoStore {
            init.set_cache(RequestCache::NoStore);
        }
        if request.carries_body() {
            headers
                .set("Content-Type", FORM_CONTENT_TYPE)
                .map_err(transport)?;
            init.set_body(&JsValue::from_str(&request.payload));
        }
        init.set_headers(&headers);

        let fetch_request = Request::new_with_str_and_init(&url, &init).map_err(transport)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(|_| ExchangeFailure::transport("fetch did not yield a Response"))?;

        let status = response.status();
        let content_type = response.headers().get("Content-Type").ok().flatten();
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|text| text.as_string()),
            Err(_) => None,
        };

        if response.ok() {
            Ok(ServerResponse {
                status,
                body: body.unwrap_or_default(),
                content_type,
            })
        } else {
            Err(ExchangeFailure::status(status, body))
        }
    }
}
