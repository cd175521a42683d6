use serde::de::DeserializeOwned;

/// Method used when the form does not declare one.
pub const DEFAULT_METHOD: &str = "POST";

/// What a form declares at the moment it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub method: Option<String>,
    pub action: Option<String>,
    /// `application/x-www-form-urlencoded` serialization of the current values.
    pub payload: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Default,
    NoStore,
}

/// One network round trip, resolved from a [`FormSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    /// Upper-case HTTP method.
    pub method: String,
    /// Declared action. Empty means the current page.
    pub target: String,
    pub payload: String,
    pub cache: CacheMode,
}

impl ExchangeRequest {
    /// Builds the request a submit event issues: default method, caching disabled.
    pub fn from_snapshot(snapshot: FormSnapshot) -> Self {
        let method = snapshot
            .method
            .map(|method| method.trim().to_ascii_uppercase())
            .filter(|method| !method.is_empty())
            .unwrap_or_else(|| DEFAULT_METHOD.to_string());

        Self {
            method,
            target: snapshot.action.unwrap_or_default(),
            payload: snapshot.payload,
            cache: CacheMode::NoStore,
        }
    }

    /// GET and HEAD carry the payload in the query string instead of a body.
    pub fn carries_body(&self) -> bool {
        !matches!(self.method.as_str(), "GET" | "HEAD")
    }

    /// Resolves the address to request.
    ///
    /// `page` stands in for an empty target. For query-only methods the payload is
    /// appended, plus a `_=<now_ms>` cache buster when caching is disabled.
    pub fn url(&self, page: &str, now_ms: f64) -> String {
        let target = if self.target.is_empty() {
            page
        } else {
            self.target.as_str()
        };
        if self.carries_body() {
            return target.to_string();
        }

        let (target, _fragment) = target.split_once('#').unwrap_or((target, ""));
        let mut params = Vec::with_capacity(2);
        if !self.payload.is_empty() {
            params.push(self.payload.clone());
        }
        if self.cache == CacheMode::NoStore {
            params.push(format!("_={}", now_ms as u64));
        }
        if params.is_empty() {
            return target.to_string();
        }

        let separator = if target.contains('?') { '&' } else { '?' };
        format!("{target}{separator}{}", params.join("&"))
    }
}

/// Successful response of an exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub status: u16,
    /// Raw response text.
    pub body: String,
    pub content_type: Option<String>,
}

impl ServerResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|value| value.to_ascii_lowercase().contains("json"))
            .unwrap_or(false)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn snapshot(method: Option<&str>, action: Option<&str>, payload: &str) -> FormSnapshot {
        FormSnapshot {
            method: method.map(str::to_string),
            action: action.map(str::to_string),
            payload: payload.to_string(),
        }
    }

    #[test]
    fn test_method_defaults_to_post() {
        assert_eq!(ExchangeRequest::from_snapshot(snapshot(None, None, "")).method, "POST");
        assert_eq!(
            ExchangeRequest::from_snapshot(snapshot(Some("  "), None, "")).method,
            "POST"
        );
    }

    #[test]
    fn test_declared_method_is_upper_cased() {
        let request = ExchangeRequest::from_snapshot(snapshot(Some("get"), Some("/find"), "q=a"));
        assert_eq!(request.method, "GET");
        assert_eq!(request.target, "/find");
        assert_eq!(request.cache, CacheMode::NoStore);
        assert!(!request.carries_body());
    }

    #[test]
    fn test_post_url_is_target() {
        let request = ExchangeRequest::from_snapshot(snapshot(None, Some("/save"), "a=1"));
        assert_eq!(request.url("https://host/page", 1.0), "/save");
    }

    #[test]
    fn test_empty_target_uses_page() {
        let request = ExchangeRequest::from_snapshot(snapshot(None, None, "a=1"));
        assert_eq!(request.url("https://host/page", 1.0), "https://host/page");
    }

    #[test]
    fn test_get_url_carries_payload_and_cache_buster() {
        let request = ExchangeRequest::from_snapshot(snapshot(Some("GET"), Some("/find"), "q=a+b"));
        assert_eq!(request.url("", 1700000000123.0), "/find?q=a+b&_=1700000000123");
    }

    #[test]
    fn test_get_url_extends_existing_query_and_drops_fragment() {
        let mut request =
            ExchangeRequest::from_snapshot(snapshot(Some("GET"), Some("/find?page=2#top"), ""));
        request.cache = CacheMode::Default;
        assert_eq!(request.url("", 5.0), "/find?page=2");

        request.payload = "q=x".to_string();
        assert_eq!(request.url("", 5.0), "/find?page=2&q=x");
    }

    #[test]
    fn test_response_json() {
        #[derive(Deserialize)]
        struct Ack {
            ok: bool,
        }

        let response = ServerResponse::new(200, r#"{"ok":true}"#)
            .with_content_type("application/json; charset=utf-8");
        assert!(response.is_json());
        assert!(response.json::<Ack>().unwrap().ok);
        assert!(!ServerResponse::new(200, "done").is_json());
    }
}
