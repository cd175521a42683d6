use serde::Deserialize;

pub const DEFAULT_HOLD_MS: u32 = 5000;
pub const DEFAULT_FADE_MS: u32 = 400;
pub const DEFAULT_CONTAINER_ID: &str = "toast-container";

/// Timing and rendering options of a [`NotificationCenter`](super::NotificationCenter).
///
/// Deserializes from a camelCase object where every field is optional:
/// `{ holdMs, fadeMs, containerId, allowHtml }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastConfig {
    /// How long a toast stays fully visible between its fades.
    pub hold_ms: u32,
    /// Duration of each fade transition.
    pub fade_ms: u32,
    /// Element id of the container the toasts are appended to.
    pub container_id: String,
    /// Insert content as markup instead of text. Only enable for trusted content.
    pub allow_html: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            hold_ms: DEFAULT_HOLD_MS,
            fade_ms: DEFAULT_FADE_MS,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            allow_html: false,
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub fn with_hold_ms(mut self, hold_ms: u32) -> Self {
        self.hold_ms = hold_ms;
        self
    }

    #[must_use]
    pub fn with_fade_ms(mut self, fade_ms: u32) -> Self {
        self.fade_ms = fade_ms;
        self
    }

    /// Time from `show` until the node is detached.
    pub fn lifetime_ms(&self) -> u64 {
        u64::from(self.fade_ms) * 2 + u64::from(self.hold_ms)
    }
}
