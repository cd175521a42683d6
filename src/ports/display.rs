use crate::domain::notification::{DisplayError, NotificationId};

/// Target opacity of a fade transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    Shown,
    Hidden,
}

impl Opacity {
    pub fn as_css(&self) -> &'static str {
        match self {
            Opacity::Shown => "1",
            Opacity::Hidden => "0",
        }
    }
}

/// Display surface port - owns the toast container and its nodes.
///
/// Nodes are addressed by [`NotificationId`]; the adapter keeps the mapping to
/// whatever handle the platform uses. All calls happen on the UI thread.
pub trait DisplayPort {
    /// Creates the container if needed and appends a hidden node for the notification.
    ///
    /// `style` is the severity class, if any. `content` is inserted as markup when
    /// `as_html` is set, as plain text otherwise.
    fn mount(
        &self,
        id: NotificationId,
        style: Option<&str>,
        content: &str,
        as_html: bool,
    ) -> Result<(), DisplayError>;

    /// Starts an opacity transition lasting `duration_ms`. Unknown ids are ignored.
    fn fade(&self, id: NotificationId, to: Opacity, duration_ms: u32);

    /// Detaches the node. Returns `false` when it was already gone.
    fn detach(&self, id: NotificationId) -> bool;

    /// Empties the container.
    fn clear(&self);
}
