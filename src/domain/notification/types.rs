use std::fmt;

/// Identifier of a notification, unique within its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity level determines the style class of a toast.
///
/// Any label outside the four known ones maps to `Unclassified`, which renders
/// without a severity class but otherwise behaves like the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
    Unclassified,
}

impl Severity {
    pub fn style_class(&self) -> Option<&'static str> {
        match self {
            Severity::Info => Some("is-info"),
            Severity::Success => Some("is-success"),
            Severity::Warning => Some("is-warning"),
            Severity::Error => Some("is-danger"),
            Severity::Unclassified => None,
        }
    }
}

impl From<&str> for Severity {
    fn from(label: &str) -> Self {
        match label {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Unclassified,
        }
    }
}

/// Lifecycle of a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    /// Created and appended, fade-in not started yet.
    Pending,
    /// Fading in or held on screen.
    Visible,
    /// Fading out.
    Dismissing,
    /// Detached from the container.
    Removed,
}

/// Read-only view of a notification still owned by the center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub severity: Severity,
    pub state: NotificationState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_map_to_classes() {
        assert_eq!(Severity::from("info").style_class(), Some("is-info"));
        assert_eq!(Severity::from("success").style_class(), Some("is-success"));
        assert_eq!(Severity::from("warning").style_class(), Some("is-warning"));
        assert_eq!(Severity::from("error").style_class(), Some("is-danger"));
    }

    #[test]
    fn test_unknown_labels_have_no_class() {
        for label in ["", "danger", "INFO", "notice"] {
            let severity = Severity::from(label);
            assert_eq!(severity, Severity::Unclassified, "label {label:?}");
            assert_eq!(severity.style_class(), None);
        }
    }

    #[test]
    fn test_notification_id_display() {
        assert_eq!(NotificationId::new(7).to_string(), "toast-7");
        assert_eq!(NotificationId::new(7).value(), 7);
    }
}
