use std::fmt;

#[derive(Debug, Clone)]
pub enum DisplayError {
    ContainerUnavailable(String),
    NodeCreation(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::ContainerUnavailable(msg) => {
                write!(f, "Toast container unavailable: {msg}")
            }
            DisplayError::NodeCreation(msg) => write!(f, "Failed to create toast node: {msg}"),
        }
    }
}

impl std::error::Error for DisplayError {}

impl DisplayError {
    pub fn container_unavailable(message: impl Into<String>) -> Self {
        DisplayError::ContainerUnavailable(message.into())
    }

    pub fn node_creation(message: impl Into<String>) -> Self {
        DisplayError::NodeCreation(message.into())
    }
}
