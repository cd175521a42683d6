/// Platform - Dependency injection container for the stateless ports.
///
/// Stateful collaborators (display, exchange, timer, spawner) are handed to
/// `NotificationCenter` and `SubmissionBridge` directly by the composition root.

use crate::ports::{ClockPort, LoggerPort};

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_creation() {
        let platform = Platform::new();
        platform.logger().log("test");
        assert!(platform.clock().now() > 0.0);
    }

    #[test]
    fn test_platform_clone() {
        let platform = Platform::new();
        let cloned = platform;
        cloned.logger().log("test clone");
    }

    #[test]
    fn test_platform_logger_access() {
        let logger = Platform::default().logger();
        logger.log("test 1");
        logger.warn("test 2");
        logger.error("test 3");
    }
}
