//! Error types reported by grid widgets.

use thiserror::Error;

/// Failures of calls into the grid widget.
///
/// These never escape the core: the host logs and discards them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The widget has not finished initializing.
    #[error("grid widget is not initialized")]
    NotInitialized,

    /// The widget rejected the call.
    #[error("grid widget call failed: {message}")]
    CallFailed { message: String },
}

impl WidgetError {
    pub fn call_failed(message: impl Into<String>) -> Self {
        Self::CallFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WidgetError::call_failed("resize observer detached");
        assert_eq!(
            err.to_string(),
            "grid widget call failed: resize observer detached"
        );
    }
}
