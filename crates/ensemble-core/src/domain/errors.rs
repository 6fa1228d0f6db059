//! Errors - launch-time and run-time error types.
//!
//! - `LaunchError`: returned synchronously by `partition` / `run`; nothing was started.
//! - `AppError`: returned by handlers and by `Runnable::run`.

use super::AppName;

/// Boxed failure reason carried by `AppError::Failed`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LaunchError {
    /// The vector must hold the program name plus at least one more token.
    #[error("no arguments provided (got {got}, need the program name and at least one application)")]
    InsufficientArguments { got: usize },

    #[error("no applications to execute")]
    NoApplicationsSelected,
}

/// AppError is the result of a sub-application run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The handler itself reported a failure.
    #[error("{0}")]
    Failed(BoxError),

    /// The execution context was cancelled before the application finished.
    #[error("context cancelled")]
    Cancelled,

    #[error("application '{app}' panicked")]
    Panicked { app: AppName },
}

impl AppError {
    /// Wraps any error or message as a handler failure.
    pub fn failed(err: impl Into<BoxError>) -> Self {
        Self::Failed(err.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_keeps_message() {
        let err = AppError::failed("port 8080 already in use");
        assert_eq!(err.to_string(), "port 8080 already in use");
        assert!(!err.is_cancelled());
    }

    #[test]
    fn failed_accepts_std_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing binary");
        let err = AppError::failed(io);
        assert!(matches!(err, AppError::Failed(_)));
        assert_eq!(err.to_string(), "missing binary");
    }

    #[test]
    fn launch_error_messages() {
        let err = LaunchError::InsufficientArguments { got: 1 };
        assert!(err.to_string().contains("got 1"));
        assert_eq!(
            LaunchError::NoApplicationsSelected.to_string(),
            "no applications to execute"
        );
    }
}
