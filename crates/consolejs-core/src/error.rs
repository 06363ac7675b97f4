//! Error types for the console facade

use thiserror::Error;

/// Raised by `assert` when the test evaluated to `false`
///
/// Carries the caller-supplied message as its only payload. It is never
/// recovered inside the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("AssertionError: {message}")]
pub struct AssertionFailure {
    pub message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied to the failed assertion
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Abnormal evaluation of an assertion test
///
/// Converted into a forced warning and swallowed; it never leaves `assert`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationFailure {
    /// The test returned an error instead of a verdict
    #[error("{0}")]
    Errored(String),

    /// The test panicked while being evaluated
    #[error("panicked: {0}")]
    Panicked(String),
}

impl EvaluationFailure {
    /// Build a failure from a panic payload captured by `catch_unwind`
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Panicked(message)
    }
}

/// Errors from configuration and global initialization
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Console is already initialized")]
    AlreadyInitialized,

    #[error("Invalid debug level: {0}")]
    InvalidLevel(i64),

    #[error("Unknown debug level name: {0}")]
    UnknownLevelName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
