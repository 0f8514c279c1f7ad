use std::io;
use thiserror::Error;

/// Core error type for tokenomics.
#[derive(Error, Debug)]
pub enum TokenomicsError {
    #[error("config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("tokenizer error: {message}")]
    Tokenizer { message: String },
}

impl TokenomicsError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn tokenizer(message: impl Into<String>) -> Self {
        Self::Tokenizer {
            message: message.into(),
        }
    }

    /// Returns true if this error is caused by user input (vs internal/system).
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidPath { .. } | Self::Validation { .. })
    }

    /// Returns true if retrying the operation might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, TokenomicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = TokenomicsError::config("bad value");
        assert_eq!(err.to_string(), "config error: bad value");
    }

    #[test]
    fn tokenizer_error_display() {
        let err = TokenomicsError::tokenizer("table failed to load");
        assert_eq!(err.to_string(), "tokenizer error: table failed to load");
    }

    #[test]
    fn user_error_classification() {
        assert!(TokenomicsError::invalid_path("/bad", "nope").is_user_error());
        assert!(TokenomicsError::validation("field", "bad").is_user_error());
        assert!(!TokenomicsError::config("oops").is_user_error());
        assert!(!TokenomicsError::tokenizer("x").is_user_error());
    }

    #[test]
    fn retryable_classification() {
        let io_err = TokenomicsError::io("read", io::Error::other("timeout"));
        assert!(io_err.is_retryable());
        assert!(!TokenomicsError::config("nope").is_retryable());
    }
}
