//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Records Service Errors
    // ─────────────────────────────────────────────────────────────
    /// The service answered with an error body. `message` is the
    /// service-provided text when present, else a generic description.
    #[error("Records service error: {message}")]
    Service { message: String },

    /// The request never produced a service answer (connect, TLS, timeout).
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Invalid service endpoint: {url}")]
    InvalidEndpoint { url: String },

    /// The service answered 2xx but the payload did not match the contract.
    #[error("Malformed service response: {message}")]
    MalformedResponse { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// No account identifier from either the CLI or the config file.
    #[error("No account configured. Pass --account or set records.account_id in config.")]
    NoAccount,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The text shown to the user in an error toast.
    ///
    /// Service errors carry the service-provided message verbatim (matching
    /// the contract that a `{message}` body, when present, is surfaced);
    /// everything else falls back to the Display form.
    pub fn user_message(&self) -> String {
        match self {
            Error::Service { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if this is a recoverable error (UI stays up, state degrades)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Service { .. } | Error::Transport { .. } | Error::MalformedResponse { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::InvalidEndpoint { .. } | Error::NoAccount)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
