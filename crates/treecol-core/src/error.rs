//! Unified error types for Treecol.
//!
//! All crates map their internal errors into [`ColumnError`] for consistent
//! propagation through the ? operator. Most registry failures are handled
//! locally (logged, then degraded or skipped); only host-collaborator
//! failures ever reach a caller of `register`/`unregister`.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A conflicting registration was attempted (duplicate column key).
    Conflict,
    /// A field or render hook failed during dispatch.
    HookFailure,
    /// The host view is not constructed yet.
    ViewNotReady,
    /// The host preference store failed.
    Preferences,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A host collaborator failed.
    Host,
    /// A configuration error occurred.
    Configuration,
    /// An internal toolkit error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict => write!(f, "CONFLICT"),
            Self::HookFailure => write!(f, "HOOK_FAILURE"),
            Self::ViewNotReady => write!(f, "VIEW_NOT_READY"),
            Self::Preferences => write!(f, "PREFERENCES"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Host => write!(f, "HOST"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified error type used throughout Treecol.
///
/// Collaborator-specific errors are mapped into `ColumnError` using `From`
/// impls or explicit `.map_err()` calls, so every crate shares one error
/// vocabulary at the boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ColumnError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ColumnError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a hook-failure error.
    pub fn hook_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HookFailure, message)
    }

    /// Create a view-not-ready error.
    pub fn view_not_ready(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ViewNotReady, message)
    }

    /// Create a preference-store error.
    pub fn preferences(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Preferences, message)
    }

    /// Create a host-collaborator error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Host, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for ColumnError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for ColumnError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for ColumnError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Host, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for ColumnError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
