//! Error types for care assistant operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// All provider implementations should map their native errors to these
/// variants, preserving context while maintaining a provider-agnostic
/// interface. Callers decide whether a variant is worth surfacing; the
/// insights screen substitutes a fixed fallback answer for every one of them.
#[derive(Debug)]
pub enum Error {
    /// Network connectivity issues, DNS failures, or connection resets.
    /// These errors are typically transient.
    Network(String),

    /// Operation exceeded the configured timeout period. The request may
    /// still complete upstream; the result is discarded either way.
    Timeout(String),

    /// Invalid parameters or missing configuration (e.g. no endpoint URL).
    /// These errors indicate a deployment problem, not a transient failure.
    Configuration(String),

    /// Provider answered with a non-success status or a provider-level
    /// failure message.
    Provider(String),

    /// Provider answered 2xx but the body did not match the expected
    /// answer shape.
    Deserialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
