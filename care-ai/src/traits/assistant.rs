//! Question assistant provider trait.

use crate::types::ask::Answer;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for question-answering text services.
///
/// Implementations send one question and return one answer body. There is no
/// conversation state: every call is independent, which is what lets callers
/// substitute a fixed fallback answer per request instead of tracking which
/// in-flight response "wins".
#[async_trait]
pub trait Provider: Send + Sync {
    /// Ask a single question and wait for the full answer text.
    ///
    /// Implementations must enforce their own request timeout so a stalled
    /// upstream cannot hold the caller indefinitely.
    async fn ask(&self, question: &str) -> std::result::Result<Answer, Error>;

    /// Return unique identifier for this provider (e.g., "carelink_assistant").
    ///
    /// Used in logs to attribute failures. Must be lowercase, alphanumeric
    /// with underscores only.
    fn provider_id(&self) -> &str;
}
