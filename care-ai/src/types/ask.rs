//! Types for question/answer exchanges.

use serde::{Deserialize, Serialize};

/// A single free-text question for the assistant.
///
/// This is the entire upstream request body: no session, no history, no
/// attachments. Each ask stands alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// The assistant's answer text, displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}
