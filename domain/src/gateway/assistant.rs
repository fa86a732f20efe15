//! Care assistant API client.
//!
//! HTTP client for the external text-generation provider that answers
//! free-form care questions. The provider exposes a single endpoint: a JSON
//! `POST {base_url}/ask` taking `{ "question": ... }` and returning
//! `{ "answer": ... }`, with no authentication.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use async_trait::async_trait;
use care_ai::traits::assistant::Provider;
use care_ai::{Answer, AskRequest, Error as CareAiError};
use log::*;
use service::config::Config;
use std::time::Duration;

/// HTTP client for the configured care assistant provider.
pub struct AssistantClient {
    client: reqwest::Client,
    base_url: String,
}

impl AssistantClient {
    /// Create a new assistant client from the service configuration. Fails
    /// with a Config error when no assistant base URL is set.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let base_url = config.assistant_base_url().ok_or_else(|| {
            warn!("Failed to get assistant base URL from config");
            Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
            }
        })?;

        // Every request shares one deadline; there is no retry or backoff.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.assistant_timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Provider for AssistantClient {
    async fn ask(&self, question: &str) -> Result<Answer, CareAiError> {
        let url = format!("{}/ask", self.base_url);

        debug!("Asking care assistant, question length: {}", question.len());

        let response = self
            .client
            .post(&url)
            .json(&AskRequest::new(question))
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach care assistant: {e:?}");
                if e.is_timeout() {
                    CareAiError::Timeout(e.to_string())
                } else {
                    CareAiError::Network(e.to_string())
                }
            })?;

        if response.status().is_success() {
            let answer: Answer = response.json().await.map_err(|e| {
                warn!("Failed to parse care assistant response: {e:?}");
                CareAiError::Deserialization(e.to_string())
            })?;
            debug!("Care assistant answered with {} byte(s)", answer.answer.len());
            Ok(answer)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Care assistant API: {status} - {error_text}");
            Err(CareAiError::Provider(format!("{status}: {error_text}")))
        }
    }

    fn provider_id(&self) -> &str {
        "care_assistant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[tokio::test]
    #[serial]
    async fn test_assistant_client_creation_fails_without_base_url() {
        env::remove_var("ASSISTANT_BASE_URL");

        let config = Config::default();
        let result = AssistantClient::new(&config);

        assert!(result.is_err());
        if let Err(e) = result {
            match e.error_kind {
                DomainErrorKind::Internal(InternalErrorKind::Config) => {}
                _ => panic!("Expected Config error, got: {:?}", e.error_kind),
            }
        }
    }

    #[test]
    fn test_provider_id_is_lowercase_alphanumeric_with_underscores() {
        let client = AssistantClient {
            client: reqwest::Client::new(),
            base_url: "http://localhost".to_string(),
        };

        let id = client.provider_id();
        assert!(id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    }

    #[test]
    fn test_ask_request_serialization() {
        let request = AskRequest::new("What does my blood pressure trend mean?");

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"question":"What does my blood pressure trend mean?"}"#
        );
    }
}
