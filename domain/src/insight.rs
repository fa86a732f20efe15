//! Insight reads and the assistant ask operation.
//!
//! Insights themselves are static records served from the fixture store. The
//! one live operation is `ask_assistant`: it forwards a free-form question to
//! the configured external provider and always comes back with something to
//! display. Provider failures of any kind (unconfigured, network, timeout,
//! provider error, malformed body) are logged with their classified error
//! kind and replaced by [`FALLBACK_ANSWER`].

use crate::error::Error;
use crate::gateway::assistant::AssistantClient;
use care_ai::traits::assistant::Provider;
use care_ai::Answer;
use log::*;
use service::config::Config;

pub use entity_api::insight::{find_all, find_by_id};

/// The canned answer shown whenever the assistant cannot produce a real one.
pub const FALLBACK_ANSWER: &str =
    "Sorry, the care assistant is unavailable right now. Please try again in a few minutes.";

/// Asks the given provider, substituting the fallback answer when the ask
/// fails for any reason. The classified error never surfaces to the caller.
pub async fn answer_with(provider: &dyn Provider, question: &str) -> Answer {
    match provider.ask(question).await {
        Ok(answer) => answer,
        Err(e) => {
            let error: Error = e.into();
            warn!(
                "Assistant provider '{}' failed, serving fallback answer: {error:?}",
                provider.provider_id()
            );
            Answer {
                answer: FALLBACK_ANSWER.to_string(),
            }
        }
    }
}

/// Builds the configured assistant client and forwards `question` to it. A
/// missing assistant configuration behaves like any other provider failure
/// and yields the fallback answer.
pub async fn ask_assistant(config: &Config, question: &str) -> Answer {
    match AssistantClient::new(config) {
        Ok(client) => answer_with(&client, question).await,
        Err(e) => {
            warn!("Assistant client unavailable, serving fallback answer: {e:?}");
            Answer {
                answer: FALLBACK_ANSWER.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_ai::Error as CareAiError;
    use mockall::mock;
    use mockito::{Server, ServerOpts};
    use serial_test::serial;
    use std::env;

    mock! {
        Assistant {}

        #[async_trait::async_trait]
        impl Provider for Assistant {
            async fn ask(&self, question: &str) -> Result<Answer, CareAiError>;
            fn provider_id(&self) -> &str;
        }
    }

    // Use a fresh (non-pooled) server per test: a pooled server recycled
    // while its single runtime thread is still blocked in a slow chunked-body
    // handler would stall the next test's requests.
    async fn setup_test_server() -> Server {
        Server::new_with_opts_async(ServerOpts::default()).await
    }

    fn create_config_with_mock(server_url: &str) -> Config {
        env::set_var("ASSISTANT_BASE_URL", server_url);
        env::set_var("ASSISTANT_TIMEOUT_SECS", "1");
        Config::default()
    }

    /// Helper struct to manage environment variables in tests
    struct EnvGuard {
        saved_vars: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[&str]) -> Self {
            let saved_vars = vars
                .iter()
                .map(|var| (var.to_string(), env::var(var).ok()))
                .collect();
            EnvGuard { saved_vars }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // Restore all saved environment variables
            for (key, value) in &self.saved_vars {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[tokio::test]
    async fn answer_with_returns_the_provider_answer_verbatim() {
        let mut provider = MockAssistant::new();
        provider.expect_ask().returning(|_| {
            Ok(Answer {
                answer: "Your readings look steady this week.".to_string(),
            })
        });

        let answer = answer_with(&provider, "How are my readings?").await;

        assert_eq!(answer.answer, "Your readings look steady this week.");
    }

    #[tokio::test]
    async fn answer_with_serves_fallback_on_provider_error() {
        let mut provider = MockAssistant::new();
        provider
            .expect_ask()
            .returning(|_| Err(CareAiError::Network("connection refused".to_string())));
        provider.expect_provider_id().return_const("test".to_string());

        let answer = answer_with(&provider, "How are my readings?").await;

        assert_eq!(answer.answer, FALLBACK_ANSWER);
    }

    #[tokio::test]
    #[serial]
    async fn test_ask_assistant_success() {
        let _guard = EnvGuard::new(&["ASSISTANT_BASE_URL", "ASSISTANT_TIMEOUT_SECS"]);
        let mut server = setup_test_server().await;
        let config = create_config_with_mock(&server.url());

        let _mock = server
            .mock("POST", "/ask")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "question": "What does a snoozed task mean?"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"answer": "A snoozed task is paused until you resume it."}"#)
            .create_async()
            .await;

        let answer = ask_assistant(&config, "What does a snoozed task mean?").await;

        assert_eq!(
            answer.answer,
            "A snoozed task is paused until you resume it."
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_ask_assistant_serves_fallback_on_server_error() {
        let _guard = EnvGuard::new(&["ASSISTANT_BASE_URL", "ASSISTANT_TIMEOUT_SECS"]);
        let mut server = setup_test_server().await;
        let config = create_config_with_mock(&server.url());

        let _mock = server
            .mock("POST", "/ask")
            .with_status(500)
            .with_body(r#"{"message": "model overloaded"}"#)
            .create_async()
            .await;

        let answer = ask_assistant(&config, "Should I adjust my dose?").await;

        assert_eq!(answer.answer, FALLBACK_ANSWER);
    }

    #[tokio::test]
    #[serial]
    async fn test_ask_assistant_serves_fallback_on_malformed_body() {
        let _guard = EnvGuard::new(&["ASSISTANT_BASE_URL", "ASSISTANT_TIMEOUT_SECS"]);
        let mut server = setup_test_server().await;
        let config = create_config_with_mock(&server.url());

        let _mock = server
            .mock("POST", "/ask")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"reply": "wrong field name"}"#)
            .create_async()
            .await;

        let answer = ask_assistant(&config, "Should I adjust my dose?").await;

        assert_eq!(answer.answer, FALLBACK_ANSWER);
    }

    #[tokio::test]
    #[serial]
    async fn test_ask_assistant_serves_fallback_on_timeout() {
        let _guard = EnvGuard::new(&["ASSISTANT_BASE_URL", "ASSISTANT_TIMEOUT_SECS"]);
        let mut server = setup_test_server().await;
        let config = create_config_with_mock(&server.url());

        // Responds after the 1s client deadline configured above
        let _mock = server
            .mock("POST", "/ask")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(std::time::Duration::from_secs(3));
                w.write_all(br#"{"answer": "too late"}"#)
            })
            .expect_at_most(1)
            .create_async()
            .await;

        let answer = ask_assistant(&config, "Should I adjust my dose?").await;

        assert_eq!(answer.answer, FALLBACK_ANSWER);
    }

    #[tokio::test]
    #[serial]
    async fn test_ask_assistant_serves_fallback_when_unconfigured() {
        let _guard = EnvGuard::new(&["ASSISTANT_BASE_URL", "ASSISTANT_TIMEOUT_SECS"]);
        env::remove_var("ASSISTANT_BASE_URL");

        let config = Config::default();
        assert!(
            config.assistant_base_url().is_none(),
            "Assistant base URL should be None"
        );

        let answer = ask_assistant(&config, "Should I adjust my dose?").await;

        assert_eq!(answer.answer, FALLBACK_ANSWER);
    }
}
