//! Thread/run backend over the OpenAI Assistants API (v2).
//!
//! Implements [`ThreadRunBackend`]; the polling loop itself lives in
//! `goshmind_core::llm::thread_run::ThreadRunProvider`.

pub mod types;

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;

use goshmind_core::llm::thread_run::{RunState, ThreadRunBackend};
use goshmind_observe::genai_attrs::PROVIDER_OPENAI_ASSISTANTS;
use goshmind_types::llm::{LlmError, Message, MessageRole};

use self::types::{
    CreateRunRequest, CreateThreadRequest, MessageList, ObjectRef, RunObject, ThreadMessageInput,
};

/// Assistants API backend.
///
/// # API Key Security
///
/// The API key and assistant id are stored as [`SecretString`] and are only
/// exposed when building requests. This type does not implement Debug.
pub struct OpenAiAssistantsBackend {
    client: reqwest::Client,
    api_key: SecretString,
    assistant_id: SecretString,
    base_url: String,
}

impl OpenAiAssistantsBackend {
    /// Beta header value required by the Assistants endpoints.
    const BETA_HEADER: &'static str = "assistants=v2";

    /// Create a backend against `base_url` (e.g., `https://api.openai.com/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Configuration`] if the HTTP client cannot be built.
    pub fn new(
        api_key: SecretString,
        assistant_id: SecretString,
        base_url: &str,
        request_timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            assistant_id,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(self.api_key.expose_secret())
            .header("OpenAI-Beta", Self::BETA_HEADER)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, LlmError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.authorized(self.client.post(self.url(path))).json(body);
        Self::send(request).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, LlmError>
    where
        T: DeserializeOwned,
    {
        let request = self.authorized(self.client.get(self.url(path)));
        Self::send(request).await
    }

    async fn send<T>(request: reqwest::RequestBuilder) -> Result<T, LlmError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| LlmError::Provider {
            message: format!("HTTP request failed: {e}"),
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, error_body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))
    }
}

fn map_status_error(status: StatusCode, body: String) -> LlmError {
    match status.as_u16() {
        401 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited {
            retry_after_ms: None,
        },
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {body}"),
        },
    }
}

fn thread_input(message: &Message) -> Option<ThreadMessageInput> {
    let role = match message.role {
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
        // Threads only accept user and assistant messages.
        MessageRole::System => return None,
    };
    Some(ThreadMessageInput {
        role: role.to_string(),
        content: message.content.clone(),
    })
}

impl ThreadRunBackend for OpenAiAssistantsBackend {
    fn name(&self) -> &str {
        PROVIDER_OPENAI_ASSISTANTS
    }

    async fn create_thread(&self, history: &[Message]) -> Result<String, LlmError> {
        let body = CreateThreadRequest {
            messages: history.iter().filter_map(thread_input).collect(),
        };
        let thread: ObjectRef = self.post_json("/threads", &body).await?;
        Ok(thread.id)
    }

    async fn add_user_message(&self, thread_id: &str, content: &str) -> Result<(), LlmError> {
        let body = ThreadMessageInput {
            role: "user".to_string(),
            content: content.to_string(),
        };
        let _: ObjectRef = self
            .post_json(&format!("/threads/{thread_id}/messages"), &body)
            .await?;
        Ok(())
    }

    async fn start_run(&self, thread_id: &str) -> Result<String, LlmError> {
        let body = CreateRunRequest {
            assistant_id: self.assistant_id.expose_secret().to_string(),
        };
        let run: RunObject = self
            .post_json(&format!("/threads/{thread_id}/runs"), &body)
            .await?;
        Ok(run.id)
    }

    async fn run_state(&self, thread_id: &str, run_id: &str) -> Result<RunState, LlmError> {
        let run: RunObject = self
            .get_json(&format!("/threads/{thread_id}/runs/{run_id}"))
            .await?;
        Ok(RunState {
            status: run.status,
            last_error: run.last_error.map(|e| format!("{}: {}", e.code, e.message)),
        })
    }

    async fn latest_assistant_message(
        &self,
        thread_id: &str,
        run_id: &str,
    ) -> Result<Option<String>, LlmError> {
        let list: MessageList = self
            .get_json(&format!(
                "/threads/{thread_id}/messages?order=desc&limit=20&run_id={run_id}"
            ))
            .await?;
        // Seeded turns carry no run id, so they never match.
        Ok(list
            .data
            .iter()
            .find(|m| m.role == "assistant" && m.run_id.as_deref() == Some(run_id))
            .map(|m| m.text()))
    }
}
