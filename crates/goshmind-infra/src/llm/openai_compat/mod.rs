//! Direct completion strategy over an OpenAI-compatible chat-completions API.
//!
//! One stateless request per exchange: system instruction plus the full turn
//! history, reply taken from the first choice. Uses [`async_openai`] for
//! type-safe request/response handling.

pub mod config;

use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest, FinishReason,
};
use async_openai::Client;
use backoff::ExponentialBackoffBuilder;
use secrecy::ExposeSecret;

use goshmind_core::llm::provider::LlmProvider;
use goshmind_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, StopReason, Usage,
};

use self::config::OpenAiCompatConfig;

/// Provider for any OpenAI-compatible chat-completions endpoint.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider from a configuration.
    ///
    /// Each call is a single attempt bounded by `request_timeout`. The
    /// client's built-in retry of 5xx and 429 responses is switched off, so
    /// failures surface to the caller immediately.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: OpenAiCompatConfig) -> Result<Self, LlmError> {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {e}")))?;

        // Zero elapsed-time budget: the first transient error is final.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry);

        Ok(Self {
            client,
            provider_name: config.provider_name,
            model: config.model,
        })
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::new();

        if let Some(ref system) = request.system {
            messages.push(system_message(system));
        }

        for msg in &request.messages {
            let oai_msg = match msg.role {
                MessageRole::System => system_message(&msg.content),
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            };
            messages.push(oai_msg);
        }

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        }
    }
}

fn system_message(content: &str) -> ChatCompletionRequestMessage {
    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
        content: ChatCompletionRequestSystemMessageContent::Text(content.to_string()),
        name: None,
    })
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        let first = response.choices.first();

        // An absent or null content is reported as empty; the relay decides
        // what an empty reply means.
        let content = first
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let stop_reason = first
            .and_then(|c| c.finish_reason.as_ref())
            .map(|fr| match fr {
                FinishReason::Length => StopReason::MaxTokens,
                FinishReason::ContentFilter => StopReason::ContentFilter,
                _ => StopReason::EndTurn,
            })
            .unwrap_or(StopReason::EndTurn);

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            stop_reason,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited {
                    retry_after_ms: None,
                }
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) if reqwest_err.is_timeout() => LlmError::Provider {
            message: format!("request timed out: {reqwest_err}"),
        },
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited {
                retry_after_ms: None,
            },
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goshmind_types::llm::Message;
    use secrecy::SecretString;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_with_timeout(base_url: &str, request_timeout: Duration) -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(OpenAiCompatConfig {
            provider_name: "openai".to_string(),
            base_url: base_url.to_string(),
            api_key: SecretString::from("sk-test"),
            model: "gpt-4o".to_string(),
            request_timeout,
        })
        .unwrap()
    }

    fn provider_at(base_url: &str) -> OpenAiCompatibleProvider {
        provider_with_timeout(base_url, Duration::from_secs(30))
    }

    fn hello_request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![Message {
                role: MessageRole::User,
                content: "Hello".to_string(),
            }],
            system: Some("Be helpful".to_string()),
            max_tokens: 1000,
            temperature: Some(0.7),
        }
    }

    fn completion_body(content: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o-2024-08-06",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop",
                "logprobs": null
            }],
            "usage": {
                "prompt_tokens": 12,
                "completion_tokens": 3,
                "total_tokens": 15
            }
        })
    }

    #[test]
    fn test_build_request_messages() {
        let provider = provider_at("https://api.openai.com/v1");
        let mut request = hello_request();
        request.messages.push(Message {
            role: MessageRole::Assistant,
            content: "Hi there!".to_string(),
        });

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.model, "gpt-4o");
        // 1 system + 2 conversation = 3 messages
        assert_eq!(oai_req.messages.len(), 3);
        assert!(matches!(
            oai_req.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert_eq!(oai_req.max_completion_tokens, Some(1000));
        assert_eq!(oai_req.temperature, Some(0.7));
    }

    #[test]
    fn test_build_request_without_system() {
        let provider = provider_at("https://api.openai.com/v1");
        let mut request = hello_request();
        request.system = None;

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.messages.len(), 1);
        assert!(matches!(
            oai_req.messages[0],
            ChatCompletionRequestMessage::User(_)
        ));
    }

    #[test]
    fn test_build_request_empty_model_uses_default() {
        let provider = provider_at("https://api.openai.com/v1");
        let mut request = hello_request();
        request.model = String::new();

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.model, "gpt-4o");
    }

    #[tokio::test]
    async fn test_complete_against_mock_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "Be helpful" },
                    { "role": "user", "content": "Hello" }
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body(serde_json::json!("Hi there"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_at(&server.uri());
        let response = provider.complete(&hello_request()).await.unwrap();

        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.content, "Hi there");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.input_tokens, 12);
        assert_eq!(response.usage.output_tokens, 3);
    }

    #[tokio::test]
    async fn test_complete_null_content_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body(serde_json::Value::Null)),
            )
            .mount(&server)
            .await;

        let provider = provider_at(&server.uri());
        let response = provider.complete(&hello_request()).await.unwrap();
        assert!(response.content.is_empty());
    }

    #[tokio::test]
    async fn test_complete_auth_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {
                    "message": "Incorrect API key provided: sk-test.",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            })))
            .mount(&server)
            .await;

        let provider = provider_at(&server.uri());
        let err = provider.complete(&hello_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_complete_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": {
                    "message": "The server had an error while processing your request.",
                    "type": "server_error",
                    "param": null,
                    "code": null
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_at(&server.uri());
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            provider.complete(&hello_request()),
        )
        .await
        .expect("a failed call should return without retrying");

        assert!(matches!(result, Err(LlmError::Provider { .. })));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_complete_rate_limit_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {
                    "message": "Rate limit reached for gpt-4o.",
                    "type": "rate_limit_error",
                    "param": null,
                    "code": "rate_limit_exceeded"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_at(&server.uri());
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            provider.complete(&hello_request()),
        )
        .await
        .expect("a rate-limited call should return without retrying");

        assert!(matches!(result, Err(LlmError::RateLimited { .. })));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_complete_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body(serde_json::json!("too late")))
                    .set_delay(Duration::from_secs(6)),
            )
            .mount(&server)
            .await;

        let provider = provider_with_timeout(&server.uri(), Duration::from_secs(1));
        let started = std::time::Instant::now();
        let result = provider.complete(&hello_request()).await;

        assert!(started.elapsed() < Duration::from_secs(5));
        match result {
            Err(LlmError::Provider { message }) => assert!(message.contains("timed out")),
            Err(other) => panic!("Expected Provider timeout, got: {other}"),
            Ok(resp) => panic!("Expected timeout, got reply: {}", resp.content),
        }
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::RateLimited { .. }));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }
}
