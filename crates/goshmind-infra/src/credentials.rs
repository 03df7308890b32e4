//! Upstream credentials read from the environment.
//!
//! Secrets never live in `goshmind.toml`. The API key and assistant id are
//! wrapped in [`SecretString`] as soon as they are read and are only exposed
//! when building request headers.

use secrecy::SecretString;

use goshmind_types::llm::LlmError;

/// Primary env var holding the upstream API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Legacy env var name accepted when [`API_KEY_VAR`] is unset.
pub const API_KEY_FALLBACK_VAR: &str = "OPENAI_API_KEY_ENV_VAR";

/// Env var naming the remote assistant for the thread/run strategy.
pub const ASSISTANT_ID_VAR: &str = "OPENAI_ASSISTANT_ID";

/// Resolved upstream credentials.
///
/// Does NOT derive Debug; see [`UpstreamCredentials::redacted`] for a
/// printable summary.
#[derive(Clone)]
pub struct UpstreamCredentials {
    pub api_key: SecretString,
    pub assistant_id: Option<SecretString>,
}

impl UpstreamCredentials {
    pub fn new(api_key: impl Into<String>, assistant_id: Option<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            assistant_id: assistant_id.map(SecretString::from),
        }
    }

    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Configuration`] if no API key is set.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = present(API_KEY_VAR)
            .or_else(|| present(API_KEY_FALLBACK_VAR))
            .ok_or_else(|| {
                LlmError::Configuration(format!(
                    "no upstream API key: set {API_KEY_VAR} (or {API_KEY_FALLBACK_VAR})"
                ))
            })?;

        Ok(Self::new(api_key, present(ASSISTANT_ID_VAR)))
    }

    /// Human-readable summary with secret values masked.
    pub fn redacted(&self) -> String {
        let assistant = if self.assistant_id.is_some() {
            "set"
        } else {
            "unset"
        };
        format!("api_key=[REDACTED] assistant_id={assistant}")
    }
}
