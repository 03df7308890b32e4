//! OpenTelemetry GenAI Semantic Convention attribute constants.
//!
//! Field names for the spans wrapping each upstream exchange. Span naming
//! convention: `"{operation} {model}"` (e.g., `"chat gpt-4o"`).

// --- Required attributes ---

/// The name of the operation being performed (e.g., "chat").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider (e.g., "openai").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

// --- Recommended attributes ---

/// The model ID requested (e.g., "gpt-4o").
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

/// The number of input tokens consumed.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of output tokens generated.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The unique response ID from the provider (completion id or run id).
pub const GEN_AI_RESPONSE_ID: &str = "gen_ai.response.id";

/// Thread identifier for the thread/run strategy.
pub const GEN_AI_CONVERSATION_ID: &str = "gen_ai.conversation.id";

// --- Operation name values ---

/// Standard chat completion operation.
pub const OP_CHAT: &str = "chat";

// --- Provider name values ---

/// Direct chat-completions provider identifier.
pub const PROVIDER_OPENAI: &str = "openai";

/// Assistants thread/run provider identifier.
pub const PROVIDER_OPENAI_ASSISTANTS: &str = "openai_assistants";
