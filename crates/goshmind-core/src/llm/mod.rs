//! Upstream LLM provider abstractions.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: object-safe wrapper for dynamic dispatch
//! - `ThreadRunProvider`: bounded thread/run polling over a `ThreadRunBackend`

pub mod box_provider;
pub mod provider;
pub mod thread_run;
