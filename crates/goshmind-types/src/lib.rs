//! Shared domain types for the GoshMind chat relay.
//!
//! Sessions, turns, relay request/response shapes, upstream LLM types,
//! configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
