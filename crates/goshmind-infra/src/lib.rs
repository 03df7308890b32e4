//! Infrastructure layer for GoshMind.
//!
//! Contains implementations of the ports defined in `goshmind-core`: the
//! in-memory session store, the direct chat-completions provider, the
//! Assistants thread/run backend, plus credential and config loading.

pub mod config;
pub mod credentials;
pub mod llm;
pub mod session;
