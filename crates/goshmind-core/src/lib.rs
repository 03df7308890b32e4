//! Chat relay service and port traits for GoshMind.
//!
//! This crate defines the "ports" (`SessionStore`, `LlmProvider`,
//! `ThreadRunBackend`) that the infrastructure layer implements. It depends
//! only on `goshmind-types` and `goshmind-observe`, never on `goshmind-infra`
//! or any network crate.

pub mod chat;
pub mod llm;
