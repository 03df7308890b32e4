//! Observability for GoshMind: tracing subscriber setup and OpenTelemetry
//! GenAI attribute names shared by every crate that instruments upstream calls.

pub mod genai_attrs;
pub mod tracing_setup;
