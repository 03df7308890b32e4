//! HTTP layer for GoshMind.
//!
//! Axum-based JSON API under `/api/`, a health probe, and optional static
//! serving of the compiled client bundle.

pub mod error;
pub mod handlers;
pub mod router;
