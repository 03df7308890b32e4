//! Conversation sessions and the chat relay.
//!
//! - `SessionStore`: port for keyed session storage
//! - `SessionLocks`: per-session serialization of exchanges
//! - `ChatRelay`: one exchange end to end (validate, resolve session, call
//!   upstream, persist both turns)

pub mod locks;
pub mod relay;
pub mod store;
