//! Remote completion provider for kindabot.
//!
//! Wraps rig-core's OpenAI client behind the [`CompletionBackend`] trait so
//! the dispatcher never sees provider-specific types, and exposes the
//! [`connect`] factory that decides whether a remote client exists at all.

mod backend;
mod connect;
mod openai;

pub use backend::{CompletionBackend, CompletionRequest, RemoteError};
pub use connect::{connect, ClientAvailability, RemoteSettings};
#[cfg(test)]
pub use connect::connect_with;
