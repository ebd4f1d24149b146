//! Assistant Module - Chat Forwarding
//!
//! Thin boundary to an external text-generation backend. Not part of the
//! scoring path: it holds no scoring state and never fails the caller.

pub mod client;
pub mod fallback;
pub mod prompt;

pub use client::{ChatConfig, ChatError, ChatForwarder, ChatReply, ChatRequest, ChatStatus, OFFLINE_MESSAGE};
pub use fallback::FallbackChain;
