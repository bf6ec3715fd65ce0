//! Groq adapter
//!
//! Implements LlmGateway over Groq's OpenAI-compatible chat completions API.

pub mod gateway;
pub mod protocol;
pub mod session;
