//! Prompt domain
//!
//! Templates for the specialist and team-synthesis prompts.

mod template;

pub use template::PromptTemplate;
