//! LLM Client and Tool-Calling Loop
//!
//! - [`LLMClient`] - The trait a model backend implements
//! - [`OpenAIClient`] - OpenAI-compatible chat completions over HTTP
//! - [`ToolCoordinator`] - Runs the multi-turn tool calling loop and
//!   returns a [`Transcript`]
//!
//! # Example
//!
//! ```ignore
//! use bureau::llm::{OpenAIClient, ToolCoordinator, ToolCallingConfig};
//!
//! let client = OpenAIClient::new(api_key, api_base, "gpt-4o-mini".into(), 0.7);
//! let coordinator = ToolCoordinator::new(Box::new(client), registry, ToolCallingConfig::default());
//! let transcript = coordinator.execute(Some(system_prompt), "Complaint: ...").await?;
//! println!("{}", transcript.content);
//! ```

/// Core LLM client trait and response types.
pub mod client;
/// Multi-turn tool calling loop.
pub mod coordinator;
/// OpenAI-compatible chat completions client.
pub mod openai;

pub use client::{LLMClient, LLMResponse, TokenUsage};
pub use coordinator::{
    ConversationMessage, MessageRole, ToolCallRecord, ToolCallingConfig,
    ToolCoordinator, Transcript,
};
pub use openai::OpenAIClient;
