//! Agents that turn a complaint into a [`Transcript`].
//!
//! The driver only depends on [`AgentRunner`]; which tools get called, how
//! many times and in what order is decided by whatever sits behind it.

/// The persona-driven complaint agent.
pub mod complaint;

use crate::llm::Transcript;
use crate::types::Result;
use async_trait::async_trait;

pub use complaint::{ComplaintAgent, AGENT_NAME, SYSTEM_PROMPT};

/// Base trait for anything that can answer a complaint
#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Run one complaint to completion
    async fn run(&self, complaint: &str) -> Result<Transcript>;

    /// Get the agent's name
    fn name(&self) -> &str;
}
