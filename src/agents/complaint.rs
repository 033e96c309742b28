use crate::agents::AgentRunner;
use crate::llm::{LLMClient, ToolCallingConfig, ToolCoordinator, Transcript};
use crate::tools::{SharedRng, ToolRegistry};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Name the bureau agent goes by.
pub const AGENT_NAME: &str = "becma-chaos-mode";

/// Persona and behavioural goal given to the model.
pub const SYSTEM_PROMPT: &str = "You are Becma's Chaos Mode at the Downside-Up Complaint Bureau.\n\
Goal: resolve complaints creatively and entertainingly.\n\
Use tools freely in any order. You may call multiple tools.\n\
Always end with a clear, playful 'Resolution' for the complainant.";

/// Agent that answers complaints with the four bureau tools at hand.
pub struct ComplaintAgent {
    coordinator: ToolCoordinator,
}

impl ComplaintAgent {
    /// Agent with the four bureau tools, sharing `rng`
    pub fn new(client: Box<dyn LLMClient>, rng: SharedRng, config: ToolCallingConfig) -> Self {
        let registry = Arc::new(ToolRegistry::with_bureau_tools(rng));
        Self {
            coordinator: ToolCoordinator::new(client, registry, config),
        }
    }

    /// User message sent for a complaint
    pub fn user_message(complaint: &str) -> String {
        format!("Complaint: {}", complaint)
    }
}

#[async_trait]
impl AgentRunner for ComplaintAgent {
    async fn run(&self, complaint: &str) -> Result<Transcript> {
        info!(agent = AGENT_NAME, "Handling complaint");

        let transcript = self
            .coordinator
            .execute(Some(SYSTEM_PROMPT), &Self::user_message(complaint))
            .await?;

        debug!(
            agent = AGENT_NAME,
            iterations = transcript.iterations,
            tool_calls = transcript.tool_calls.len(),
            finish_reason = %transcript.finish_reason,
            total_tokens = transcript.total_usage.total_tokens,
            "Complaint handled"
        );

        Ok(transcript)
    }

    fn name(&self) -> &str {
        AGENT_NAME
    }
}
