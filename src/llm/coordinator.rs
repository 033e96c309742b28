//! Generic Tool Coordinator for Multi-Turn Tool Calling
//!
//! This module provides a provider-agnostic `ToolCoordinator` that works with any
//! `LLMClient` implementation. It handles the complete tool calling loop:
//!
//! 1. Send the conversation with available tools to the LLM
//! 2. If the model requests tool calls, execute them
//! 3. Send tool results back to the model
//! 4. Repeat until the model answers without tool calls
//!
//! The outcome of one run is a [`Transcript`]: every message exchanged, in
//! order, with each tool result tagged by the tool it came from, ending in
//! the model's final answer. How many tools the model calls, and in which
//! order, is entirely up to the model. A run that is still calling tools
//! after `max_iterations` round-trips is an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use bureau::llm::{ToolCoordinator, ToolCallingConfig};
//!
//! let coordinator = ToolCoordinator::new(client, registry, ToolCallingConfig::default());
//! let transcript = coordinator.execute(Some("You are a helpful assistant."), "Complaint: ...").await?;
//!
//! println!("Response: {}", transcript.content);
//! println!("Tool calls made: {}", transcript.tool_calls.len());
//! ```

use crate::llm::client::{LLMClient, TokenUsage};
use crate::tools::registry::ToolRegistry;
use crate::types::{AppError, Result, ToolCall};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, warn};

/// Configuration for tool calling coordination behavior.
#[derive(Debug, Clone)]
pub struct ToolCallingConfig {
    /// Maximum number of LLM iterations (not tool calls) before stopping.
    /// Each iteration is one round-trip to the LLM.
    pub max_iterations: usize,

    /// Whether to execute the tool calls of one turn concurrently.
    /// Results are recorded in request order either way.
    pub parallel_execution: bool,

    /// Timeout for individual tool execution.
    pub tool_timeout: Duration,
}

impl Default for ToolCallingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            parallel_execution: false,
            tool_timeout: Duration::from_secs(30),
        }
    }
}

/// Record of a single tool call execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRecord {
    /// Unique identifier for this tool call (from the LLM).
    pub id: String,
    /// Name of the tool that was called.
    pub name: String,
    /// Arguments passed to the tool.
    pub arguments: serde_json::Value,
    /// Result returned by the tool (or error object).
    pub result: serde_json::Value,
    /// Whether the tool execution was successful.
    pub success: bool,
    /// Time taken to execute the tool in milliseconds.
    pub duration_ms: u64,
    /// Error message if the tool failed.
    pub error: Option<String>,
}

/// A message in a tool-calling conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The text content of the message.
    pub content: String,
    /// Tool calls requested by the assistant (only for Assistant role).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    /// Call this message answers (only for Tool role).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Name of the tool that produced this message (only for Tool role).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Role of a message sender in a tool-calling conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions.
    System,
    /// User message.
    User,
    /// Assistant response.
    Assistant,
    /// Tool execution result.
    Tool,
}

impl MessageRole {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::Tool => "tool",
        }
    }
}

impl ConversationMessage {
    fn plain(role: MessageRole, content: String) -> Self {
        Self {
            role,
            content,
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(MessageRole::System, content.into())
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(MessageRole::User, content.into())
    }

    /// Create an assistant message with optional tool calls.
    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls,
            ..Self::plain(MessageRole::Assistant, content.into())
        }
    }

    /// Create a tool result message.
    ///
    /// String results are passed through verbatim; anything else is sent as JSON.
    pub fn tool_result(
        tool_call_id: impl Into<String>,
        name: impl Into<String>,
        result: &serde_json::Value,
    ) -> Self {
        let content = match result {
            serde_json::Value::String(text) => text.clone(),
            other => serde_json::to_string(other).unwrap_or_else(|_| "{}".to_string()),
        };
        Self {
            tool_call_id: Some(tool_call_id.into()),
            name: Some(name.into()),
            ..Self::plain(MessageRole::Tool, content)
        }
    }
}

/// Everything that happened during one tool coordination session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Final text response from the model.
    pub content: String,

    /// All tool calls made during the session.
    pub tool_calls: Vec<ToolCallRecord>,

    /// Number of LLM iterations (round-trips) performed.
    pub iterations: usize,

    /// Finish reason the model reported for its final answer.
    pub finish_reason: String,

    /// Accumulated token usage across all iterations.
    pub total_usage: TokenUsage,

    /// Full message history, in order.
    pub messages: Vec<ConversationMessage>,
}

impl Transcript {
    /// Tool result messages, in the order the tools ran.
    pub fn tool_invocations(&self) -> impl Iterator<Item = &ConversationMessage> {
        self.messages.iter().filter(|m| m.role == MessageRole::Tool)
    }

    /// The last message of the conversation, the model's answer.
    pub fn final_message(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }
}

/// Generic tool coordinator that works with any LLMClient.
pub struct ToolCoordinator {
    client: Box<dyn LLMClient>,
    registry: Arc<ToolRegistry>,
    config: ToolCallingConfig,
}

impl ToolCoordinator {
    /// Create a new ToolCoordinator with the given client, registry, and config.
    pub fn new(
        client: Box<dyn LLMClient>,
        registry: Arc<ToolRegistry>,
        config: ToolCallingConfig,
    ) -> Self {
        Self {
            client,
            registry,
            config,
        }
    }

    /// Create a new ToolCoordinator with default configuration.
    pub fn with_defaults(client: Box<dyn LLMClient>, registry: Arc<ToolRegistry>) -> Self {
        Self::new(client, registry, ToolCallingConfig::default())
    }

    /// Execute a complete tool-calling conversation loop.
    ///
    /// A model request for a tool the registry does not know is answered with
    /// an error tool result under the requested name, and the loop carries on.
    /// Errors from the LLM itself end the run, as does reaching
    /// `max_iterations` without a final answer.
    pub async fn execute(&self, system: Option<&str>, prompt: &str) -> Result<Transcript> {
        let tools = self.registry.get_tool_definitions();
        let mut messages: Vec<ConversationMessage> = Vec::new();
        let mut all_tool_calls: Vec<ToolCallRecord> = Vec::new();
        let mut total_usage = TokenUsage::default();

        if let Some(sys) = system {
            messages.push(ConversationMessage::system(sys));
        }
        messages.push(ConversationMessage::user(prompt));

        for iteration in 0..self.config.max_iterations {
            let response = self
                .client
                .generate_with_tools_and_history(&messages, &tools)
                .await?;

            debug!(
                model = self.client.model_name(),
                iteration,
                tool_calls = response.tool_calls.len(),
                finish_reason = %response.finish_reason,
                "LLM round-trip complete"
            );

            if let Some(usage) = response.usage {
                total_usage = total_usage.add(usage);
            }

            messages.push(ConversationMessage::assistant(
                &response.content,
                response.tool_calls.clone(),
            ));

            if response.tool_calls.is_empty() {
                return Ok(Transcript {
                    content: response.content,
                    tool_calls: all_tool_calls,
                    iterations: iteration + 1,
                    finish_reason: response.finish_reason,
                    total_usage,
                    messages,
                });
            }

            for record in self.execute_tool_calls(&response.tool_calls).await {
                messages.push(ConversationMessage::tool_result(
                    &record.id,
                    &record.name,
                    &record.result,
                ));
                all_tool_calls.push(record);
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            tool_calls = all_tool_calls.len(),
            "Tool calling loop hit the iteration limit"
        );

        Err(AppError::LLM(format!(
            "tool loop hit max_iterations ({}) without a final answer",
            self.config.max_iterations
        )))
    }

    /// Execute tool calls, either in parallel or sequentially based on config.
    async fn execute_tool_calls(&self, calls: &[ToolCall]) -> Vec<ToolCallRecord> {
        if self.config.parallel_execution {
            join_all(calls.iter().map(|call| self.execute_single_tool(call))).await
        } else {
            let mut records = Vec::with_capacity(calls.len());
            for call in calls {
                records.push(self.execute_single_tool(call).await);
            }
            records
        }
    }

    /// Execute a single tool call with timeout.
    async fn execute_single_tool(&self, call: &ToolCall) -> ToolCallRecord {
        if !self.registry.has_tool(&call.name) {
            warn!(tool = %call.name, "Model requested an unregistered tool");
        }

        let start = Instant::now();
        let result = timeout(
            self.config.tool_timeout,
            self.registry.execute(&call.name, call.arguments.clone()),
        )
        .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let (result, error) = match result {
            Ok(Ok(value)) => (value, None),
            Ok(Err(e)) => (serde_json::json!({"error": e.to_string()}), Some(e.to_string())),
            Err(_) => (
                serde_json::json!({"error": "Tool execution timed out"}),
                Some("Tool execution timed out".to_string()),
            ),
        };

        debug!(
            tool = %call.name,
            arguments = %call.arguments,
            duration_ms,
            success = error.is_none(),
            "Tool call executed"
        );

        ToolCallRecord {
            id: call.id.clone(),
            name: call.name.clone(),
            arguments: call.arguments.clone(),
            result,
            success: error.is_none(),
            duration_ms,
            error,
        }
    }
}
