//! Mock implementations for testing.
//!
//! Scripted LLM clients and agent runners shared by the integration tests,
//! so nothing here touches the network.

use async_trait::async_trait;
use bureau::agents::AgentRunner;
use bureau::llm::{
    ConversationMessage, LLMClient, LLMResponse, TokenUsage, Transcript,
};
use bureau::types::{AppError, Result, ToolCall, ToolDefinition};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock LLM client that plays back a fixed script of turns.
///
/// Each call to the model pops the next scripted response. When the script
/// runs out the client answers with `fallback` and no tool calls. Every
/// conversation it is shown is kept for inspection.
///
/// # Examples
///
/// ```ignore
/// let client = MockLLMClient::new("Resolution: done")
///     .then_tools(vec![tool_call("check_hawkins_records", json!({"query": "portal"}))]);
/// ```
#[derive(Clone)]
pub struct MockLLMClient {
    script: Arc<Mutex<VecDeque<LLMResponse>>>,
    seen: Arc<Mutex<Vec<Vec<ConversationMessage>>>>,
    fallback: String,
    should_fail: bool,
}

impl MockLLMClient {
    /// Client whose final answer is `response`.
    pub fn new(response: &str) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            seen: Arc::new(Mutex::new(Vec::new())),
            fallback: response.to_string(),
            should_fail: false,
        }
    }

    /// Client that always returns an error.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    /// Queue a turn that requests `calls`.
    pub fn then_tools(self, calls: Vec<ToolCall>) -> Self {
        self.script.lock().push_back(LLMResponse {
            content: String::new(),
            tool_calls: calls,
            finish_reason: "tool_calls".to_string(),
            usage: Some(TokenUsage::new(10, 5)),
        });
        self
    }

    /// Conversations the client has been shown, one per call.
    pub fn seen(&self) -> Vec<Vec<ConversationMessage>> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_tools_and_history(
        &self,
        messages: &[ConversationMessage],
        _tools: &[ToolDefinition],
    ) -> Result<LLMResponse> {
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        self.seen.lock().push(messages.to_vec());

        Ok(self.script.lock().pop_front().unwrap_or_else(|| LLMResponse {
            content: self.fallback.clone(),
            tool_calls: vec![],
            finish_reason: "stop".to_string(),
            usage: Some(TokenUsage::new(10, 5)),
        }))
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Build a tool call with a sequential-looking id.
pub fn tool_call(name: &str, arguments: Value) -> ToolCall {
    ToolCall {
        id: format!("call_{}", name),
        name: name.to_string(),
        arguments,
    }
}

/// Agent runner that skips the model and replays canned transcripts.
pub struct ScriptedRunner {
    runs: Mutex<VecDeque<Result<Transcript>>>,
    pub received: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(runs: Vec<Result<Transcript>>) -> Self {
        Self {
            runs: Mutex::new(runs.into()),
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AgentRunner for ScriptedRunner {
    async fn run(&self, complaint: &str) -> Result<Transcript> {
        self.received.lock().push(complaint.to_string());
        self.runs
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Internal("script exhausted".to_string())))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Transcript in which `tools` ran in order before `answer`.
pub fn transcript(tools: &[&str], answer: &str) -> Transcript {
    let mut messages = vec![ConversationMessage::user("Complaint: scripted")];
    for (i, name) in tools.iter().enumerate() {
        messages.push(ConversationMessage::tool_result(
            format!("call_{}", i),
            *name,
            &Value::String(format!("{} output", name)),
        ));
    }
    messages.push(ConversationMessage::assistant(answer, vec![]));

    Transcript {
        content: answer.to_string(),
        tool_calls: vec![],
        iterations: 2,
        finish_reason: "stop".to_string(),
        total_usage: TokenUsage::default(),
        messages,
    }
}
