use crate::llm::client::{LLMClient, LLMResponse, TokenUsage};
use crate::llm::coordinator::{ConversationMessage, MessageRole};
use crate::types::{AppError, Result, ToolCall, ToolDefinition};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct OpenAIClient {
    http_client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
}

impl OpenAIClient {
    /// Client for `api_base`; a trailing slash is ignored
    pub fn new(api_key: String, api_base: String, model: String, temperature: f32) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            temperature,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    /// Build the JSON request body for a conversation and tool set
    pub fn request_body(&self, messages: &[ConversationMessage], tools: &[ToolDefinition]) -> Value {
        let messages: Vec<Value> = messages.iter().map(message_to_json).collect();

        let mut body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": messages,
        });

        if !tools.is_empty() {
            let tools: Vec<Value> = tools
                .iter()
                .map(|t| {
                    json!({
                        "type": "function",
                        "function": {
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters
                        }
                    })
                })
                .collect();
            body["tools"] = Value::Array(tools);
            body["tool_choice"] = json!("auto");
        }

        body
    }
}

fn message_to_json(msg: &ConversationMessage) -> Value {
    match msg.role {
        MessageRole::Assistant if !msg.tool_calls.is_empty() => {
            let tool_calls: Vec<Value> = msg
                .tool_calls
                .iter()
                .map(|tc| {
                    json!({
                        "id": tc.id,
                        "type": "function",
                        "function": {
                            "name": tc.name,
                            "arguments": tc.arguments.to_string()
                        }
                    })
                })
                .collect();
            json!({
                "role": "assistant",
                "content": msg.content,
                "tool_calls": tool_calls
            })
        }
        MessageRole::Tool => json!({
            "role": "tool",
            "tool_call_id": msg.tool_call_id.clone().unwrap_or_default(),
            "content": msg.content
        }),
        role => json!({
            "role": role.as_str(),
            "content": msg.content
        }),
    }
}

// ============= Wire Types =============

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<WireToolCall>,
}

#[derive(Debug, Deserialize)]
struct WireToolCall {
    id: Option<String>,
    function: WireFunction,
}

#[derive(Debug, Deserialize)]
struct WireFunction {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Turn a chat-completions response body into an [`LLMResponse`]
pub fn parse_completion(body: &str) -> Result<LLMResponse> {
    let completion: ChatCompletion = serde_json::from_str(body)
        .map_err(|e| AppError::LLM(format!("Failed to parse response: {}", e)))?;

    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AppError::LLM("No response from OpenAI".to_string()))?;

    let tool_calls = choice
        .message
        .tool_calls
        .into_iter()
        .map(|call| ToolCall {
            id: call.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: call.function.name,
            arguments: serde_json::from_str(&call.function.arguments).unwrap_or(json!({})),
        })
        .collect();

    Ok(LLMResponse {
        content: choice.message.content.unwrap_or_default(),
        tool_calls,
        finish_reason: choice.finish_reason.unwrap_or_else(|| "unknown".to_string()),
        usage: completion
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens)),
    })
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn generate_with_tools_and_history(
        &self,
        messages: &[ConversationMessage],
        tools: &[ToolDefinition],
    ) -> Result<LLMResponse> {
        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(messages, tools))
            .send()
            .await
            .map_err(|e| AppError::LLM(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::LLM(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::LLM(format!(
                "OpenAI request failed ({}): {}",
                status, text
            )));
        }

        parse_completion(&text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenAIClient {
        OpenAIClient::new(
            "sk-test".to_string(),
            "https://api.openai.com/v1/".to_string(),
            "gpt-4o-mini".to_string(),
            0.7,
        )
    }

    #[test]
    fn test_completions_url_trims_slash() {
        assert_eq!(
            client().completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let tools = vec![ToolDefinition {
            name: "gather_party_wisdom".to_string(),
            description: "Ask the D&D party for their collective wisdom.".to_string(),
            parameters: json!({"type": "object", "properties": {}}),
        }];
        let messages = vec![
            ConversationMessage::system("persona"),
            ConversationMessage::user("Complaint: portal"),
            ConversationMessage::assistant(
                "",
                vec![ToolCall {
                    id: "call_1".to_string(),
                    name: "gather_party_wisdom".to_string(),
                    arguments: json!({"question": "portal"}),
                }],
            ),
            ConversationMessage::tool_result("call_1", "gather_party_wisdom", &json!("Mike: ...")),
        ];

        let body = client().request_body(&messages, &tools);
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["tool_choice"], "auto");
        assert_eq!(body["tools"][0]["function"]["name"], "gather_party_wisdom");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][2]["tool_calls"][0]["function"]["arguments"],
            "{\"question\":\"portal\"}"
        );
        assert_eq!(body["messages"][3]["role"], "tool");
        assert_eq!(body["messages"][3]["tool_call_id"], "call_1");
    }

    #[test]
    fn test_request_body_without_tools() {
        let body = client().request_body(&[ConversationMessage::user("hi")], &[]);
        assert!(body.get("tools").is_none());
        assert!(body.get("tool_choice").is_none());
    }

    #[test]
    fn test_parse_tool_calls() {
        let body = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {"name": "check_hawkins_records", "arguments": "{\"query\":\"portal\"}"}
                    }, {
                        "id": "call_def",
                        "type": "function",
                        "function": {"name": "consult_demogorgon", "arguments": "not json"}
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20}
        });

        let response = parse_completion(&body.to_string()).unwrap();
        assert_eq!(response.content, "");
        assert_eq!(response.finish_reason, "tool_calls");
        assert_eq!(response.tool_calls.len(), 2);
        assert_eq!(response.tool_calls[0].arguments["query"], "portal");
        assert_eq!(response.tool_calls[1].arguments, json!({}));
        assert_eq!(response.usage, Some(TokenUsage::new(12, 8)));
    }

    #[test]
    fn test_parse_empty_choices() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(err.to_string().contains("No response"));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_completion("<html>"), Err(AppError::LLM(_))));
    }
}
