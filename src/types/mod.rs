use serde::{Deserialize, Serialize};

// ============= Tool Types =============

/// A tool as advertised to the model: name, description and JSON-Schema parameters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolDefinition {
    /// Tool name the model calls it by
    pub name: String,
    /// One-line description shown to the model
    pub description: String,
    /// JSON Schema of the arguments object
    pub parameters: serde_json::Value,
}

/// A tool invocation requested by the model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolCall {
    /// Call id, echoed back in the tool result
    pub id: String,
    /// Requested tool name, which may not be registered
    pub name: String,
    /// Parsed arguments object
    pub arguments: serde_json::Value,
}

// ============= Error Types =============

/// Errors raised anywhere in the bureau.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or missing configuration, including the API key
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model request failed or the tool loop gave up
    #[error("LLM error: {0}")]
    LLM(String),

    /// Unknown tool
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad tool arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Everything else, e.g. report I/O
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias over [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
