use crate::tools::random::SharedRng;
use crate::types::{AppError, Result, ToolDefinition};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A capability the model can call by name.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name exposed to the model
    fn name(&self) -> &str;
    /// Description exposed to the model
    fn description(&self) -> &str;
    /// JSON Schema for the arguments object
    fn parameters_schema(&self) -> Value;
    /// Run the tool on parsed arguments
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// Name-indexed tool set that remembers registration order, so the model
/// always sees the tools listed the same way.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a registry with the four bureau tools, sharing one random source
    pub fn with_bureau_tools(rng: SharedRng) -> Self {
        use crate::tools::{
            demogorgon::ConsultDemogorgon, party::GatherPartyWisdom,
            records::CheckHawkinsRecords, spell::CastInterdimensionalSpell,
        };

        let mut registry = Self::new();
        registry.register(Arc::new(ConsultDemogorgon::new(rng.clone())));
        registry.register(Arc::new(CheckHawkinsRecords));
        registry.register(Arc::new(CastInterdimensionalSpell::new(rng)));
        registry.register(Arc::new(GatherPartyWisdom));
        registry
    }

    /// Register a tool. A tool with the same name replaces the earlier one in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        match self.index.get(tool.name()) {
            Some(&slot) => self.tools[slot] = tool,
            None => {
                self.index.insert(tool.name().to_string(), self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    /// Definitions to offer the model, in registration order
    pub fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect()
    }

    /// Run the named tool. Unknown names are `AppError::NotFound`.
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value> {
        if let Some(&slot) = self.index.get(name) {
            self.tools[slot].execute(args).await
        } else {
            Err(AppError::NotFound(format!("Tool not found: {}", name)))
        }
    }

    /// Get a list of all registered tool names, in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}
