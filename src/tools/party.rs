use crate::tools::catalogs::{lookup, PARTY_FALLBACK, PARTY_RESPONSES};
use crate::tools::registry::Tool;
use crate::tools::string_arg;
use crate::types::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// The party's answer for the first known topic in `question`.
pub fn gather_party_wisdom(question: &str) -> String {
    lookup(&PARTY_RESPONSES, question)
        .unwrap_or(PARTY_FALLBACK)
        .to_string()
}

/// `gather_party_wisdom` as a [`Tool`].
pub struct GatherPartyWisdom;

#[async_trait]
impl Tool for GatherPartyWisdom {
    fn name(&self) -> &str {
        "gather_party_wisdom"
    }

    fn description(&self) -> &str {
        "Ask the D&D party for their collective wisdom."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "The question to put to the party"
                }
            },
            "required": ["question"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let question = string_arg(&args, "question")?;
        Ok(Value::String(gather_party_wisdom(question)))
    }
}
