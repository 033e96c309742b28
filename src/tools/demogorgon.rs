use crate::tools::catalogs::demogorgon_quips;
use crate::tools::random::SharedRng;
use crate::tools::registry::Tool;
use crate::tools::string_arg;
use crate::types::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// One of three Demogorgon reactions to `complaint`, chosen uniformly.
pub fn consult_demogorgon(rng: &SharedRng, complaint: &str) -> String {
    let quips = demogorgon_quips(complaint);
    rng.choose(&quips).cloned().unwrap_or_default()
}

/// `consult_demogorgon` as a [`Tool`], drawing on a shared rng.
pub struct ConsultDemogorgon {
    rng: SharedRng,
}

impl ConsultDemogorgon {
    /// Tool drawing quips from `rng`
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl Tool for ConsultDemogorgon {
    fn name(&self) -> &str {
        "consult_demogorgon"
    }

    fn description(&self) -> &str {
        "Get the Demogorgon's perspective on a complaint about inconsistencies."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "complaint": {
                    "type": "string",
                    "description": "The complaint to show the Demogorgon"
                }
            },
            "required": ["complaint"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let complaint = string_arg(&args, "complaint")?;
        Ok(Value::String(consult_demogorgon(&self.rng, complaint)))
    }
}
