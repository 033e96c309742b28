use crate::tools::catalogs::spells;
use crate::tools::random::SharedRng;
use crate::tools::registry::Tool;
use crate::tools::string_arg;
use crate::types::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Creativity used when the caller does not pick one.
pub const DEFAULT_CREATIVITY: &str = "medium";

/// How many spells a creativity level asks for.
///
/// Unknown levels count as `medium`.
pub fn creativity_multiplier(level: &str) -> usize {
    match level {
        "low" => 1,
        "high" => 3,
        _ => 2,
    }
}

/// Distinct spells for `problem`, one per line, in random order.
pub fn cast_interdimensional_spell(rng: &SharedRng, problem: &str, creativity_level: &str) -> String {
    let book = spells(problem);
    rng.sample(&book, creativity_multiplier(creativity_level))
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `cast_interdimensional_spell` as a [`Tool`].
pub struct CastInterdimensionalSpell {
    rng: SharedRng,
}

impl CastInterdimensionalSpell {
    /// Tool drawing spells from `rng`
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl Tool for CastInterdimensionalSpell {
    fn name(&self) -> &str {
        "cast_interdimensional_spell"
    }

    fn description(&self) -> &str {
        "Suggest a creative interdimensional spell to fix a problem."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "problem": {
                    "type": "string",
                    "description": "The problem the spell should fix"
                },
                "creativity_level": {
                    "type": "string",
                    "enum": ["low", "medium", "high"],
                    "default": DEFAULT_CREATIVITY
                }
            },
            "required": ["problem"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let problem = string_arg(&args, "problem")?;
        let level = args["creativity_level"].as_str().unwrap_or(DEFAULT_CREATIVITY);
        Ok(Value::String(cast_interdimensional_spell(&self.rng, problem, level)))
    }
}
