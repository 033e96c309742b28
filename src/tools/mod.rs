//! Bureau Tools for Agent Capabilities
//!
//! Four canned-response tools the complaint agent may call, plus the
//! infrastructure that exposes them to the model.
//!
//! # Module Structure
//!
//! - [`catalogs`](crate::tools::catalogs) - The literal response text
//! - [`random`](crate::tools::random) - Injectable, seedable random source
//! - [`registry`](crate::tools::registry) - Tool registration and execution
//!
//! # Available Tools
//!
//! | Tool | Input | Behaviour |
//! |------|-------|-----------|
//! | `consult_demogorgon` | `complaint` | one of three quips, chosen at random |
//! | `check_hawkins_records` | `query` | keyword record lookup with fallback |
//! | `cast_interdimensional_spell` | `problem`, `creativity_level` | 1-3 distinct spells |
//! | `gather_party_wisdom` | `question` | keyword party answer with fallback |
//!
//! Each tool is also callable directly as a plain function:
//!
//! ```ignore
//! let record = records::check_hawkins_records("portal");
//! let spells = spell::cast_interdimensional_spell(&rng, "the gate", "high");
//! ```

/// Literal response catalogs.
pub mod catalogs;
/// `consult_demogorgon` tool.
pub mod demogorgon;
/// `gather_party_wisdom` tool.
pub mod party;
/// Shared pseudo-random source.
pub mod random;
/// `check_hawkins_records` tool.
pub mod records;
/// Tool registry for managing available tools.
pub mod registry;
/// `cast_interdimensional_spell` tool.
pub mod spell;

pub use random::SharedRng;
pub use registry::{Tool, ToolRegistry};

use crate::types::{AppError, Result};
use serde_json::Value;

/// Names of the bureau tools, in registration order.
pub const KNOWN_TOOLS: [&str; 4] = [
    "consult_demogorgon",
    "check_hawkins_records",
    "cast_interdimensional_spell",
    "gather_party_wisdom",
];

/// Required string argument `key` from a tool-call argument object.
pub(crate) fn string_arg<'a>(args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::InvalidInput(format!("missing string argument '{}'", key)))
}
