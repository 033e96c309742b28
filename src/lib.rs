//! # Downside-Up Complaint Bureau
//!
//! A small tool-calling agent built in Rust. Complaints go to an LLM agent
//! that may call any of four canned-response tools, in any order and as
//! often as it likes. Each run yields a transcript, and the bureau tallies
//! which tools the agent reached for.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use bureau::{ComplaintAgent, Driver, OpenAIClient, SharedRng, UsageTracker};
//! use bureau::cli::output::Output;
//!
//! let client = OpenAIClient::new(api_key, "https://api.openai.com/v1".into(), "gpt-4o-mini".into(), 0.7);
//! let agent = ComplaintAgent::new(Box::new(client), SharedRng::seeded(7), Default::default());
//!
//! let mut tracker = UsageTracker::new();
//! let summary = Driver::default().run(&agent, &mut tracker, &mut Output::new()).await?;
//! println!("{} tool calls", summary.total_calls);
//! ```
//!
//! ### Calling the tools directly
//!
//! ```rust
//! use bureau::tools::records::check_hawkins_records;
//!
//! let record = check_hawkins_records("The portal opens on different days");
//! assert!(record.starts_with("Records show portals"));
//! ```
//!
//! ## Modules
//!
//! - [`agents`] - The complaint agent and the runner trait the driver uses
//! - [`cli`] - Argument parsing and report output
//! - [`driver`] - Sequential complaint batch
//! - [`llm`] - LLM client and the tool calling loop
//! - [`tools`] - The four bureau tools and their registry
//! - [`types`] - Common types and error handling
//! - [`usage`] - Tool usage accounting
//! - [`utils`] - Configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Complaint agent and runner abstraction.
pub mod agents;
/// Command line parsing and report output.
pub mod cli;
/// Complaint batch driver.
pub mod driver;
/// LLM client and tool calling loop.
pub mod llm;
/// Bureau tools and registry.
pub mod tools;
/// Core types (tool calls, errors).
pub mod types;
/// Tool usage accounting.
pub mod usage;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use agents::{AgentRunner, ComplaintAgent};
pub use driver::Driver;
pub use llm::{LLMClient, LLMResponse, OpenAIClient, ToolCoordinator, Transcript};
pub use tools::{SharedRng, ToolRegistry};
pub use types::{AppError, Result};
pub use usage::{UsageSummary, UsageTracker};
pub use utils::config::BureauConfig;
