//! Configuration for the complaint bureau
//!
//! Settings are layered, later sources winning:
//! - `bureau.toml` in the current directory (or an explicit `--config` path)
//! - a `.env` file, loaded into the process environment
//! - environment variables
//! - command line arguments (applied by the binary)
//!
//! The API key is only ever read from the environment.

use crate::llm::ToolCallingConfig;
use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "bureau.toml";

/// Environment variable holding the provider credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Runtime settings for the bureau binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BureauConfig {
    /// Chat model to use
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Base URL of the OpenAI-compatible API
    pub api_base: String,

    /// Maximum LLM round-trips per complaint
    pub max_iterations: usize,

    /// Timeout for a single tool call (seconds)
    pub tool_timeout_secs: u64,

    /// How many of the sample complaints to process
    pub batch_size: usize,

    /// Seed for the tools' random choices; entropy when unset
    pub seed: Option<u64>,

    /// Provider credential, never read from or written to the file
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for BureauConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            api_base: "https://api.openai.com/v1".to_string(),
            max_iterations: 10,
            tool_timeout_secs: 30,
            batch_size: 3,
            seed: None,
            api_key: None,
        }
    }
}

impl BureauConfig {
    /// Load configuration from file
    ///
    /// With no explicit path, `bureau.toml` is used when it exists and
    /// defaults otherwise. An explicit path must exist, and
    /// `max_iterations` must be at least 1.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path: Option<PathBuf> = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                let config: Self = toml::from_str(&content).map_err(|e| {
                    AppError::Config(format!("Failed to parse {}: {}", path.display(), e))
                })?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(AppError::Config(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load `.env` (if any) and apply process environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(base) = non_empty("OPENAI_API_BASE") {
            self.api_base = base;
        }
        if let Some(model) = non_empty("BUREAU_MODEL") {
            self.model = model;
        }
    }

    /// The credential, or a configuration error naming the missing variable
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "{} is not set; export it or add it to a .env file",
                API_KEY_VAR
            ))
        })
    }

    /// Loop settings for the tool coordinator
    pub fn tool_calling(&self) -> ToolCallingConfig {
        ToolCallingConfig {
            max_iterations: self.max_iterations,
            tool_timeout: Duration::from_secs(self.tool_timeout_secs),
            ..ToolCallingConfig::default()
        }
    }
}
