//! CLI module for the complaint bureau
//!
//! Uses clap for argument parsing and owo-colors for colored terminal output.
//! Every flag is optional; running the binary bare processes the default
//! complaint batch.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Downside-Up Complaint Bureau
///
/// Sends sample complaints to a tool-calling LLM agent and reports which
/// tools it reached for.
#[derive(Parser, Debug)]
#[command(
    name = "complaint-bureau",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Downside-Up Complaint Bureau - a tool-calling LLM agent demo",
    long_about = "Runs a batch of sample complaints through an LLM agent equipped with four\n\
                  tools, prints each resolution, then a tool usage analysis.\n\n\
                  Requires OPENAI_API_KEY in the environment or a .env file.",
    after_help = "EXAMPLES:\n    \
                  complaint-bureau                      # Process the first three complaints\n    \
                  complaint-bureau --batch-size 4       # Include the fourth complaint\n    \
                  complaint-bureau --seed 7 --verbose   # Reproducible tools, debug logging"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./bureau.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model to use (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Number of sample complaints to process (overrides config)
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Seed for the tools' random choices (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["complaint-bureau"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.model.is_none());
        assert!(cli.batch_size.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "complaint-bureau",
            "--model",
            "gpt-4o",
            "-b",
            "4",
            "--seed",
            "7",
            "-v",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.batch_size, Some(4));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_bad_batch_size() {
        assert!(Cli::try_parse_from(["complaint-bureau", "-b", "many"]).is_err());
    }
}
