//! Colored output helpers for the report
//!
//! Renders the complaint-by-complaint report and the usage analysis. With
//! colour off the text is plain and stable, which is what tests compare
//! against.

use crate::usage::UsageSummary;
use owo_colors::OwoColorize;
use std::io::{self, Stdout, Write};

/// Width of the `=` rule around each complaint.
pub const RULE_WIDTH: usize = 60;

/// Report writer over any [`Write`] sink
pub struct Output<W: Write = Stdout> {
    writer: W,
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl Output<Stdout> {
    /// Stdout with colors enabled
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), true)
    }

    /// Stdout with colors disabled
    pub fn no_color() -> Self {
        Self::with_writer(io::stdout(), false)
    }
}

impl<W: Write> Output<W> {
    /// Report writer over `writer`
    pub fn with_writer(writer: W, colored: bool) -> Self {
        Self { writer, colored }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn rule(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        if self.colored {
            rule.cyan().to_string()
        } else {
            rule
        }
    }

    /// Print the batch intro line
    pub fn intro(&mut self) -> io::Result<()> {
        let line = "Testing agent with sample complaints...";
        if self.colored {
            writeln!(self.writer, "\n{}\n", line.bright_white().bold())
        } else {
            writeln!(self.writer, "\n{}\n", line)
        }
    }

    /// Print the banner that opens a complaint
    pub fn complaint(&mut self, complaint: &str) -> io::Result<()> {
        let rule = self.rule();
        let label = if self.colored {
            "COMPLAINT:".yellow().bold().to_string()
        } else {
            "COMPLAINT:".to_string()
        };
        writeln!(self.writer, "\n{}", rule)?;
        writeln!(self.writer, "{} {}", label, complaint)?;
        writeln!(self.writer, "{}", rule)
    }

    /// Print the agent's final answer
    pub fn response(&mut self, text: &str) -> io::Result<()> {
        let label = if self.colored {
            "RESPONSE:".green().bold().to_string()
        } else {
            "RESPONSE:".to_string()
        };
        writeln!(self.writer, "\n{}\n {}", label, text)
    }

    /// Print the tool usage analysis
    pub fn usage(&mut self, summary: &UsageSummary) -> io::Result<()> {
        if self.colored {
            writeln!(
                self.writer,
                "\n{}",
                "=== Tool Usage Analysis ===".bright_white().bold()
            )?;
            writeln!(self.writer, "{} {}", "Total tool calls:".dimmed(), summary.total_calls)?;
            writeln!(self.writer, "{} {}", "Tool counts:".dimmed(), summary.counts_display())?;
            writeln!(
                self.writer,
                "{} {}",
                "Most used tool:".dimmed(),
                summary.most_used_display().bright_cyan()
            )?;
            writeln!(self.writer, "{} {}", "Tool sequence:".dimmed(), summary.sequence_display())
        } else {
            writeln!(self.writer, "\n{}", summary)
        }
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Print an error message to stderr
pub fn error(colored: bool, message: &str) {
    if colored {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Output<Vec<u8>> {
        Output::with_writer(Vec::new(), false)
    }

    fn text(output: Output<Vec<u8>>) -> String {
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_output_defaults() {
        assert!(Output::new().colored);
        assert!(!Output::no_color().colored);
        assert!(Output::default().colored);
    }

    #[test]
    fn test_complaint_banner() {
        let mut out = plain();
        out.complaint("Why?").unwrap();
        let rule = "=".repeat(60);
        assert_eq!(text(out), format!("\n{rule}\nCOMPLAINT: Why?\n{rule}\n"));
    }

    #[test]
    fn test_response() {
        let mut out = plain();
        out.response("Resolution: nap.").unwrap();
        assert_eq!(text(out), "\nRESPONSE:\n Resolution: nap.\n");
    }

    #[test]
    fn test_usage_plain() {
        let summary = UsageSummary {
            total_calls: 0,
            counts: vec![("consult_demogorgon".to_string(), 0)],
            most_used: None,
            sequence: vec![],
        };
        let mut out = plain();
        out.usage(&summary).unwrap();
        let report = text(out);
        assert!(report.starts_with("\n=== Tool Usage Analysis ===\n"));
        assert!(report.contains("Tool counts: {'consult_demogorgon': 0}\n"));
        assert!(report.contains("Most used tool: none\n"));
        assert!(report.ends_with("Tool sequence: (no tools called)\n"));
    }

    #[test]
    fn test_colored_keeps_content() {
        let mut out = Output::with_writer(Vec::new(), true);
        out.complaint("Why?").unwrap();
        out.response("Because.").unwrap();
        let report = text(out);
        assert!(report.contains("Why?"));
        assert!(report.contains("Because."));
        assert!(report.contains('\u{1b}'));
    }
}
