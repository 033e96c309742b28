//! Tool usage accounting across a batch of agent runs.
//!
//! Counters exist only for the four bureau tools. Every tool result seen is
//! appended to the sequence, but a name outside that set is never counted,
//! so `total_calls` and `sequence.len()` diverge when a model invents a tool.
//! That mirrors how the bureau has always reported usage; it is kept as is.

use crate::llm::Transcript;
use crate::tools::KNOWN_TOOLS;
use serde::Serialize;
use std::fmt;

/// Per-tool call counters plus the full call sequence.
#[derive(Debug, Clone)]
pub struct UsageTracker {
    counts: Vec<(String, usize)>,
    sequence: Vec<String>,
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageTracker {
    /// Tracker with a zeroed counter for each bureau tool.
    pub fn new() -> Self {
        Self::with_tools(KNOWN_TOOLS)
    }

    /// Tracker counting only the given tool names, in that order.
    pub fn with_tools<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            counts: names.into_iter().map(|n| (n.into(), 0)).collect(),
            sequence: Vec::new(),
        }
    }

    /// Fold one run's tool invocations into the totals, in transcript order.
    pub fn consume(&mut self, transcript: &Transcript) {
        for message in transcript.tool_invocations() {
            let name = message.name.clone().unwrap_or_default();
            self.record(name);
        }
    }

    /// Record a single invocation of `name`.
    pub fn record(&mut self, name: impl Into<String>) {
        let name = name.into();
        if let Some((_, count)) = self.counts.iter_mut().find(|(n, _)| *n == name) {
            *count += 1;
        }
        self.sequence.push(name);
    }

    /// Snapshot of the totals so far
    pub fn summarize(&self) -> UsageSummary {
        let total_calls = self.counts.iter().map(|(_, c)| c).sum();

        // ties keep the earlier-registered tool
        let most_used = (total_calls > 0)
            .then(|| {
                self.counts
                    .iter()
                    .fold(None::<&(String, usize)>, |best, entry| match best {
                        Some(b) if b.1 >= entry.1 => Some(b),
                        _ => Some(entry),
                    })
                    .map(|(name, _)| name.clone())
            })
            .flatten();

        UsageSummary {
            total_calls,
            counts: self.counts.clone(),
            most_used,
            sequence: self.sequence.clone(),
        }
    }
}

/// Snapshot of a [`UsageTracker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageSummary {
    /// Sum of the per-tool counters
    pub total_calls: usize,
    /// Counter per known tool, in registration order
    pub counts: Vec<(String, usize)>,
    /// Highest counter, `None` when nothing was counted
    pub most_used: Option<String>,
    /// Every tool name seen, known or not, in call order
    pub sequence: Vec<String>,
}

impl UsageSummary {
    /// Counter for `name`, if it is a known tool
    pub fn count(&self, name: &str) -> Option<usize> {
        self.counts.iter().find(|(n, _)| n == name).map(|(_, c)| *c)
    }

    /// `{'name': n, ...}`
    pub fn counts_display(&self) -> String {
        let entries: Vec<String> = self
            .counts
            .iter()
            .map(|(name, count)| format!("'{}': {}", name, count))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }

    /// Most used tool, or `none`
    pub fn most_used_display(&self) -> &str {
        self.most_used.as_deref().unwrap_or("none")
    }

    /// `a -> b -> c`, or `(no tools called)`
    pub fn sequence_display(&self) -> String {
        if self.sequence.is_empty() {
            "(no tools called)".to_string()
        } else {
            self.sequence.join(" -> ")
        }
    }
}

impl fmt::Display for UsageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Tool Usage Analysis ===")?;
        writeln!(f, "Total tool calls: {}", self.total_calls)?;
        writeln!(f, "Tool counts: {}", self.counts_display())?;
        writeln!(f, "Most used tool: {}", self.most_used_display())?;
        write!(f, "Tool sequence: {}", self.sequence_display())
    }
}
