//! Batch driver: feeds sample complaints to an agent one at a time and
//! prints the report.

use crate::agents::AgentRunner;
use crate::cli::output::Output;
use crate::types::{AppError, Result};
use crate::usage::{UsageSummary, UsageTracker};
use std::io::Write;
use tracing::info;

/// The bureau's sample complaints.
pub const SAMPLE_COMPLAINTS: [&str; 4] = [
    "Why do demogorgons sometimes eat people and sometimes don't?",
    "The portal opens on different days\u{2014}is there a schedule?",
    "Why can some psychics see the Downside Up and others can't?",
    "Why do creatures and power lines react so strangely together?",
];

/// Complaints processed when no batch size is configured.
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Runs a batch of complaints through an agent.
pub struct Driver {
    complaints: Vec<String>,
    batch_size: usize,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(SAMPLE_COMPLAINTS, DEFAULT_BATCH_SIZE)
    }
}

impl Driver {
    /// Driver over `complaints`, processing at most `batch_size` of them
    pub fn new<I, S>(complaints: I, batch_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            complaints: complaints.into_iter().map(Into::into).collect(),
            batch_size,
        }
    }

    /// Sample complaints with a custom batch size
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self::new(SAMPLE_COMPLAINTS, batch_size)
    }

    /// The complaints a run will process, in order
    pub fn batch(&self) -> &[String] {
        let end = self.batch_size.min(self.complaints.len());
        &self.complaints[..end]
    }

    /// Process the batch sequentially, then print the usage analysis.
    ///
    /// The first agent failure aborts the rest of the batch.
    pub async fn run<R, W>(
        &self,
        runner: &R,
        tracker: &mut UsageTracker,
        output: &mut Output<W>,
    ) -> Result<UsageSummary>
    where
        R: AgentRunner + ?Sized,
        W: Write,
    {
        output.intro().map_err(io_error)?;

        for (index, complaint) in self.batch().iter().enumerate() {
            info!(index, agent = runner.name(), "Processing complaint");
            output.complaint(complaint).map_err(io_error)?;

            let transcript = runner.run(complaint).await?;
            tracker.consume(&transcript);

            let final_text = transcript
                .final_message()
                .map(|m| m.content.as_str())
                .unwrap_or_default();
            output.response(final_text).map_err(io_error)?;
        }

        let summary = tracker.summarize();
        output.usage(&summary).map_err(io_error)?;
        output.flush().map_err(io_error)?;
        Ok(summary)
    }
}

fn io_error(e: std::io::Error) -> AppError {
    AppError::Internal(format!("Failed to write report: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_batch_is_first_three() {
        let driver = Driver::default();
        assert_eq!(driver.batch().len(), 3);
        assert_eq!(driver.batch()[0], SAMPLE_COMPLAINTS[0]);
        assert_eq!(driver.batch()[2], SAMPLE_COMPLAINTS[2]);
    }

    #[test]
    fn test_batch_size_clamped() {
        assert_eq!(Driver::with_batch_size(4).batch().len(), 4);
        assert_eq!(Driver::with_batch_size(10).batch().len(), 4);
        assert!(Driver::with_batch_size(0).batch().is_empty());
    }
}
