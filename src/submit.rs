//! Destinations for a completed submission

use crate::state::Submission;
use anyhow::Result;

/// Receives the snapshot captured when the wizard reaches its summary
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission) -> Result<()>;
}

/// Writes submissions to the log as JSON
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &Submission) -> Result<()> {
        let json = serde_json::to_string(submission)?;
        tracing::info!(
            members = submission.members.len(),
            submission = %json,
            "form submitted"
        );
        Ok(())
    }
}
