//! Lead submission.
//!
//! Nothing is sent anywhere yet: [`SimulatedSubmitter`] waits a fixed delay
//! and reports success so the submitting screen behaves like a real backend.

use std::time::Duration;

use async_trait::async_trait;
use dwell_core::WizardRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission backend unavailable")]
    Unavailable,
}

impl SubmitError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected(_) => "We could not accept your request. Please review your details.",
            SubmitError::Unavailable => "We could not reach our servers. Please try again.",
        }
    }
}

#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, record: &WizardRecord) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, record: &WizardRecord) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(wizard = %record.kind(), "simulated submission accepted");
        Ok(())
    }
}
