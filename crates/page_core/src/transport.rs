//! Boundary that carries a validated form to the outside world.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::domain::FieldId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub values: Vec<(FieldId, String)>,
}

/// Failure taxonomy a real transport would report. The bundled simulated
/// transport never produces any of these.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("submission timed out")]
    Timeout,
    #[error("submission rejected by server: {0}")]
    Rejected(String),
    #[error("network failure: {0}")]
    Network(String),
}

#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn deliver(&self, submission: FormSubmission) -> Result<(), TransportError>;
}

/// Stand-in transport: succeeds unconditionally after a fixed delay.
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn deliver(&self, submission: FormSubmission) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(fields = submission.values.len(), "simulated submission delivered");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
