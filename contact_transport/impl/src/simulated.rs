use std::time::Duration;

use contact_transport_contracts::{Ack, Submission, SubmissionTransport, TransportError};
use tracing::info;

/// Stand-in for a real backend: waits for a fixed delay, logs the submission
/// and always acknowledges it.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTransport {
    config: SimulatedTransportConfig,
}

#[derive(Debug, Clone)]
pub struct SimulatedTransportConfig {
    pub delay: Duration,
}

impl Default for SimulatedTransportConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
        }
    }
}

impl SimulatedTransport {
    pub fn new(config: SimulatedTransportConfig) -> Self {
        Self { config }
    }
}

impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, submission: Submission) -> Result<Ack, TransportError> {
        tokio::time::sleep(self.config.delay).await;
        info!(id = %submission.id, form = ?submission.form, "Form data submitted");
        Ok(Ack::default())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use contact_models::{form::FormData, submission::SubmissionId};
    use tokio::time::Instant;
    use uuid::Uuid;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn submit_waits_and_acknowledges() {
        // Arrange
        let sut = SimulatedTransport::new(SimulatedTransportConfig {
            delay: Duration::from_millis(1000),
        });
        let submission = Submission {
            id: SubmissionId::from(Uuid::nil()),
            form: FormData::from_iter([("firstName", "Jane")]),
        };
        let start = Instant::now();

        // Act
        let result = sut.submit(submission).await;

        // Assert
        assert_eq!(result.unwrap(), Ack::default());
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn ping() {
        SimulatedTransport::default().ping().await.unwrap();
    }
}
