use anyhow::Context;
use contact_config::TransportConfig;
use contact_transport_contracts::{Ack, Submission, SubmissionTransport, TransportError};
use contact_transport_impl::{
    simulated::{SimulatedTransport, SimulatedTransportConfig},
    smtp::SmtpTransport,
};

/// The submission transport selected in the config.
#[derive(Debug, Clone)]
pub enum Transport {
    Simulated(SimulatedTransport),
    Smtp(SmtpTransport),
}

/// Sets up the configured transport. No connection is established yet.
pub fn connect(config: &TransportConfig) -> anyhow::Result<Transport> {
    Ok(match config {
        TransportConfig::Simulated { delay } => {
            Transport::Simulated(SimulatedTransport::new(SimulatedTransportConfig {
                delay: (*delay).into(),
            }))
        }
        TransportConfig::Smtp(smtp) => Transport::Smtp(
            SmtpTransport::new(&smtp.url, smtp.from.clone(), smtp.recipient.clone())
                .context("Failed to set up SMTP transport")?,
        ),
    })
}

impl SubmissionTransport for Transport {
    async fn submit(&self, submission: Submission) -> Result<Ack, TransportError> {
        match self {
            Self::Simulated(transport) => transport.submit(submission).await,
            Self::Smtp(transport) => transport.submit(submission).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Simulated(transport) => transport.ping().await,
            Self::Smtp(transport) => transport.ping().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use contact_models::{form::FormData, submission::SubmissionId};
    use uuid::Uuid;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulated() {
        // Arrange
        let config = TransportConfig::Simulated {
            delay: contact_config::Duration(Duration::from_millis(10)),
        };

        // Act
        let transport = connect(&config).unwrap();
        let result = transport
            .submit(Submission {
                id: SubmissionId::from(Uuid::nil()),
                form: FormData::new(),
            })
            .await;

        // Assert
        assert!(matches!(transport, Transport::Simulated(_)));
        assert_eq!(result.unwrap(), Ack::default());
    }
}
