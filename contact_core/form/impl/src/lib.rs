use std::time::Duration;

use anyhow::anyhow;
use contact_core_form_contracts::{ContactFormProcessError, ContactFormService};
use contact_models::{
    form::FormData,
    rule::{self, FieldConfiguration},
    submission::{SubmissionId, SubmissionResult},
    validation::ValidationResult,
};
use contact_transport_contracts::{Submission, SubmissionTransport, TransportError};
use tracing::{debug, error, info};
use uuid::Uuid;

mod sanitize;
mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<Transport> {
    transport: Transport,
    config: ContactFormFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFormFeatureConfig {
    /// Upper bound for a single submission, after which it counts as a
    /// network failure.
    pub submit_timeout: Duration,
}

impl Default for ContactFormFeatureConfig {
    fn default() -> Self {
        Self {
            submit_timeout: Duration::from_secs(10),
        }
    }
}

impl<Transport> ContactFormServiceImpl<Transport> {
    pub fn new(transport: Transport, config: ContactFormFeatureConfig) -> Self {
        Self { transport, config }
    }
}

impl<Transport> ContactFormService for ContactFormServiceImpl<Transport>
where
    Transport: SubmissionTransport,
{
    fn validate(&self, form: &FormData) -> ValidationResult {
        validate::validate(form)
    }

    fn sanitize(&self, form: &FormData) -> FormData {
        sanitize::sanitize(form)
    }

    fn field_configuration(&self) -> FieldConfiguration {
        rule::field_configuration()
    }

    async fn submit(&self, form: FormData) -> SubmissionResult {
        let id = SubmissionId::from(Uuid::new_v4());
        let timeout = self.config.submit_timeout;

        debug!(%id, "Submitting contact form");
        let result = tokio::time::timeout(timeout, self.transport.submit(Submission { id, form }))
            .await
            .unwrap_or_else(|_| {
                Err(TransportError::Network(anyhow!(
                    "Submission timed out after {timeout:?}"
                )))
            });

        match result {
            Ok(ack) => {
                info!(%id, detail = ?ack.detail, "Contact form submitted");
                SubmissionResult::success()
            }
            Err(err) => {
                error!(%id, "Failed to submit contact form: {err}");
                SubmissionResult::failure()
            }
        }
    }

    async fn process(&self, form: FormData) -> Result<SubmissionResult, ContactFormProcessError> {
        let form = self.sanitize(&form);

        let validation = self.validate(&form);
        if !validation.is_valid() {
            debug!(
                fields = ?validation.errors().keys().collect::<Vec<_>>(),
                "Rejecting invalid contact form"
            );
            return Err(ContactFormProcessError::Invalid(validation));
        }

        Ok(self.submit(form).await)
    }
}
