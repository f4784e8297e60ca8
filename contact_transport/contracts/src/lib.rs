use std::future::Future;

use contact_models::{form::FormData, submission::SubmissionId};
use thiserror::Error;

/// Delivers contact form submissions to wherever they are handled.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionTransport: Send + Sync + 'static {
    /// Hands the submission over to the transport.
    fn submit(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<Ack, TransportError>> + Send;

    /// Checks whether the transport is currently able to deliver submissions.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A sanitized and validated form on its way to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub form: FormData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    /// Transport specific information about the delivery, e.g. a server reply.
    pub detail: Option<String>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network failure: {0}")]
    Network(#[source] anyhow::Error),
    #[error("The submission was rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockSubmissionTransport {
    pub fn with_submit(mut self, form: FormData, result: Result<Ack, TransportError>) -> Self {
        self.expect_submit()
            .once()
            .withf(move |submission| submission.form == form)
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, result: anyhow::Result<()>) -> Self {
        self.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }
}
