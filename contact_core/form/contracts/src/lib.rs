use std::future::Future;

use contact_models::{
    form::FormData,
    rule::FieldConfiguration,
    submission::SubmissionResult,
    validation::ValidationResult,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Checks all known fields and reports every failing one.
    fn validate(&self, form: &FormData) -> ValidationResult;

    /// Trims string values and strips angle brackets from them.
    fn sanitize(&self, form: &FormData) -> FormData;

    /// Returns the static rule table of the form.
    fn field_configuration(&self) -> FieldConfiguration;

    /// Hands the form over to the submission transport.
    ///
    /// Failures are never propagated but reported as an unsuccessful
    /// [`SubmissionResult`].
    fn submit(&self, form: FormData) -> impl Future<Output = SubmissionResult> + Send;

    /// Sanitizes, validates and submits the form.
    fn process(
        &self,
        form: FormData,
    ) -> impl Future<Output = Result<SubmissionResult, ContactFormProcessError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactFormProcessError {
    #[error("The form is invalid.")]
    Invalid(ValidationResult),
}

#[cfg(feature = "mock")]
impl MockContactFormService {
    pub fn with_validate(mut self, form: FormData, result: ValidationResult) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| result);
        self
    }

    pub fn with_sanitize(mut self, form: FormData, result: FormData) -> Self {
        self.expect_sanitize()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| result);
        self
    }

    pub fn with_field_configuration(mut self, configuration: FieldConfiguration) -> Self {
        self.expect_field_configuration()
            .once()
            .return_once(|| configuration);
        self
    }

    pub fn with_process(
        mut self,
        form: FormData,
        result: Result<SubmissionResult, ContactFormProcessError>,
    ) -> Self {
        self.expect_process()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
