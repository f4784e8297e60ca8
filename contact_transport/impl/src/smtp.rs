use anyhow::anyhow;
use contact_models::{email_address::EmailAddress, form::FieldName};
use contact_transport_contracts::{Ack, Submission, SubmissionTransport, TransportError};
use contact_utils::Apply;
use lettre::{
    message::{header, Mailbox, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, warn};

/// Delivers submissions as plain text emails to a fixed recipient.
#[derive(Debug, Clone)]
pub struct SmtpTransport {
    from: EmailAddress,
    recipient: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    pub fn new(url: &str, from: EmailAddress, recipient: EmailAddress) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self {
            from,
            recipient,
            transport,
        })
    }

    fn build_message(&self, submission: &Submission) -> anyhow::Result<Message> {
        let form = &submission.form;
        let field = |field| form.field(field).unwrap_or_default();

        // the submitter's address has only passed the loose form check
        let reply_to = form
            .field(FieldName::Email)
            .and_then(|email| email.parse::<Mailbox>().ok());

        Message::builder()
            .from(Mailbox::new(None, self.from.0.clone()))
            .to(Mailbox::new(None, self.recipient.0.clone()))
            .apply_map(reply_to, MessageBuilder::reply_to)
            .message_id(Some(format!("<{}@contact-form>", submission.id)))
            .subject(format!("[Contact Form] {}", field(FieldName::Subject)))
            .header(header::ContentType::TEXT_PLAIN)
            .body(format!(
                "Message from {} {} ({}):\n\n{}",
                field(FieldName::FirstName),
                field(FieldName::LastName),
                field(FieldName::Email),
                field(FieldName::Message),
            ))
            .map_err(Into::into)
    }
}

impl SubmissionTransport for SmtpTransport {
    async fn submit(&self, submission: Submission) -> Result<Ack, TransportError> {
        let message = self.build_message(&submission)?;

        debug!(id = %submission.id, "Sending contact form email");
        match self.transport.send(message).await {
            Ok(response) if response.is_positive() => Ok(Ack {
                detail: response.first_line().map(Into::into),
            }),
            Ok(response) => {
                warn!(
                    id = %submission.id,
                    code = %response.code(),
                    "SMTP server refused the message"
                );
                Err(TransportError::Rejected(format!(
                    "SMTP server replied with {}",
                    response.code()
                )))
            }
            Err(err) if err.is_permanent() => Err(TransportError::Rejected(err.to_string())),
            Err(err) => Err(TransportError::Network(err.into())),
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
