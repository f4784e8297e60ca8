use std::time::Duration;

use contact_models::form::FormData;
use contact_transport_contracts::MockSubmissionTransport;

use crate::{ContactFormFeatureConfig, ContactFormServiceImpl};


type Sut = ContactFormServiceImpl<MockSubmissionTransport>;

impl Sut {
    fn with_transport(transport: MockSubmissionTransport) -> Self {
        Self::new(
            transport,
            ContactFormFeatureConfig {
                submit_timeout: Duration::from_secs(5),
            },
        )
    }
}

fn valid_form() -> FormData {
    FormData::from_iter([
        ("firstName", "Jane"),
        ("lastName", "Doe"),
        ("email", "jane@example.com"),
        ("subject", "Hello there"),
        ("message", "This is a sufficiently long message."),
    ])
}
