use contact_config::Config;
use contact_core_form_impl::{ContactFormFeatureConfig, ContactFormServiceImpl};

use crate::transport::{self, Transport};

pub type ContactForm = ContactFormServiceImpl<Transport>;

/// Builds the contact form service with the transport selected in the config.
pub fn contact_form(config: &Config) -> anyhow::Result<ContactForm> {
    let transport = transport::connect(&config.transport)?;
    Ok(contact_form_with_transport(transport, config))
}

pub fn contact_form_with_transport(transport: Transport, config: &Config) -> ContactForm {
    let feature_config = ContactFormFeatureConfig {
        submit_timeout: config.contact.submit_timeout.into(),
    };

    ContactFormServiceImpl::new(transport, feature_config)
}
