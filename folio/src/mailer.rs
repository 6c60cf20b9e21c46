use std::sync::Arc;

use folio_config::MailerConfig;
use folio_email_impl::{EmailServiceConfig, EmailServiceImpl, DEFAULT_SENDER_NAME};

/// Build the provider client from the mailer config section.
pub fn build(config: &MailerConfig) -> EmailServiceImpl {
    EmailServiceImpl::new(EmailServiceConfig::new(
        config.api_key.clone(),
        config.sender_email.clone(),
        config.sender_name.clone(),
        config.endpoint_override.clone(),
    ))
}

pub fn sender_name(config: &MailerConfig) -> Arc<str> {
    config
        .sender_name
        .as_deref()
        .unwrap_or(DEFAULT_SENDER_NAME)
        .into()
}
