use std::sync::Arc;

use email_address::EmailAddress;
use folio_email_contracts::{ContentType, Email, EmailSendError, EmailService};
use serde::Serialize;
use url::Url;

use crate::http::HttpClient;

pub mod http;

const SEND_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

pub const DEFAULT_SENDER_NAME: &str = "Portfolio";

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    config: EmailServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    endpoint: Arc<Url>,
    api_key: Option<Arc<str>>,
    sender_email: Option<Arc<EmailAddress>>,
    sender_name: Arc<str>,
}

impl EmailServiceConfig {
    pub fn new(
        api_key: Option<String>,
        sender_email: Option<EmailAddress>,
        sender_name: Option<String>,
        endpoint_override: Option<Url>,
    ) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            api_key: api_key.map(Into::into),
            sender_email: sender_email.map(Into::into),
            sender_name: sender_name
                .unwrap_or_else(|| DEFAULT_SENDER_NAME.into())
                .into(),
        }
    }

    /// Required keys, checked before any request is issued.
    fn resolve(&self) -> Result<(&str, &EmailAddress), EmailSendError> {
        match (self.api_key.as_deref(), self.sender_email.as_deref()) {
            (Some(api_key), Some(sender_email)) => Ok((api_key, sender_email)),
            (api_key, sender_email) => {
                let mut missing = Vec::new();
                if api_key.is_none() {
                    missing.push("mailer.api_key");
                }
                if sender_email.is_none() {
                    missing.push("mailer.sender_email");
                }
                Err(EmailSendError::NotConfigured { missing })
            }
        }
    }
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let (api_key, sender_email) = self.config.resolve()?;

        let body = email.body.as_str();
        let payload = SendEmailRequest {
            sender: Party {
                email: sender_email.as_str(),
                name: Some(&self.config.sender_name),
            },
            to: [Party {
                email: email.recipient.email.as_str(),
                name: email.recipient.name.as_deref(),
            }],
            reply_to: email.reply_to.as_ref().map(|mailbox| Party {
                email: mailbox.email.as_str(),
                name: mailbox.name.as_deref(),
            }),
            subject: &email.subject,
            text_content: matches!(email.content_type, ContentType::Text).then_some(body),
            html_content: matches!(email.content_type, ContentType::Html).then_some(body),
        };

        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .header("api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| EmailSendError::Other(err.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailSendError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(recipient = %email.recipient, subject = %email.subject, "email accepted by provider");
        Ok(())
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    sender: Party<'a>,
    to: [Party<'a>; 1],
    #[serde(rename = "replyTo", skip_serializing_if = "Option::is_none")]
    reply_to: Option<Party<'a>>,
    subject: &'a str,
    #[serde(rename = "textContent", skip_serializing_if = "Option::is_none")]
    text_content: Option<&'a str>,
    #[serde(rename = "htmlContent", skip_serializing_if = "Option::is_none")]
    html_content: Option<&'a str>,
}

#[derive(Serialize)]
struct Party<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}
